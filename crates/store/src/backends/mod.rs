//! Cache backends for the cache-backed session store.
//!
//! # Feature Flags
//!
//! - `redis` (default): Redis backend using the redis crate

mod memory;
#[cfg(feature = "redis")]
mod redis_impl;

pub use memory::{MemoryCache, DEFAULT_MAX_ENTRIES};
#[cfg(feature = "redis")]
pub use redis_impl::{connection_url, RedisCache};
