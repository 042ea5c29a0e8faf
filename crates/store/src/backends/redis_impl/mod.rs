//! Redis cache backend implementation.
//!
//! Provides the remote cache used by the cache-backed session store in
//! multi-instance deployments.

mod cache;
mod error;

pub use cache::{connection_url, RedisCache};
