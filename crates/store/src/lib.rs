//! Session storage backends for sessionstore.
//!
//! Two interchangeable stores implement
//! [`SessionStore`](sessionstore_core::session::SessionStore):
//!
//! - [`MemoryStore`]: sessions live in process memory and are lost on
//!   restart
//! - [`CacheStore`]: sessions are serialized into a cache service (Redis
//!   with the `redis` feature) and survive restarts
//!
//! [`SessionRegistry`] picks one by name at startup and is what request
//! handlers hold.
//!
//! # Feature Flags
//!
//! - `redis` (default): enables [`backends::RedisCache`]

pub mod backends;
pub mod cache;
pub mod memory;
mod registry;

#[cfg(test)]
mod testing;

pub use cache::{CacheSession, CacheStore, MEMORY_CACHE_ADDRESS};
pub use memory::{MemorySession, MemoryStore};
pub use registry::{Backend, SessionRegistry};

pub use sessionstore_core::cache::{Cache, CacheError};
pub use sessionstore_core::session::{
    CookieOptions, Result, Session, SessionData, SessionError, SessionExt, SessionStore, Value,
};
