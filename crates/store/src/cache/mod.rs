//! Cache-backed session backend.
//!
//! Sessions are serialized as JSON objects and stored under their
//! identifier in a [`sessionstore_core::cache::Cache`]. Data is loaded lazily
//! and written back only when it changed.

mod session;
mod store;

pub use session::CacheSession;
pub use store::{CacheStore, DEFAULT_TRACKED_SESSIONS, MEMORY_CACHE_ADDRESS};
