//! In-memory session backend.
//!
//! Sessions are plain in-process records; nothing is serialized.

mod session;
mod store;

pub use session::MemorySession;
pub use store::MemoryStore;
