use thiserror::Error;

use crate::cache::CacheError;

/// Errors surfaced by session stores and session handles.
///
/// Everything except a connection failure at store initialization is
/// recoverable per request: callers fall back to creating a new session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The in-memory store has no record for this identifier.
    #[error("unknown session: {0}")]
    UnknownSession(String),

    /// The cache-backed store could not fetch or decode the identifier's data.
    #[error("failed to load session {id}: {reason}")]
    LoadFailed { id: String, reason: String },

    /// The session is present but holds no value for this key.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A value could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A stored value could not be decoded into the requested type.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Error from the cache backend.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The configured backend name is not recognized.
    #[error("unsupported session backend: {0}")]
    UnsupportedBackend(String),

    /// A positional backend option could not be parsed.
    #[error("invalid backend option: {0}")]
    InvalidOption(String),
}

impl SessionError {
    /// Whether the caller should respond by creating a fresh session.
    pub fn is_missing_session(&self) -> bool {
        matches!(
            self,
            SessionError::UnknownSession(_) | SessionError::LoadFailed { .. }
        )
    }
}
