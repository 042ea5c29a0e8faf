use thiserror::Error;

/// Errors reported by a cache backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Invalid cache address: {0}")]
    InvalidAddress(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
