use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Raw key/value operations a session backend needs from a cache service.
///
/// Values are opaque bytes; encoding is the caller's concern.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    ///
    /// `None` stores the value without expiration.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key. Missing keys are not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Liveness probe used when a store is initialized.
    async fn ping(&self) -> Result<()>;
}
