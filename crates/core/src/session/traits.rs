use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use super::{SessionError, Value};

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Key/value storage bound to one session identifier.
///
/// Every operation locks only this session; other sessions are never
/// blocked by it.
#[async_trait]
pub trait Session: Send + Sync {
    /// The identifier assigned when the session was created.
    fn id(&self) -> &str;

    /// Look up a key. `None` means the key is absent, which is distinct from
    /// a stored `Value::Null`.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Insert or overwrite a key.
    async fn set(&self, key: &str, value: Value);

    /// Remove a key if present.
    async fn del(&self, key: &str);

    /// Keys currently held by the session.
    async fn keys(&self) -> Vec<String>;

    /// Seconds-based TTL applied on the next save.
    async fn set_expiry(&self, seconds: i64);

    /// The expiry that will be applied on the next save.
    async fn expiry(&self) -> i64;

    /// Persist pending changes to the backend.
    async fn save(&self) -> Result<()>;
}

/// Typed access on top of [`Session`].
#[async_trait]
pub trait SessionExt {
    /// Get a key and decode it into `T`.
    ///
    /// Returns [`SessionError::KeyNotFound`] for an absent key.
    async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T>;

    /// Encode `value` and store it under `key`.
    ///
    /// Types without a JSON representation fail here instead of at save.
    async fn set_as<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<()>;
}

#[async_trait]
impl<S: Session + ?Sized> SessionExt for S {
    async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .get(key)
            .await
            .ok_or_else(|| SessionError::KeyNotFound(key.to_string()))?;
        serde_json::from_value(value).map_err(|e| SessionError::Deserialization(e.to_string()))
    }

    async fn set_as<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let value =
            serde_json::to_value(value).map_err(|e| SessionError::Serialization(e.to_string()))?;
        self.set(key, value).await;
        Ok(())
    }
}

/// A backend that creates, resolves and releases sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Name of the backend, for logs.
    fn backend(&self) -> &'static str;

    /// Create a session with a fresh identifier.
    async fn create_session(&self) -> Result<Arc<dyn Session>>;

    /// Resolve an existing session.
    ///
    /// Fails with [`SessionError::UnknownSession`] or
    /// [`SessionError::LoadFailed`] when the identifier has no data; callers
    /// then create a new session.
    async fn get_session(&self, id: &str) -> Result<Arc<dyn Session>>;

    /// Forget a session. Unknown identifiers are ignored.
    async fn clear(&self, id: &str) -> Result<()>;
}
