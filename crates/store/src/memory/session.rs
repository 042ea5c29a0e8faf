//! A session held entirely in process memory.

use async_trait::async_trait;
use tokio::sync::RwLock;

use sessionstore_core::session::{Result, Session, SessionData, Value};

#[derive(Debug, Default)]
struct MemoryState {
    data: SessionData,
    expiry: i64,
}

/// Session whose data lives only in this process.
///
/// The record is the canonical copy, so `save` has nothing to do.
#[derive(Debug)]
pub struct MemorySession {
    id: String,
    state: RwLock<MemoryState>,
}

impl MemorySession {
    /// Creates an empty session with the given identifier.
    pub fn new(id: String) -> Self {
        Self {
            id,
            state: RwLock::new(MemoryState::default()),
        }
    }
}

#[async_trait]
impl Session for MemorySession {
    fn id(&self) -> &str {
        &self.id
    }

    async fn get(&self, key: &str) -> Option<Value> {
        self.state.read().await.data.get(key).cloned()
    }

    async fn set(&self, key: &str, value: Value) {
        self.state.write().await.data.insert(key.to_string(), value);
    }

    async fn del(&self, key: &str) {
        self.state.write().await.data.remove(key);
    }

    async fn keys(&self) -> Vec<String> {
        self.state.read().await.data.keys().cloned().collect()
    }

    async fn set_expiry(&self, seconds: i64) {
        self.state.write().await.expiry = seconds;
    }

    async fn expiry(&self) -> i64 {
        self.state.read().await.expiry
    }

    async fn save(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sessionstore_core::session::{SessionError, SessionExt};

    #[tokio::test]
    async fn test_get_missing_key() {
        let session = MemorySession::new("s1".to_string());
        assert_eq!(session.get("absent").await, None);
    }

    #[tokio::test]
    async fn test_null_value_is_found() {
        let session = MemorySession::new("s1".to_string());
        session.set("cleared", Value::Null).await;
        assert_eq!(session.get("cleared").await, Some(Value::Null));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let session = MemorySession::new("s1".to_string());
        session.set("k", json!(1)).await;
        session.set("k", json!("two")).await;
        session.del("k").await;
        session.set("k", json!([3])).await;
        assert_eq!(session.get("k").await, Some(json!([3])));

        session.del("k").await;
        assert_eq!(session.get("k").await, None);
    }

    #[tokio::test]
    async fn test_del_absent_key_leaves_data_unchanged() {
        let session = MemorySession::new("s1".to_string());
        session.set("keep", json!(true)).await;

        session.del("absent").await;

        assert_eq!(session.keys().await, vec!["keep".to_string()]);
        assert_eq!(session.get("keep").await, Some(json!(true)));
    }

    #[tokio::test]
    async fn test_expiry_round_trip() {
        let session = MemorySession::new("s1".to_string());
        assert_eq!(session.expiry().await, 0);
        session.set_expiry(-1).await;
        assert_eq!(session.expiry().await, -1);
        session.save().await.unwrap();
    }

    #[tokio::test]
    async fn test_typed_access() {
        let session = MemorySession::new("s1".to_string());
        session.set_as("isLogin", &true).await.unwrap();

        let is_login: bool = session.get_as("isLogin").await.unwrap();
        assert!(is_login);

        let missing: Result<bool> = session.get_as("username").await;
        assert!(matches!(missing, Err(SessionError::KeyNotFound(key)) if key == "username"));

        let wrong_type: Result<u32> = session.get_as("isLogin").await;
        assert!(matches!(wrong_type, Err(SessionError::Deserialization(_))));
    }

    #[tokio::test]
    async fn test_opaque_value_fails_at_set() {
        use std::collections::HashMap;

        // Non-string map keys have no JSON object representation.
        let mut opaque = HashMap::new();
        opaque.insert((1, 2), "pair");

        let session = MemorySession::new("s1".to_string());
        let err = session.set_as("opaque", &opaque).await.unwrap_err();
        assert!(matches!(err, SessionError::Serialization(_)));
        assert_eq!(session.get("opaque").await, None);
    }
}
