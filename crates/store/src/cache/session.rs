//! A session persisted in a cache backend.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{OnceCell, RwLock};

use sessionstore_core::cache::Cache;
use sessionstore_core::session::{
    deserialize_data, persist_action, serialize_data, PersistAction, Result, Session,
    SessionData, SessionError, Value,
};

#[derive(Debug, Default)]
struct CacheState {
    data: SessionData,
    dirty: bool,
    expiry: i64,
}

/// Session whose data is loaded lazily from a [`Cache`] and written back on
/// [`Session::save`].
///
/// The first `get`, `set`, `del` or [`CacheSession::load`] loads the stored
/// data exactly once per instance, even under concurrent first access. A
/// load that fails or finds nothing leaves the session empty and is not
/// retried.
pub struct CacheSession {
    id: String,
    cache: Arc<dyn Cache>,
    /// Outcome of the one-time load; `Err` holds the failure reason.
    loaded: OnceCell<std::result::Result<(), String>>,
    state: RwLock<CacheState>,
}

impl CacheSession {
    /// Creates an empty, unloaded session bound to `cache`.
    pub fn new(id: String, cache: Arc<dyn Cache>) -> Self {
        Self {
            id,
            cache,
            loaded: OnceCell::new(),
            state: RwLock::new(CacheState::default()),
        }
    }

    /// Runs the one-time load now and reports why it could not load.
    ///
    /// Calling it again returns the outcome of the first attempt without
    /// fetching.
    pub async fn load(&self) -> Result<()> {
        self.ensure_loaded()
            .await
            .clone()
            .map_err(|reason| SessionError::LoadFailed {
                id: self.id.clone(),
                reason,
            })
    }

    /// Whether the one-time load has run, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Whether there are changes not yet written to the backend.
    pub async fn is_dirty(&self) -> bool {
        self.state.read().await.dirty
    }

    async fn ensure_loaded(&self) -> &std::result::Result<(), String> {
        self.loaded
            .get_or_init(|| async {
                match self.fetch().await {
                    Ok(data) => {
                        self.state.write().await.data = data;
                        Ok(())
                    }
                    Err(reason) => {
                        tracing::debug!(
                            session_id = %self.id,
                            reason = %reason,
                            "Starting with empty session data"
                        );
                        Err(reason)
                    }
                }
            })
            .await
    }

    async fn fetch(&self) -> std::result::Result<SessionData, String> {
        let bytes = self
            .cache
            .get(&self.id)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "no data stored".to_string())?;

        deserialize_data(&bytes).map_err(|e| e.to_string())
    }
}

#[async_trait]
impl Session for CacheSession {
    fn id(&self) -> &str {
        &self.id
    }

    async fn get(&self, key: &str) -> Option<Value> {
        self.ensure_loaded().await;
        self.state.read().await.data.get(key).cloned()
    }

    async fn set(&self, key: &str, value: Value) {
        self.ensure_loaded().await;
        let mut state = self.state.write().await;
        state.data.insert(key.to_string(), value);
        state.dirty = true;
    }

    async fn del(&self, key: &str) {
        self.ensure_loaded().await;
        let mut state = self.state.write().await;
        if state.data.remove(key).is_some() {
            state.dirty = true;
        }
    }

    async fn keys(&self) -> Vec<String> {
        self.ensure_loaded().await;
        self.state.read().await.data.keys().cloned().collect()
    }

    async fn set_expiry(&self, seconds: i64) {
        let mut state = self.state.write().await;
        state.expiry = seconds;
        // Invalidation has to reach the backend even without data changes.
        if seconds < 0 {
            state.dirty = true;
        }
    }

    async fn expiry(&self) -> i64 {
        self.state.read().await.expiry
    }

    async fn save(&self) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.dirty {
            return Ok(());
        }

        match persist_action(state.expiry) {
            PersistAction::Write { ttl } => {
                let bytes = serialize_data(&state.data)?;
                self.cache.set(&self.id, &bytes, ttl).await?;
                tracing::debug!(
                    session_id = %self.id,
                    bytes = bytes.len(),
                    ttl = ?ttl,
                    "Saved session"
                );
            }
            PersistAction::Delete => {
                self.cache.delete(&self.id).await?;
                tracing::debug!(session_id = %self.id, "Deleted expired session");
            }
        }

        state.dirty = false;
        Ok(())
    }
}
