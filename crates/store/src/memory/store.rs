//! In-memory session store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use sessionstore_core::session::{
    generate_session_id, Result, Session, SessionError, SessionStore,
};

use super::MemorySession;

/// Keeps every session in a map shared by all requests.
///
/// One lock guards the whole map and is only held for the insert, lookup or
/// removal itself. Sessions never expire on their own; they live until
/// [`SessionStore::clear`] or until the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sessions: Arc<RwLock<HashMap<String, Arc<MemorySession>>>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from backend connection parameters.
    ///
    /// There is nothing to connect to, so the address and options are
    /// ignored.
    pub fn init(address: &str, options: &[&str]) -> Self {
        if !address.is_empty() || !options.is_empty() {
            tracing::debug!(
                address,
                options = options.len(),
                "Memory session store ignores connection parameters"
            );
        }
        Self::new()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true when no sessions are stored.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create_session(&self) -> Result<Arc<dyn Session>> {
        let session = Arc::new(MemorySession::new(generate_session_id()));

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id().to_string(), Arc::clone(&session));

        tracing::debug!(session_id = session.id(), "Created memory session");
        Ok(session as Arc<dyn Session>)
    }

    async fn get_session(&self, id: &str) -> Result<Arc<dyn Session>> {
        let sessions = self.sessions.read().await;
        match sessions.get(id) {
            Some(session) => {
                let session: Arc<dyn Session> = session.clone();
                Ok(session)
            }
            None => Err(SessionError::UnknownSession(id.to_string())),
        }
    }

    async fn clear(&self, id: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(id).is_some() {
            tracing::debug!(session_id = id, "Cleared memory session");
        }
        Ok(())
    }
}
