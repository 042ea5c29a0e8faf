//! Backend selection and the uniform session interface used by request
//! handlers.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use sessionstore_core::session::{Result, Session, SessionError, SessionStore};

use crate::cache::CacheStore;
use crate::memory::MemoryStore;

/// Session backends selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Sessions live in process memory.
    Memory,
    /// Sessions live in a cache service.
    Cache,
}

impl FromStr for Backend {
    type Err = SessionError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "cache" | "remote" | "redis" => Ok(Self::Cache),
            _ => Err(SessionError::UnsupportedBackend(name.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Cache => write!(f, "cache"),
        }
    }
}

/// Entry point for request handlers: creates, resolves and releases
/// sessions on the configured backend.
///
/// Built once at startup and shared by cloning; clones use the same store.
#[derive(Clone)]
pub struct SessionRegistry {
    store: Arc<dyn SessionStore>,
}

impl SessionRegistry {
    /// Creates a registry for the backend named `backend`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnsupportedBackend`] for an unknown name, or
    /// the backend's initialization error (e.g. an unreachable cache).
    pub async fn create(backend: &str, address: &str, options: &[&str]) -> Result<Self> {
        let store: Arc<dyn SessionStore> = match backend.parse::<Backend>()? {
            Backend::Memory => Arc::new(MemoryStore::init(address, options)),
            Backend::Cache => Arc::new(CacheStore::init(address, options).await?),
        };

        tracing::info!(backend = store.backend(), "Session registry ready");
        Ok(Self { store })
    }

    /// Wraps an already constructed store.
    pub fn from_store(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Name of the active backend.
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Creates a session with a fresh identifier.
    pub async fn create_session(&self) -> Result<Arc<dyn Session>> {
        self.store.create_session().await
    }

    /// Resolves an existing session.
    pub async fn get_session(&self, id: &str) -> Result<Arc<dyn Session>> {
        self.store.get_session(id).await
    }

    /// Releases a session.
    pub async fn clear(&self, id: &str) -> Result<()> {
        self.store.clear(id).await
    }

    /// Resolves the session for `id`, or creates a new one when there is no
    /// identifier or the backend has nothing usable for it.
    pub async fn get_or_create(&self, id: Option<&str>) -> Result<Arc<dyn Session>> {
        if let Some(id) = id {
            match self.store.get_session(id).await {
                Ok(session) => return Ok(session),
                Err(err) if err.is_missing_session() => {
                    tracing::debug!(session_id = id, error = %err, "Replacing missing session");
                }
                Err(err) => return Err(err),
            }
        }

        self.store.create_session().await
    }
}

impl fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("backend", &self.store.backend())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MEMORY_CACHE_ADDRESS;
    use crate::testing::CountingCache;
    use serde_json::json;

    #[test]
    fn test_backend_names() {
        assert_eq!("memory".parse::<Backend>().unwrap(), Backend::Memory);
        assert_eq!("cache".parse::<Backend>().unwrap(), Backend::Cache);
        assert_eq!("remote".parse::<Backend>().unwrap(), Backend::Cache);
        assert_eq!("Redis".parse::<Backend>().unwrap(), Backend::Cache);
        assert!(matches!(
            "mongo".parse::<Backend>(),
            Err(SessionError::UnsupportedBackend(name)) if name == "mongo"
        ));
    }

    #[tokio::test]
    async fn test_create_unsupported_backend() {
        let result = SessionRegistry::create("sqlite", "", &[]).await;
        assert!(matches!(result, Err(SessionError::UnsupportedBackend(_))));
    }

    #[tokio::test]
    async fn test_create_memory_ignores_address() {
        let registry = SessionRegistry::create("memory", "localhost:6379", &["pw"])
            .await
            .unwrap();
        assert_eq!(registry.backend(), "memory");
    }

    #[tokio::test]
    async fn test_memory_login_scenario() {
        let registry = SessionRegistry::create("memory", "", &[]).await.unwrap();

        let session = registry.create_session().await.unwrap();
        session.set("isLogin", json!(true)).await;

        let same = registry.get_session(session.id()).await.unwrap();
        assert_eq!(same.get("isLogin").await, Some(json!(true)));
    }

    #[tokio::test]
    async fn test_get_or_create_without_id_creates() {
        let registry = SessionRegistry::create("memory", "", &[]).await.unwrap();

        let session = registry.get_or_create(None).await.unwrap();
        assert!(registry.get_session(session.id()).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_or_create_reuses_known_id() {
        let registry = SessionRegistry::create("memory", "", &[]).await.unwrap();
        let session = registry.create_session().await.unwrap();

        let resolved = registry.get_or_create(Some(session.id())).await.unwrap();
        assert_eq!(resolved.id(), session.id());
    }

    #[tokio::test]
    async fn test_get_or_create_replaces_unknown_id() {
        let registry = SessionRegistry::create("memory", "", &[]).await.unwrap();

        let session = registry.get_or_create(Some("stale")).await.unwrap();
        assert_ne!(session.id(), "stale");
    }

    #[tokio::test]
    async fn test_cache_registry_replaces_unloadable_id() {
        let cache = CountingCache::new();
        let store = CacheStore::new(Arc::new(cache.clone())).await.unwrap();
        let registry = SessionRegistry::from_store(Arc::new(store));

        let session = registry.get_or_create(Some("nonexistent")).await.unwrap();

        assert_ne!(session.id(), "nonexistent");
        assert_eq!(registry.backend(), "cache");
    }

    #[tokio::test]
    async fn test_cache_registry_over_memory_address() {
        let registry = SessionRegistry::create("cache", MEMORY_CACHE_ADDRESS, &[])
            .await
            .unwrap();

        let session = registry.create_session().await.unwrap();
        session.set("k", json!("v")).await;
        session.save().await.unwrap();

        let restored = registry.get_or_create(Some(session.id())).await.unwrap();
        assert_eq!(restored.id(), session.id());
        assert_eq!(restored.get("k").await, Some(json!("v")));

        registry.clear(session.id()).await.unwrap();
        assert!(registry.get_session(session.id()).await.is_err());
    }

    #[test]
    fn test_debug_names_backend() {
        let registry = SessionRegistry::from_store(Arc::new(MemoryStore::new()));
        assert_eq!(format!("{registry:?}"), "SessionRegistry { backend: \"memory\" }");
    }
}
