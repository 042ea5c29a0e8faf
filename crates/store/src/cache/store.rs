//! Cache-backed session store.

use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use sessionstore_core::cache::Cache;
use sessionstore_core::session::{
    generate_session_id, Result, Session, SessionError, SessionStore,
};

use crate::backends::MemoryCache;

use super::CacheSession;

/// Address that selects the in-process [`MemoryCache`] instead of a remote
/// service.
pub const MEMORY_CACHE_ADDRESS: &str = "memory://";

/// Default number of session handles tracked locally.
pub const DEFAULT_TRACKED_SESSIONS: usize = 10_000;

/// Session store whose source of truth is a cache service.
///
/// Sessions resolved through this store are tracked locally so they can be
/// released with [`SessionStore::clear`]. The local map is never consulted
/// instead of the backend and holds at most `capacity` handles; the least
/// recently tracked handle is dropped first, which leaves its backend data
/// untouched.
#[derive(Clone)]
pub struct CacheStore {
    cache: Arc<dyn Cache>,
    sessions: Arc<Mutex<LruCache<String, Arc<CacheSession>>>>,
}

impl CacheStore {
    /// Creates a store over an existing cache, probing it first.
    ///
    /// # Errors
    ///
    /// Fails when the cache does not answer its liveness probe.
    pub async fn new(cache: Arc<dyn Cache>) -> Result<Self> {
        Self::with_capacity(cache, DEFAULT_TRACKED_SESSIONS).await
    }

    /// Like [`CacheStore::new`], tracking at most `capacity` handles locally.
    ///
    /// A capacity of 0 is raised to 1.
    pub async fn with_capacity(cache: Arc<dyn Cache>, capacity: usize) -> Result<Self> {
        cache.ping().await?;
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Ok(Self {
            cache,
            sessions: Arc::new(Mutex::new(LruCache::new(capacity))),
        })
    }

    /// Connects to the cache at `address`.
    ///
    /// `options` are positional: an optional credential followed by an
    /// optional namespace selector. [`MEMORY_CACHE_ADDRESS`] selects an
    /// in-process cache and ignores the options.
    pub async fn init(address: &str, options: &[&str]) -> Result<Self> {
        let cache: Arc<dyn Cache> = if address.starts_with(MEMORY_CACHE_ADDRESS) {
            tracing::info!("Using in-process cache for sessions");
            Arc::new(MemoryCache::default())
        } else {
            connect_remote(address, options).await?
        };
        Self::new(cache).await
    }

    /// Number of sessions tracked by this instance.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Returns true when no sessions are tracked.
    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    async fn track(&self, session: &Arc<CacheSession>) {
        let mut sessions = self.sessions.lock().await;
        sessions.put(session.id().to_string(), Arc::clone(session));
    }
}

#[cfg(feature = "redis")]
async fn connect_remote(address: &str, options: &[&str]) -> Result<Arc<dyn Cache>> {
    let cache = crate::backends::RedisCache::connect(address, options).await?;
    Ok(Arc::new(cache))
}

#[cfg(not(feature = "redis"))]
async fn connect_remote(address: &str, _options: &[&str]) -> Result<Arc<dyn Cache>> {
    Err(SessionError::UnsupportedBackend(format!(
        "remote cache at {address} (built without the `redis` feature)"
    )))
}

#[async_trait]
impl SessionStore for CacheStore {
    fn backend(&self) -> &'static str {
        "cache"
    }

    async fn create_session(&self) -> Result<Arc<dyn Session>> {
        let session = Arc::new(CacheSession::new(
            generate_session_id(),
            Arc::clone(&self.cache),
        ));
        self.track(&session).await;

        tracing::debug!(session_id = session.id(), "Created cache session");
        Ok(session as Arc<dyn Session>)
    }

    async fn get_session(&self, id: &str) -> Result<Arc<dyn Session>> {
        let session = Arc::new(CacheSession::new(id.to_string(), Arc::clone(&self.cache)));

        if let Err(err) = session.load().await {
            tracing::debug!(session_id = id, error = %err, "Session not loadable");
            return Err(err);
        }

        self.track(&session).await;
        Ok(session as Arc<dyn Session>)
    }

    async fn clear(&self, id: &str) -> Result<()> {
        self.sessions.lock().await.pop(id);
        self.cache.delete(id).await.map_err(SessionError::from)?;

        tracing::debug!(session_id = id, "Cleared cache session");
        Ok(())
    }
}
