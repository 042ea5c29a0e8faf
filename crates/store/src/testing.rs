//! Instrumented cache backend for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use sessionstore_core::cache::{Cache, CacheError, Result};

use crate::backends::MemoryCache;

#[derive(Debug, Default)]
struct Counters {
    gets: AtomicUsize,
    sets: AtomicUsize,
    deletes: AtomicUsize,
}

/// A [`MemoryCache`] wrapper that counts calls and can inject failures.
///
/// Clones share the same entries and counters.
#[derive(Debug, Clone)]
pub struct CountingCache {
    inner: MemoryCache,
    counters: Arc<Counters>,
    last_ttl: Arc<Mutex<Option<Option<Duration>>>>,
    get_delay: Option<Duration>,
    fail_gets: bool,
    fail_sets: bool,
    fail_ping: bool,
}

impl CountingCache {
    pub fn new() -> Self {
        Self {
            inner: MemoryCache::new(1000),
            counters: Arc::default(),
            last_ttl: Arc::default(),
            get_delay: None,
            fail_gets: false,
            fail_sets: false,
            fail_ping: false,
        }
    }

    /// Sleep inside every `get` to widen race windows.
    pub fn with_get_delay(mut self, delay: Duration) -> Self {
        self.get_delay = Some(delay);
        self
    }

    pub fn failing_gets(mut self) -> Self {
        self.fail_gets = true;
        self
    }

    pub fn failing_sets(mut self) -> Self {
        self.fail_sets = true;
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.fail_ping = true;
        self
    }

    /// Store raw bytes without touching the counters.
    pub async fn seed(&self, key: &str, value: &[u8]) {
        self.inner
            .set(key, value, None)
            .await
            .expect("memory cache set");
    }

    /// Read raw bytes without touching the counters.
    pub async fn stored(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.get(key).await.expect("memory cache get")
    }

    /// TTL passed to the most recent `set`, if any `set` happened.
    pub async fn last_ttl(&self) -> Option<Option<Duration>> {
        *self.last_ttl.lock().await
    }

    pub fn get_calls(&self) -> usize {
        self.counters.gets.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.counters.sets.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.counters.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Cache for CountingCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.counters.gets.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.get_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_gets {
            return Err(CacheError::ConnectionFailed("injected get failure".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        self.counters.sets.fetch_add(1, Ordering::SeqCst);
        if self.fail_sets {
            return Err(CacheError::OperationFailed("injected set failure".to_string()));
        }
        *self.last_ttl.lock().await = Some(ttl);
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.counters.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(key).await
    }

    async fn ping(&self) -> Result<()> {
        if self.fail_ping {
            return Err(CacheError::ConnectionFailed("injected ping failure".to_string()));
        }
        Ok(())
    }
}
