//! Redis cache implementation.
//!
//! Session data is stored under the bare session identifier with `SET`
//! (or `SET EX` when a TTL applies) and read back with `GET`.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use url::Url;

use sessionstore_core::cache::{Cache, CacheError, Result};
use sessionstore_core::session::SessionError;

use super::error::map_redis_error;

/// Redis cache backend using a connection manager.
///
/// The manager multiplexes one connection and reconnects on failure; every
/// session shares it through cheap clones.
#[derive(Clone)]
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Connects to Redis and verifies the server answers `PING`.
    ///
    /// # Arguments
    ///
    /// * `address` - `host:port` or a `redis://` URL
    /// * `options` - optional password, then optional database index
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidOption`] for a malformed database index
    /// and a [`CacheError`] when the server cannot be reached.
    pub async fn connect(
        address: &str,
        options: &[&str],
    ) -> std::result::Result<Self, SessionError> {
        let url = connection_url(address, options)?;
        let client = redis::Client::open(url.as_str()).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;

        let cache = Self { conn };
        cache.ping().await?;

        tracing::info!(
            host = url.host_str().unwrap_or_default(),
            db = url.path().trim_start_matches('/'),
            "Connected to Redis"
        );
        Ok(cache)
    }
}

/// Builds the connection URL from an address and positional options.
///
/// The first option is the password, the second the database index. Empty
/// options are skipped.
pub fn connection_url(
    address: &str,
    options: &[&str],
) -> std::result::Result<Url, SessionError> {
    if options.len() > 2 {
        return Err(SessionError::InvalidOption(format!(
            "expected at most 2 options (password, database), got {}",
            options.len()
        )));
    }

    let raw = if address.contains("://") {
        address.to_string()
    } else {
        format!("redis://{address}")
    };
    let mut url =
        Url::parse(&raw).map_err(|e| CacheError::InvalidAddress(format!("{address}: {e}")))?;

    if let Some(password) = options.first().copied().filter(|p| !p.is_empty()) {
        url.set_password(Some(password))
            .map_err(|_| CacheError::InvalidAddress(address.to_string()))?;
    }

    if let Some(db) = options.get(1).copied().filter(|d| !d.is_empty()) {
        let db: u32 = db
            .parse()
            .map_err(|_| SessionError::InvalidOption(format!("invalid database index: {db}")))?;
        url.set_path(&format!("/{db}"));
    }

    Ok(url)
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;

        if pong == "PONG" {
            Ok(())
        } else {
            Err(CacheError::ConnectionFailed(format!(
                "unexpected PING reply: {pong}"
            )))
        }
    }
}
