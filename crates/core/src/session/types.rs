use std::time::Duration;

/// A value stored under a session key.
///
/// The closed set of JSON variants (null, bool, number, string, array,
/// object) keeps the persisted form portable across backends.
pub type Value = serde_json::Value;

/// The key/value contents of one session.
pub type SessionData = serde_json::Map<String, Value>;

/// What a cache-backed session must do with its data on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistAction {
    /// Write the data, expiring after `ttl` when set.
    Write { ttl: Option<Duration> },
    /// Remove the data from the backend.
    Delete,
}

/// Cookie attributes used when the session identifier is handed back to
/// the client. Opaque to the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: String,
    pub domain: Option<String>,
    /// 0 means a browser-session cookie, negative means delete now,
    /// positive is the lifetime in seconds.
    pub max_age: i64,
    pub secure: bool,
    pub http_only: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            domain: None,
            max_age: 0,
            secure: false,
            http_only: true,
        }
    }
}
