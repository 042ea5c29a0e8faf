use std::env;

use sessionstore::CookieOptions;
use sessionstore_axum::{SessionConfig, DEFAULT_COOKIE_NAME};

/// Cookie settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the session cookie (default: "session_id")
    pub cookie_name: String,
    /// Attributes written with the session cookie
    pub cookie: CookieOptions,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COOKIE_NAME` - Session cookie name (default: "session_id")
    /// - `COOKIE_PATH` - Cookie path (default: "/")
    /// - `COOKIE_DOMAIN` - Cookie domain (default: unset)
    /// - `COOKIE_MAX_AGE` - Seconds; 0 is a browser-session cookie (default: 0)
    /// - `COOKIE_SECURE` - Secure flag (default: false)
    /// - `COOKIE_HTTP_ONLY` - HttpOnly flag (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = CookieOptions::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(default)
        };

        Self {
            cookie_name: lookup("COOKIE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
            cookie: CookieOptions {
                path: lookup("COOKIE_PATH").unwrap_or(defaults.path),
                domain: lookup("COOKIE_DOMAIN").filter(|v| !v.is_empty()),
                max_age: lookup("COOKIE_MAX_AGE")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_age),
                secure: flag("COOKIE_SECURE", defaults.secure),
                http_only: flag("COOKIE_HTTP_ONLY", defaults.http_only),
            },
        }
    }

    /// Settings for the session middleware.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_cookie_name(self.cookie_name.clone())
            .with_cookie(self.cookie.clone())
    }
}
