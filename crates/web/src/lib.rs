//! Axum integration for sessionstore.
//!
//! This crate provides:
//! - [`session_middleware`]: resolves the session from the request cookie,
//!   saves it after the handler and re-issues the cookie
//! - [`CurrentSession`]: extractor for the session handle
//! - [`require_login`]: redirects requests without a logged-in session

mod config;
mod error;
mod extractors;
mod middleware;
mod state;

pub use config::{SessionConfig, DEFAULT_COOKIE_NAME, DEFAULT_LOGIN_PATH, LOGIN_FLAG};
pub use error::SessionLayerError;
pub use extractors::CurrentSession;
pub use middleware::{require_login, session_cookie, session_middleware};
pub use state::SessionLayer;
