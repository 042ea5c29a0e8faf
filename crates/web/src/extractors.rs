//! Axum extractors for sessions.

use std::ops::Deref;
use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use sessionstore::Session;

use crate::error::SessionLayerError;

/// The session attached to the current request by
/// [`session_middleware`](crate::session_middleware).
///
/// Fails with a 500 when the middleware is not installed on the route.
#[derive(Clone)]
pub struct CurrentSession(pub Arc<dyn Session>);

impl Deref for CurrentSession {
    type Target = dyn Session;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = SessionLayerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .ok_or(SessionLayerError::MissingLayer)
    }
}
