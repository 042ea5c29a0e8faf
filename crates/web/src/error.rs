use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sessionstore::SessionError;
use thiserror::Error;

/// Errors raised while attaching a session to a request.
#[derive(Debug, Error)]
pub enum SessionLayerError {
    /// The backend could neither resolve nor create a session.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A handler asked for the session but the middleware is not installed.
    #[error("session middleware is not installed")]
    MissingLayer,
}

impl IntoResponse for SessionLayerError {
    fn into_response(self) -> Response {
        let message = match &self {
            SessionLayerError::Session(err) => {
                tracing::error!(error = %err, "Session unavailable");
                "Session unavailable"
            }
            SessionLayerError::MissingLayer => {
                tracing::error!("{}", self);
                "Internal server error"
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
