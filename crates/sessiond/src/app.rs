use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use sessionstore_axum::{require_login, session_middleware, SessionLayer};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::handlers::{
    health::livez,
    login::{login, login_page, logout},
    pages::{index, private},
};

/// Create the application router with all routes and middleware.
pub fn create_app(sessions: SessionLayer) -> Router {
    // Routes that need a logged-in session
    let protected = Router::new()
        .route("/private", get(private))
        .route_layer(from_fn_with_state(sessions.clone(), require_login));

    let pages = Router::new()
        .route("/", get(index))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
        .merge(protected)
        .layer(from_fn_with_state(sessions, session_middleware));

    // Health checks stay outside the session layer
    Router::new()
        .route("/livez", get(livez))
        .merge(pages)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
}
