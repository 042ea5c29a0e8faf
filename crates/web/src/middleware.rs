//! Request lifecycle for sessions.

use axum::{
    extract::{Request, State},
    http::{header::LOCATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use sessionstore::{CookieOptions, Value};

use crate::config::LOGIN_FLAG;
use crate::error::SessionLayerError;
use crate::extractors::CurrentSession;
use crate::state::SessionLayer;

/// Attaches a session to every request.
///
/// The session named by the cookie is resolved, or a new one is created when
/// the cookie is missing or stale. After the handler runs the session is
/// saved and its identifier is written back with the configured cookie
/// attributes. A failed save is logged and the response is still delivered.
pub async fn session_middleware(
    State(layer): State<SessionLayer>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let config = layer.config();
    let cookie_id = jar.get(&config.cookie_name).map(|c| c.value().to_string());

    let session = match layer.registry().get_or_create(cookie_id.as_deref()).await {
        Ok(session) => session,
        Err(err) => return SessionLayerError::from(err).into_response(),
    };

    session.set_expiry(config.cookie.max_age).await;
    request
        .extensions_mut()
        .insert(CurrentSession(session.clone()));

    let response = next.run(request).await;

    if let Err(err) = session.save().await {
        tracing::error!(session_id = session.id(), error = %err, "Failed to save session");
    }

    let jar = jar.add(session_cookie(&config.cookie_name, session.id(), &config.cookie));
    (jar, response).into_response()
}

/// Lets the request through only when the session is logged in, otherwise
/// redirects to the login path.
///
/// Must run inside [`session_middleware`].
pub async fn require_login(
    State(layer): State<SessionLayer>,
    request: Request,
    next: Next,
) -> Response {
    let Some(session) = request.extensions().get::<CurrentSession>().cloned() else {
        return SessionLayerError::MissingLayer.into_response();
    };

    if session.get(LOGIN_FLAG).await == Some(Value::Bool(true)) {
        return next.run(request).await;
    }

    tracing::debug!(session_id = session.id(), "Redirecting anonymous session to login");
    (
        StatusCode::FOUND,
        [(LOCATION, layer.config().login_path.clone())],
    )
        .into_response()
}

/// Builds the cookie that carries a session identifier.
///
/// `max_age` of 0 yields a browser-session cookie; a negative value expires
/// the cookie immediately.
pub fn session_cookie(name: &str, id: &str, options: &CookieOptions) -> Cookie<'static> {
    let mut cookie = Cookie::build((name.to_string(), id.to_string()))
        .path(options.path.clone())
        .http_only(options.http_only)
        .secure(options.secure)
        .same_site(SameSite::Lax);

    if let Some(domain) = &options.domain {
        cookie = cookie.domain(domain.clone());
    }

    match options.max_age {
        0 => {}
        age if age < 0 => cookie = cookie.max_age(time::Duration::ZERO),
        age => cookie = cookie.max_age(time::Duration::seconds(age)),
    }

    cookie.build()
}
