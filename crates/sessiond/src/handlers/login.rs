//! Login and logout handlers.

use askama::Template;
use axum::{response::Redirect, Form};
use serde::Deserialize;
use sessionstore::{SessionExt, Value};
use sessionstore_axum::{CurrentSession, LOGIN_FLAG};

use crate::error::AppError;
use crate::handlers::pages::{HtmlTemplate, USERNAME_KEY};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

/// GET /login - Login form.
pub async fn login_page() -> HtmlTemplate<LoginTemplate> {
    HtmlTemplate(LoginTemplate)
}

/// POST /login - Marks the session as logged in.
pub async fn login(
    session: CurrentSession,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let username = form.username.trim();
    if username.is_empty() {
        return Ok(Redirect::to("/login"));
    }

    session.set_as(USERNAME_KEY, &username).await?;
    session.set(LOGIN_FLAG, Value::Bool(true)).await;

    tracing::info!(session_id = session.id(), username, "User logged in");
    Ok(Redirect::to("/private"))
}

/// POST /logout - Drops the login keys from the session.
pub async fn logout(session: CurrentSession) -> Redirect {
    session.del(LOGIN_FLAG).await;
    session.del(USERNAME_KEY).await;

    tracing::info!(session_id = session.id(), "User logged out");
    Redirect::to("/")
}
