//! Page handlers.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sessionstore::SessionExt;
use sessionstore_axum::CurrentSession;

use crate::error::AppError;

/// Session key holding the visit counter.
pub const VISITS_KEY: &str = "visits";

/// Session key holding the logged-in user name.
pub const USERNAME_KEY: &str = "username";

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    username: Option<String>,
    visits: u64,
}

#[derive(Template)]
#[template(path = "private.html")]
pub struct PrivateTemplate {
    username: String,
}

/// GET / - Counts visits in the session.
#[axum::debug_handler]
pub async fn index(session: CurrentSession) -> Result<HtmlTemplate<IndexTemplate>, AppError> {
    let visits: u64 = session.get_as(VISITS_KEY).await.unwrap_or(0);
    let visits = visits + 1;
    session.set_as(VISITS_KEY, &visits).await?;

    let username: Result<String, _> = session.get_as(USERNAME_KEY).await;

    Ok(HtmlTemplate(IndexTemplate {
        username: username.ok(),
        visits,
    }))
}

/// GET /private - Only reachable with a logged-in session.
#[axum::debug_handler]
pub async fn private(session: CurrentSession) -> HtmlTemplate<PrivateTemplate> {
    let username: String = session
        .get_as(USERNAME_KEY)
        .await
        .unwrap_or_else(|_| "unknown".to_string());

    HtmlTemplate(PrivateTemplate { username })
}
