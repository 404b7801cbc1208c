//! Session Gate
//!
//! Every protected route funnels through these helpers. Page routes get a
//! redirect to `/login` (optionally with a flash explaining why); the
//! JSON endpoint gets a 401 body. The check itself is identical and is
//! re-evaluated on every request.

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

use platform::cookie::extract_cookie;
use platform::flash::{FlashMessage, redirect, redirect_with_flash};

use crate::application::check_session::{CheckSessionUseCase, SessionIdentity};
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;

/// Resolve the request's session for a page route
///
/// On failure the caller gets a ready-made 302 to `/login`, carrying
/// `login_prompt` as an error flash when one is given.
pub async fn require_page_session<S>(
    headers: &HeaderMap,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
    login_prompt: Option<&str>,
) -> Result<SessionIdentity, Response>
where
    S: SessionRepository + Send + Sync + 'static,
{
    match resolve(headers, session_repo, config).await {
        Some(identity) => Ok(identity),
        None => Err(match login_prompt {
            Some(prompt) => redirect_with_flash("/login", &FlashMessage::error(prompt)),
            None => redirect("/login"),
        }),
    }
}

/// Resolve the request's session for a JSON route
///
/// On failure the caller gets a ready-made 401 `{"error": ...}` response.
pub async fn require_api_session<S>(
    headers: &HeaderMap,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
) -> Result<SessionIdentity, Response>
where
    S: SessionRepository + Send + Sync + 'static,
{
    match resolve(headers, session_repo, config).await {
        Some(identity) => Ok(identity),
        None => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "You must be logged in to use this feature." })),
        )
            .into_response()),
    }
}

async fn resolve<S>(
    headers: &HeaderMap,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
) -> Option<SessionIdentity>
where
    S: SessionRepository + Send + Sync + 'static,
{
    let token = extract_cookie(headers, &config.session_cookie_name)?;

    CheckSessionUseCase::new(session_repo, config)
        .identity(&token)
        .await
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::token;
    use crate::domain::entity::session::Session;
    use crate::infra::memory::InMemoryAuthRepository;
    use axum::http::{HeaderValue, header};
    use kernel::id::Id;

    async fn authed_headers(
        repo: &Arc<InMemoryAuthRepository>,
        config: &Arc<AuthConfig>,
    ) -> HeaderMap {
        let session = Session::new(Id::from_i64(1), "alice".to_string(), chrono::Duration::hours(12));
        repo.create(&session).await.unwrap();
        let session_token = token::sign(session.session_id, &config.session_secret);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{}={}", config.session_cookie_name, session_token))
                .unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn test_page_gate_allows_valid_session() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        let headers = authed_headers(&repo, &config).await;

        let identity = require_page_session(&headers, repo, config, None)
            .await
            .unwrap();
        assert_eq!(identity.username, "alice");
    }

    #[tokio::test]
    async fn test_page_gate_redirects_to_login() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());

        let response = require_page_session(&HeaderMap::new(), repo, config, Some("Please log in."))
            .await
            .unwrap_err();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login"
        );
    }

    #[tokio::test]
    async fn test_api_gate_returns_401() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());

        let response = require_api_session(&HeaderMap::new(), repo, config)
            .await
            .unwrap_err();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
