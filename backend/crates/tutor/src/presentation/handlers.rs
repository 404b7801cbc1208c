//! HTTP Handlers

use axum::Form;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::presentation::gate::require_api_session;

use crate::application::explain::{ExplainUseCase, ExplanationModel};
use crate::presentation::dto::{ExplainForm, ExplainResponse};

/// Shared state for tutor handlers
#[derive(Clone)]
pub struct TutorAppState<M, S>
where
    M: ExplanationModel + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub model: Arc<M>,
    pub sessions: Arc<S>,
    pub auth_config: Arc<AuthConfig>,
}

/// POST /ai-explain
pub async fn explain<M, S>(
    State(state): State<TutorAppState<M, S>>,
    headers: HeaderMap,
    form: Result<Form<ExplainForm>, FormRejection>,
) -> Response
where
    M: ExplanationModel + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    // JSON gate: 401 body instead of a login redirect. Checked before
    // the body is looked at, so a missing session always answers 401.
    if let Err(response) =
        require_api_session(&headers, state.sessions.clone(), state.auth_config.clone()).await
    {
        return response;
    }

    // An unreadable body is the same as no question
    let question = form.map(|Form(f)| f.question).unwrap_or_default();

    let use_case = ExplainUseCase::new(state.model.clone());

    match use_case.execute(&question).await {
        Ok(explanation) => Json(ExplainResponse { explanation }).into_response(),
        Err(e) => e.into_response(),
    }
}
