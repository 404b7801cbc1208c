//! Tutor Router

use axum::{Router, routing::post};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::infra::postgres::PgAuthRepository;

use crate::application::explain::ExplanationModel;
use crate::infra::gemini::GeminiClient;
use crate::presentation::handlers::{self, TutorAppState};

/// Create the Tutor router with the Gemini client
pub fn tutor_router(
    model: GeminiClient,
    sessions: PgAuthRepository,
    auth_config: Arc<AuthConfig>,
) -> Router {
    tutor_router_generic(model, sessions, auth_config)
}

/// Create a generic Tutor router for any model implementation
pub fn tutor_router_generic<M, S>(model: M, sessions: S, auth_config: Arc<AuthConfig>) -> Router
where
    M: ExplanationModel + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = TutorAppState {
        model: Arc::new(model),
        sessions: Arc::new(sessions),
        auth_config,
    };

    Router::new()
        .route("/ai-explain", post(handlers::explain::<M, S>))
        .with_state(state)
}
