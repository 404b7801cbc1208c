//! Catalog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::infra::postgres::PgAuthRepository;

use crate::domain::repository::{MembershipRepository, ModuleRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};
use crate::presentation::templates::TemplateRegistry;

/// Create the Catalog router with PostgreSQL repositories
pub fn catalog_router(
    repo: PgCatalogRepository,
    sessions: PgAuthRepository,
    auth_config: Arc<AuthConfig>,
    templates: TemplateRegistry,
) -> Router {
    catalog_router_generic(repo, sessions, auth_config, templates)
}

/// Create a generic Catalog router for any repository implementations
pub fn catalog_router_generic<R, S>(
    repo: R,
    sessions: S,
    auth_config: Arc<AuthConfig>,
    templates: TemplateRegistry,
) -> Router
where
    R: ModuleRepository + MembershipRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        sessions: Arc::new(sessions),
        auth_config,
        templates: Arc::new(templates),
    };

    Router::new()
        .route("/modules", get(handlers::modules_index::<R, S>))
        .route("/modules/{slug}", get(handlers::module_show::<R, S>))
        .with_state(state)
}
