//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::presentation::gate::require_page_session;
use auth::presentation::handlers::consume_flash_page;
use platform::flash::{FlashMessage, redirect_with_flash};

use crate::application::{ListModulesUseCase, ViewModuleUseCase};
use crate::domain::repository::{MembershipRepository, ModuleRepository};
use crate::error::CatalogError;
use crate::presentation::pages;
use crate::presentation::templates::TemplateRegistry;

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R, S>
where
    R: ModuleRepository + MembershipRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub sessions: Arc<S>,
    pub auth_config: Arc<AuthConfig>,
    pub templates: Arc<TemplateRegistry>,
}

/// GET /modules
pub async fn modules_index<R, S>(
    State(state): State<CatalogAppState<R, S>>,
    headers: HeaderMap,
) -> Response
where
    R: ModuleRepository + MembershipRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_page_session(
        &headers,
        state.sessions.clone(),
        state.auth_config.clone(),
        Some("Please log in to view the modules."),
    )
    .await
    {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    let use_case = ListModulesUseCase::new(state.repo.clone());

    match use_case.execute().await {
        Ok(modules) => consume_flash_page(&headers, |flash| {
            pages::modules_page(&identity.username, &modules, flash)
        }),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list modules");
            redirect_with_flash(
                "/dashboard",
                &FlashMessage::error("Database error. Please try again later."),
            )
        }
    }
}

/// GET /modules/{slug}
pub async fn module_show<R, S>(
    State(state): State<CatalogAppState<R, S>>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Response
where
    R: ModuleRepository + MembershipRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_page_session(
        &headers,
        state.sessions.clone(),
        state.auth_config.clone(),
        Some("Please log in to view this module."),
    )
    .await
    {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    let use_case = ViewModuleUseCase::new(state.repo.clone(), state.repo.clone());

    match use_case.execute(&slug, identity.user_id).await {
        Ok(module) => {
            let body = state.templates.render(&module);
            consume_flash_page(&headers, |flash| pages::module_page(&module, &body, flash))
        }
        Err(CatalogError::ModuleNotFound) => redirect_with_flash(
            "/modules",
            &FlashMessage::error("Module not found."),
        ),
        Err(CatalogError::AccessDenied) => redirect_with_flash(
            "/subscription",
            &FlashMessage::error("This is a premium module. Please subscribe to gain access."),
        ),
        Err(e) => {
            tracing::error!(error = %e, slug = %slug, "Failed to load module");
            redirect_with_flash(
                "/dashboard",
                &FlashMessage::error("Database error. Please try again later."),
            )
        }
    }
}
