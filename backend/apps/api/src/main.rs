//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-path errors go through the
//! per-crate error types and `kernel::error::AppError`.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::infra::postgres::PgAuthRepository;
use auth::presentation::handlers::consume_flash_page;
use auth::presentation::pages;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::{Router, routing::get};
use billing::application::config::BillingConfig;
use billing::infra::paystack::PaystackClient;
use billing::infra::postgres::PgBillingRepository;
use billing::presentation::router::billing_router;
use catalog::infra::postgres::PgCatalogRepository;
use catalog::presentation::router::catalog_router;
use catalog::presentation::templates::TemplateRegistry;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutor::infra::gemini::GeminiClient;
use tutor::presentation::router::tutor_router;

use crate::config::AppConfig;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,catalog=info,tutor=info,billing=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Immutable configuration, read once
    let app_config = AppConfig::from_env()?;

    // Database connection pool: the scoped open/use/close discipline,
    // with checkout and return handled per query
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&app_config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations").run(&pool).await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let auth_store = PgAuthRepository::new(pool.clone());
    match auth_store.sweep_expired_sessions().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    // Component configuration
    let auth_config = Arc::new(AuthConfig {
        session_secret: app_config.session_secret,
        cookie_secure: app_config.cookie_secure,
        ..AuthConfig::default()
    });
    let billing_config = BillingConfig::new(&app_config.public_base_url);

    // External service clients
    let gemini = GeminiClient::new(app_config.gemini_api_key.clone());
    let paystack = PaystackClient::new(app_config.paystack_secret_key.clone());

    // Per-module presentation templates; unregistered slugs fall back to
    // the generic module page
    let templates = TemplateRegistry::new();

    // Build router
    let app = Router::new()
        .route("/", get(home))
        .merge(auth::presentation::router::auth_router(
            PgAuthRepository::new(pool.clone()),
            auth_config.clone(),
        ))
        .merge(catalog_router(
            PgCatalogRepository::new(pool.clone()),
            PgAuthRepository::new(pool.clone()),
            auth_config.clone(),
            templates,
        ))
        .merge(tutor_router(
            gemini,
            PgAuthRepository::new(pool.clone()),
            auth_config.clone(),
        ))
        .merge(billing_router(
            PgBillingRepository::new(pool.clone()),
            paystack,
            PgAuthRepository::new(pool.clone()),
            auth_config.clone(),
            billing_config,
        ))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], app_config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /
async fn home(headers: HeaderMap) -> Response {
    consume_flash_page(&headers, pages::home_page)
}
