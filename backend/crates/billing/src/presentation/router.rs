//! Billing Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::infra::postgres::PgAuthRepository;

use crate::application::config::BillingConfig;
use crate::domain::gateway::PaymentGateway;
use crate::domain::repository::BillingRepository;
use crate::infra::paystack::PaystackClient;
use crate::infra::postgres::PgBillingRepository;
use crate::presentation::handlers::{self, BillingAppState};

/// Create the Billing router with PostgreSQL repository and Paystack
pub fn billing_router(
    repo: PgBillingRepository,
    gateway: PaystackClient,
    sessions: PgAuthRepository,
    auth_config: Arc<AuthConfig>,
    config: BillingConfig,
) -> Router {
    billing_router_generic(repo, gateway, sessions, auth_config, config)
}

/// Create a generic Billing router for any implementations
pub fn billing_router_generic<B, G, S>(
    repo: B,
    gateway: G,
    sessions: S,
    auth_config: Arc<AuthConfig>,
    config: BillingConfig,
) -> Router
where
    B: BillingRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = BillingAppState {
        repo: Arc::new(repo),
        gateway: Arc::new(gateway),
        sessions: Arc::new(sessions),
        auth_config,
        config: Arc::new(config),
    };

    Router::new()
        .route("/subscription", get(handlers::subscription::<B, G, S>))
        .route(
            "/create-paystack-payment",
            post(handlers::create_payment::<B, G, S>),
        )
        .route("/paystack/callback", get(handlers::callback::<B, G, S>))
        .with_state(state)
}
