//! HTTP Handlers

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::presentation::gate::require_page_session;
use auth::presentation::handlers::consume_flash_page;
use platform::flash::{FlashMessage, redirect, redirect_with_flash};

use crate::application::config::BillingConfig;
use crate::application::confirm_payment::{ConfirmOutcome, ConfirmPaymentUseCase};
use crate::application::start_checkout::StartCheckoutUseCase;
use crate::domain::gateway::PaymentGateway;
use crate::domain::repository::BillingRepository;
use crate::error::BillingError;
use crate::presentation::dto::CallbackParams;
use crate::presentation::pages;

/// Shared state for billing handlers
#[derive(Clone)]
pub struct BillingAppState<B, G, S>
where
    B: BillingRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<B>,
    pub gateway: Arc<G>,
    pub sessions: Arc<S>,
    pub auth_config: Arc<AuthConfig>,
    pub config: Arc<BillingConfig>,
}

/// GET /subscription
pub async fn subscription<B, G, S>(
    State(state): State<BillingAppState<B, G, S>>,
    headers: HeaderMap,
) -> Response
where
    B: BillingRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_page_session(
        &headers,
        state.sessions.clone(),
        state.auth_config.clone(),
        Some("Please log in to manage your subscription."),
    )
    .await
    {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    consume_flash_page(&headers, |flash| {
        pages::subscription_page(&identity.username, flash)
    })
}

/// POST /create-paystack-payment
pub async fn create_payment<B, G, S>(
    State(state): State<BillingAppState<B, G, S>>,
    headers: HeaderMap,
) -> Response
where
    B: BillingRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_page_session(
        &headers,
        state.sessions.clone(),
        state.auth_config.clone(),
        Some("Please log in to subscribe."),
    )
    .await
    {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    let use_case =
        StartCheckoutUseCase::new(state.repo.clone(), state.gateway.clone(), state.config.clone());

    match use_case.execute(identity.user_id).await {
        // Hand the browser to the gateway; the attempt has no local state
        Ok(authorization_url) => redirect(&authorization_url),
        Err(BillingError::MissingEmail) => redirect_with_flash(
            "/subscription",
            &FlashMessage::error("Your account needs a valid email to subscribe."),
        ),
        Err(BillingError::Database(e)) => {
            tracing::error!(error = %e, "Payment initiation database error");
            redirect_with_flash(
                "/subscription",
                &FlashMessage::error("Database error. Please try again."),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Payment initialization failed");
            redirect_with_flash(
                "/subscription",
                &FlashMessage::error("Payment initialization failed. Please try again."),
            )
        }
    }
}

/// GET /paystack/callback
///
/// No session requirement: the gateway's redirect carries only the
/// reference, and correlation is by the verified customer email.
pub async fn callback<B, G, S>(
    State(state): State<BillingAppState<B, G, S>>,
    Query(params): Query<CallbackParams>,
) -> Response
where
    B: BillingRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let Some(reference) = params.reference.filter(|r| !r.is_empty()) else {
        return redirect_with_flash(
            "/subscription",
            &FlashMessage::error("Payment verification failed. No reference found."),
        );
    };

    let use_case = ConfirmPaymentUseCase::new(state.repo.clone(), state.gateway.clone());

    match use_case.execute(&reference).await {
        Ok(ConfirmOutcome::SubscriptionActivated { .. }) => redirect_with_flash(
            "/modules",
            &FlashMessage::success("Subscription successful! You now have full access."),
        ),
        // Money moved but no account matched; flagged in the logs by the
        // use case, surfaced to the browser as an error banner
        Ok(ConfirmOutcome::NoLocalAccount) => redirect_with_flash(
            "/modules",
            &FlashMessage::error("Payment successful, but we could not find your account."),
        ),
        Err(BillingError::VerificationFailed) => redirect_with_flash(
            "/subscription",
            &FlashMessage::error("Payment failed. Please try again."),
        ),
        Err(e) => {
            tracing::error!(error = %e, reference = %reference, "Payment verification error");
            redirect_with_flash(
                "/subscription",
                &FlashMessage::error("Payment verification failed. Please try again."),
            )
        }
    }
}
