//! Start Checkout Use Case
//!
//! The "Initiated" step: look up the payer's email, create an intent,
//! hand back the gateway's authorization URL. Nothing is persisted; a
//! failed attempt simply ends.

use std::sync::Arc;

use crate::application::config::BillingConfig;
use crate::domain::gateway::PaymentGateway;
use crate::domain::repository::BillingRepository;
use crate::error::{BillingError, BillingResult};
use kernel::id::UserId;

/// Start checkout use case
pub struct StartCheckoutUseCase<B, G>
where
    B: BillingRepository,
    G: PaymentGateway,
{
    repo: Arc<B>,
    gateway: Arc<G>,
    config: Arc<BillingConfig>,
}

impl<B, G> StartCheckoutUseCase<B, G>
where
    B: BillingRepository,
    G: PaymentGateway,
{
    pub fn new(repo: Arc<B>, gateway: Arc<G>, config: Arc<BillingConfig>) -> Self {
        Self {
            repo,
            gateway,
            config,
        }
    }

    /// Create a payment intent; returns the authorization URL to 302 to
    pub async fn execute(&self, user_id: UserId) -> BillingResult<String> {
        let email = self
            .repo
            .email_of(user_id)
            .await?
            .filter(|e| !e.is_empty())
            .ok_or(BillingError::MissingEmail)?;

        let intent = self
            .gateway
            .initialize(&email, self.config.amount_kobo, &self.config.callback_url)
            .await?;

        tracing::info!(
            user_id = %user_id,
            reference = %intent.reference,
            "Payment initiated"
        );

        Ok(intent.authorization_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::{InMemoryBillingRepository, StubGateway};

    fn config() -> Arc<BillingConfig> {
        Arc::new(BillingConfig::new("http://localhost:8080"))
    }

    #[tokio::test]
    async fn test_checkout_returns_authorization_url() {
        let repo = Arc::new(InMemoryBillingRepository::with_user(1, "alice@x.com", false));
        let gateway = Arc::new(StubGateway::initializing_to("https://gateway/authorize/abc"));

        let uc = StartCheckoutUseCase::new(repo, gateway.clone(), config());
        let url = uc.execute(kernel::id::Id::from_i64(1)).await.unwrap();
        assert_eq!(url, "https://gateway/authorize/abc");

        // The gateway saw the payer's email, the fixed amount, and the
        // configured callback address
        let call = gateway.last_initialize().unwrap();
        assert_eq!(call.email, "alice@x.com");
        assert_eq!(call.amount, 500);
        assert_eq!(call.callback_url, "http://localhost:8080/paystack/callback");
    }

    #[tokio::test]
    async fn test_missing_email_fails_before_gateway() {
        let repo = Arc::new(InMemoryBillingRepository::with_user(1, "", false));
        let gateway = Arc::new(StubGateway::initializing_to("unused"));

        let uc = StartCheckoutUseCase::new(repo, gateway.clone(), config());
        let result = uc.execute(kernel::id::Id::from_i64(1)).await;
        assert!(matches!(result, Err(BillingError::MissingEmail)));
        assert!(gateway.last_initialize().is_none());
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let repo = Arc::new(InMemoryBillingRepository::with_user(1, "alice@x.com", false));
        let gateway = Arc::new(StubGateway::failing("gateway down"));

        let uc = StartCheckoutUseCase::new(repo, gateway, config());
        let result = uc.execute(kernel::id::Id::from_i64(1)).await;
        assert!(matches!(result, Err(BillingError::Gateway(_))));
    }
}
