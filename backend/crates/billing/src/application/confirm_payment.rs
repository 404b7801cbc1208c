//! Confirm Payment Use Case
//!
//! The "Callback/Verification" step. Correlation is by the customer
//! email the gateway reports, not by a stored reference: there is no
//! payment ledger, so a reference can be verified any number of times
//! and the flag-set is idempotent. Both oddities of that design are
//! surfaced as logged anomalies, never crashes.

use std::sync::Arc;

use auth::models::email::Email;

use crate::domain::gateway::PaymentGateway;
use crate::domain::repository::BillingRepository;
use crate::error::{BillingError, BillingResult};
use kernel::id::UserId;

/// What a verified-successful payment resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Membership flag set (or re-set) for this user
    SubscriptionActivated { user_id: UserId },
    /// The gateway's customer email matches no local account. The money
    /// moved but there is nothing to update; reconciliation is manual.
    NoLocalAccount,
}

/// Confirm payment use case
pub struct ConfirmPaymentUseCase<B, G>
where
    B: BillingRepository,
    G: PaymentGateway,
{
    repo: Arc<B>,
    gateway: Arc<G>,
}

impl<B, G> ConfirmPaymentUseCase<B, G>
where
    B: BillingRepository,
    G: PaymentGateway,
{
    pub fn new(repo: Arc<B>, gateway: Arc<G>) -> Self {
        Self { repo, gateway }
    }

    pub async fn execute(&self, reference: &str) -> BillingResult<ConfirmOutcome> {
        let verification = self.gateway.verify(reference).await?;

        if !verification.success {
            tracing::info!(reference = %reference, "Payment verification reported failure");
            return Err(BillingError::VerificationFailed);
        }

        let reported_email = verification
            .customer_email
            .ok_or_else(|| {
                BillingError::Gateway("verification payload missing customer email".to_string())
            })?;

        // Same normalization as registration, so the comparison key is
        // stable whatever casing the gateway reports
        let email = Email::new(&reported_email)
            .map_err(|_| BillingError::Gateway("verification payload missing customer email".to_string()))?;

        let Some(user_id) = self.repo.find_user_id_by_email(email.as_str()).await? else {
            tracing::warn!(
                reference = %reference,
                email = %email,
                "Verified payment has no local account"
            );
            return Ok(ConfirmOutcome::NoLocalAccount);
        };

        let already_active = self.repo.activate_membership(user_id).await?;
        if already_active {
            // No ledger means no dedup; a reloaded callback URL lands
            // here. Setting true twice is harmless.
            tracing::warn!(
                reference = %reference,
                user_id = %user_id,
                "Reference re-verified; membership already active"
            );
        } else {
            tracing::info!(
                reference = %reference,
                user_id = %user_id,
                "Subscription activated"
            );
        }

        Ok(ConfirmOutcome::SubscriptionActivated { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateway::PaymentVerification;
    use crate::infra::memory::{InMemoryBillingRepository, StubGateway};
    use kernel::id::Id;

    #[tokio::test]
    async fn test_verified_success_sets_flag() {
        let repo = Arc::new(InMemoryBillingRepository::with_user(1, "alice@x.com", false));
        let gateway = Arc::new(StubGateway::verifying(PaymentVerification {
            success: true,
            customer_email: Some("alice@x.com".to_string()),
        }));

        let uc = ConfirmPaymentUseCase::new(repo.clone(), gateway);
        let outcome = uc.execute("ref-1").await.unwrap();

        assert_eq!(
            outcome,
            ConfirmOutcome::SubscriptionActivated {
                user_id: Id::from_i64(1)
            }
        );
        assert!(repo.is_pro_member(1));
    }

    #[tokio::test]
    async fn test_second_identical_callback_is_noop() {
        let repo = Arc::new(InMemoryBillingRepository::with_user(1, "alice@x.com", false));
        let gateway = Arc::new(StubGateway::verifying(PaymentVerification {
            success: true,
            customer_email: Some("alice@x.com".to_string()),
        }));

        let uc = ConfirmPaymentUseCase::new(repo.clone(), gateway);
        uc.execute("ref-1").await.unwrap();
        let outcome = uc.execute("ref-1").await.unwrap();

        // Flag stays true, no error
        assert!(matches!(outcome, ConfirmOutcome::SubscriptionActivated { .. }));
        assert!(repo.is_pro_member(1));
    }

    #[tokio::test]
    async fn test_mixed_case_email_still_correlates() {
        let repo = Arc::new(InMemoryBillingRepository::with_user(1, "alice@x.com", false));
        let gateway = Arc::new(StubGateway::verifying(PaymentVerification {
            success: true,
            customer_email: Some("Alice@X.COM".to_string()),
        }));

        let uc = ConfirmPaymentUseCase::new(repo.clone(), gateway);
        uc.execute("ref-1").await.unwrap();
        assert!(repo.is_pro_member(1));
    }

    #[tokio::test]
    async fn test_unknown_email_is_anomaly_not_error() {
        let repo = Arc::new(InMemoryBillingRepository::with_user(1, "alice@x.com", false));
        let gateway = Arc::new(StubGateway::verifying(PaymentVerification {
            success: true,
            customer_email: Some("stranger@elsewhere.com".to_string()),
        }));

        let uc = ConfirmPaymentUseCase::new(repo.clone(), gateway);
        let outcome = uc.execute("ref-1").await.unwrap();

        assert_eq!(outcome, ConfirmOutcome::NoLocalAccount);
        assert!(!repo.is_pro_member(1));
    }

    #[tokio::test]
    async fn test_failed_verification_mutates_nothing() {
        let repo = Arc::new(InMemoryBillingRepository::with_user(1, "alice@x.com", false));
        let gateway = Arc::new(StubGateway::verifying(PaymentVerification {
            success: false,
            customer_email: Some("alice@x.com".to_string()),
        }));

        let uc = ConfirmPaymentUseCase::new(repo.clone(), gateway);
        let result = uc.execute("ref-1").await;

        assert!(matches!(result, Err(BillingError::VerificationFailed)));
        assert!(!repo.is_pro_member(1));
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let repo = Arc::new(InMemoryBillingRepository::with_user(1, "alice@x.com", false));
        let gateway = Arc::new(StubGateway::failing("verify timeout"));

        let uc = ConfirmPaymentUseCase::new(repo, gateway);
        assert!(matches!(
            uc.execute("ref-1").await,
            Err(BillingError::Gateway(_))
        ));
    }
}
