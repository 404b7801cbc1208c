//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::error::BillingResult;
use kernel::id::UserId;

/// Billing-side view of the user store
#[trait_variant::make(BillingRepository: Send)]
pub trait LocalBillingRepository {
    /// Email on record for a user
    async fn email_of(&self, user_id: UserId) -> BillingResult<Option<String>>;

    /// Correlate a gateway-reported email back to a local account
    async fn find_user_id_by_email(&self, email: &str) -> BillingResult<Option<UserId>>;

    /// Set the membership flag
    ///
    /// Idempotent; returns `true` if the flag was already set (a
    /// re-verified reference, worth a log line but not an error).
    async fn activate_membership(&self, user_id: UserId) -> BillingResult<bool>;
}
