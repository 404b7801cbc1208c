//! Payment Gateway Seam
//!
//! Interface contract for the external gateway. Two calls only: create
//! an intent, verify a reference.

use crate::error::BillingResult;

/// A created payment intent
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    /// Where to send the browser to authorize the payment
    pub authorization_url: String,
    /// Gateway correlation token for this attempt
    pub reference: String,
}

/// Result of verifying a reference
#[derive(Debug, Clone)]
pub struct PaymentVerification {
    /// Whether the gateway reports the payment as successful
    pub success: bool,
    /// The customer email the gateway has on record for this payment;
    /// the only correlation key back to a local account
    pub customer_email: Option<String>,
}

/// Payment gateway trait
#[trait_variant::make(PaymentGateway: Send)]
pub trait LocalPaymentGateway {
    /// Create a payment intent for a fixed amount
    ///
    /// `amount` is in the gateway's minor unit (kobo).
    async fn initialize(
        &self,
        email: &str,
        amount: i64,
        callback_url: &str,
    ) -> BillingResult<PaymentIntent>;

    /// Verify a reference returned through the callback redirect
    async fn verify(&self, reference: &str) -> BillingResult<PaymentVerification>;
}
