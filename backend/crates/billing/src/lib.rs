//! Billing Backend Module
//!
//! One-time subscription payments through an external gateway
//! (Paystack-style initialize/verify), and the membership flag flip the
//! catalog's access gate consumes.
//!
//! Clean Architecture structure:
//! - `domain/` - Gateway trait, verification types, repository trait
//! - `application/` - Start-checkout and confirm-payment use cases
//! - `infra/` - Paystack REST client, Postgres membership store
//! - `presentation/` - Subscription pages, payment routes, router
//!
//! ## State machine per attempt
//! - Initiated: look up the payer's email, create a payment intent,
//!   302 the browser to the gateway's authorization URL. Nothing is
//!   persisted locally.
//! - Callback: the gateway redirects back with a reference; verify it,
//!   then correlate by the reported customer email. No reference is
//!   stored, so re-verification is possible and harmlessly idempotent.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BillingConfig;
pub use error::{BillingError, BillingResult};
pub use infra::paystack::PaystackClient;
pub use infra::postgres::PgBillingRepository;
pub use presentation::router::billing_router;
