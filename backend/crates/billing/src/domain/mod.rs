//! Domain Layer

pub mod gateway;
pub mod repository;

// Re-exports
pub use gateway::{PaymentGateway, PaymentIntent, PaymentVerification};
pub use repository::BillingRepository;
