//! Infrastructure Layer
//!
//! Gateway client and database implementations.

pub mod paystack;
pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use paystack::PaystackClient;
pub use postgres::PgBillingRepository;
