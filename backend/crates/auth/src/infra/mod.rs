//! Infrastructure Layer
//!
//! Database implementations.

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgAuthRepository;
