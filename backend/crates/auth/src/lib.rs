//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration with username + email + password
//! - Login/logout with server-side sessions
//! - Session tokens: HMAC-SHA256-signed session id in an HttpOnly cookie
//! - Session gate helpers reused by every protected route
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, verified by recomputation
//! - Unknown user and wrong password are indistinguishable to callers
//! - A fresh session replaces any presented one on login (fixation guard)
//! - Sessions expire after a configured TTL

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod gate {
    pub use crate::presentation::gate::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}
