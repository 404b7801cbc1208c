//! Catalog Backend Module
//!
//! The module catalog and its premium access gate.
//!
//! Clean Architecture structure:
//! - `domain/` - Module entity, slug value object, repository traits
//! - `application/` - List and view use cases (the access policy)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, pages, template registry, router
//!
//! ## Access policy
//! - Free modules: any authenticated identity
//! - Premium modules: subscription flag looked up fresh on every view;
//!   a revoked subscription blocks the very next request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::catalog_router;
pub use presentation::templates::TemplateRegistry;
