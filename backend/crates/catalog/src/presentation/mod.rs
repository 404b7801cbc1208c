//! Presentation Layer

pub mod handlers;
pub mod pages;
pub mod router;
pub mod templates;

pub use handlers::CatalogAppState;
pub use router::{catalog_router, catalog_router_generic};
pub use templates::TemplateRegistry;
