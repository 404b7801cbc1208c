//! Presentation Layer
//!
//! HTTP handlers, DTOs, pages, router, and the session gate.

pub mod dto;
pub mod gate;
pub mod handlers;
pub mod pages;
pub mod router;

pub use gate::{require_api_session, require_page_session};
pub use handlers::AuthAppState;
pub use router::{auth_router, auth_router_generic};
