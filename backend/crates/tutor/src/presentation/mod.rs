//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::TutorAppState;
pub use router::{tutor_router, tutor_router_generic};
