//! Tutor Backend Module
//!
//! AI-backed question explanation: one question in, one explanation out.
//! Stateless; nothing is stored between requests.
//!
//! Clean Architecture structure:
//! - `application/` - Explain use case, model trait, prompt template
//! - `infra/` - Gemini REST client
//! - `presentation/` - JSON handler and router

pub mod application;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::explain::{ExplainUseCase, ExplanationModel};
pub use error::{TutorError, TutorResult};
pub use infra::gemini::GeminiClient;
pub use presentation::router::tutor_router;
