//! Tutor Error Types
//!
//! The explain endpoint speaks plain `{"error": ...}` JSON. Upstream
//! detail is logged server-side and never surfaced to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use serde_json::json;
use thiserror::Error;

/// Tutor-specific result type alias
pub type TutorResult<T> = Result<T, TutorError>;

/// Tutor-specific error variants
#[derive(Debug, Error)]
pub enum TutorError {
    /// Question empty after trimming
    #[error("No question provided")]
    EmptyQuestion,

    /// Transport or model failure, detail for the log only
    #[error("AI service error: {0}")]
    Upstream(String),
}

impl TutorError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TutorError::EmptyQuestion => StatusCode::BAD_REQUEST,
            TutorError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TutorError::EmptyQuestion => ErrorKind::BadRequest,
            TutorError::Upstream(_) => ErrorKind::InternalServerError,
        }
    }

    /// The message the caller sees; generic for upstream failures
    pub fn client_message(&self) -> &'static str {
        match self {
            TutorError::EmptyQuestion => "No question provided.",
            TutorError::Upstream(_) => "Failed to connect to AI service. Please try again.",
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TutorError::Upstream(detail) => {
                tracing::error!(detail = %detail, "AI model call failed");
            }
            TutorError::EmptyQuestion => {
                tracing::debug!("Explain request with empty question");
            }
        }
    }
}

impl IntoResponse for TutorError {
    fn into_response(self) -> Response {
        self.log();
        (
            self.status_code(),
            Json(json!({ "error": self.client_message() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TutorError::EmptyQuestion.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            TutorError::Upstream("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_detail_not_in_client_message() {
        let err = TutorError::Upstream("api key rejected (status 403)".to_string());
        assert!(!err.client_message().contains("403"));
        assert_eq!(
            err.client_message(),
            "Failed to connect to AI service. Please try again."
        );
    }
}
