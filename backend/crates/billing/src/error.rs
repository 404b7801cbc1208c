//! Billing Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Billing-specific result type alias
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing-specific error variants
#[derive(Debug, Error)]
pub enum BillingError {
    /// Account has no usable email to bill
    #[error("Account has no email address")]
    MissingEmail,

    /// Callback arrived without a reference token
    #[error("No payment reference provided")]
    MissingReference,

    /// The gateway verified the reference as not successful
    #[error("Payment was not successful")]
    VerificationFailed,

    /// Transport failure or malformed gateway response, detail for the
    /// log only
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BillingError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BillingError::MissingEmail | BillingError::MissingReference => {
                StatusCode::BAD_REQUEST
            }
            BillingError::VerificationFailed => StatusCode::PAYMENT_REQUIRED,
            BillingError::Gateway(_) => StatusCode::BAD_GATEWAY,
            BillingError::Database(_) | BillingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::MissingEmail | BillingError::MissingReference => ErrorKind::BadRequest,
            BillingError::VerificationFailed => ErrorKind::BadRequest,
            BillingError::Gateway(_) => ErrorKind::BadGateway,
            BillingError::Database(_) | BillingError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BillingError::Gateway(detail) => {
                tracing::error!(detail = %detail, "Payment gateway error");
            }
            BillingError::Database(e) => {
                tracing::error!(error = %e, "Billing database error");
            }
            BillingError::Internal(msg) => {
                tracing::error!(message = %msg, "Billing internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Billing error");
            }
        }
    }
}

impl IntoResponse for BillingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
