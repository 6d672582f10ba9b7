use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{ErrorCode, ErrorResponse};
use thiserror::Error;

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur in the pricing domain
#[derive(Debug, Error)]
pub enum PricingError {
    /// A rate parameter failed validation, `name` is the rate's path (e.g. `tierCommission.high_range`)
    #[error("Invalid rate '{name}': {reason}")]
    InvalidRate { name: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Reading or writing the persisted rate file failed
    #[error("Rate storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Rate serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PricingError {
    pub fn invalid_rate(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::InvalidRate {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            PricingError::InvalidRate { .. } => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidRate, self.to_string())
            }
            PricingError::InvalidInput(_) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationError,
                self.to_string(),
            ),
            PricingError::ProductNotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, self.to_string())
            }
            PricingError::Storage(e) => {
                tracing::error!(error = %e, "Rate storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::IoError,
                    "Rate storage error".to_string(),
                )
            }
            PricingError::Serialization(e) => {
                tracing::error!(error = %e, "Rate serialization failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::SerdeJsonError,
                    "Rate serialization error".to_string(),
                )
            }
        };

        let mut body = ErrorResponse::new(code, message);
        if let PricingError::InvalidRate { name, .. } = &self {
            body = body.with_details(serde_json::json!({ "rate": name }));
        }

        (status, Json(body)).into_response()
    }
}
