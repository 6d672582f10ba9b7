//! Error codes for API responses.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier for clients, an integer for
//! logs and metrics, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
//! assert_eq!(ErrorCode::ValidationError.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// Request validation failed
    ValidationError,
    /// Request body is not valid JSON for the endpoint
    InvalidJson,
    /// Requested resource was not found
    NotFound,
    /// A fee rate was rejected by the settings validator
    InvalidRate,
    /// A path segment does not name a known value
    InvalidPath,

    // Server errors (1100s)
    InternalError,
    ServiceUnavailable,

    // I/O errors (4000s)
    IoError,

    // Serialization errors (5000s)
    SerdeJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidRate => "INVALID_RATE",
            Self::InvalidPath => "INVALID_PATH",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::NotFound => 1003,
            Self::InvalidRate => 1004,
            Self::InvalidPath => 1005,
            Self::InternalError => 1100,
            Self::ServiceUnavailable => 1101,
            Self::IoError => 4000,
            Self::SerdeJsonError => 5000,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Request body could not be parsed",
            Self::NotFound => "The requested resource was not found",
            Self::InvalidRate => "Rate configuration rejected",
            Self::InvalidPath => "Path parameter could not be parsed",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service temporarily unavailable",
            Self::IoError => "Storage I/O error",
            Self::SerdeJsonError => "Failed to encode or decode stored data",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
