//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  stdin line                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Event::parse ──── unknown verb ──────────────► UNKNOWN_COMMAND         │
//! │      │        ──── bad tab / id / quantity ───► INVALID_ARGUMENT        │
//! │      ▼                                                                  │
//! │  Command ───────── ProductNotFound ───────────► NOT_FOUND               │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  {"ok": true, "data": ...}    or    {"ok": false, "error": {...}}       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed line never ends the session; the client gets the error and the
//! next line is processed as usual.

use decor_core::{CoreError, ErrorKind, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// API error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced product is not in the catalog
    NotFound,

    /// Argument missing, malformed or outside its allowed set
    InvalidArgument,

    /// The line's verb is not a known command
    UnknownCommand,

    /// Response could not be produced
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidArgument, message)
    }

    /// Creates an unknown command error.
    pub fn unknown_command(verb: &str) -> Self {
        ApiError::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command: {} (try 'help')", verb),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match err.kind() {
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::InvalidArgument => ErrorCode::InvalidArgument,
        };
        match err {
            CoreError::Validation(e) => ApiError::new(code, e.to_string()),
            other => ApiError::new(code, other.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::invalid_argument(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Response serialization failed: {}", err);
        ApiError::internal("Response could not be serialized")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decor_core::ProductId;

    #[test]
    fn test_not_found_mapping() {
        let err: ApiError = CoreError::ProductNotFound(ProductId::new(42)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");
    }

    #[test]
    fn test_validation_mapping_drops_prefix() {
        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "tab".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(err.message, "tab is required");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::unknown_command("checkout");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNKNOWN_COMMAND");
        assert_eq!(json["message"], "Unknown command: checkout (try 'help')");
    }

    #[test]
    fn test_display() {
        let err = ApiError::invalid_argument("quantity is required");
        assert_eq!(err.to_string(), "[InvalidArgument] quantity is required");
    }
}
