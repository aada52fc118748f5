//! # Error Types
//!
//! - [`ApiError`]: what the kiosk front-end receives when a command fails
//! - [`StartupError`]: why the terminal could not start
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Kiosk Terminal                     │
//! │                                                                         │
//! │  {"command":"add_to_cart","itemId":777}                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function → Result<T, ApiError>                          │  │
//! │  │                                                                  │  │
//! │  │  Bad JSON?          ── serde_json::Error ─────────┐              │  │
//! │  │  Validation Error?  ── CoreError::Validation ─────┼──► ApiError  │  │
//! │  │  Unknown item/line? ── CoreError::LineNotFound ───┘              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  {"error":{"code":"NOT_FOUND","message":"Menu item not found: 777"}}    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use kiosk_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Error returned from terminal commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Menu item not found: 777"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
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
    /// Menu item or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Request line is not a valid command
    BadRequest,

    /// Cart operation refused (e.g. submitting an empty order)
    CartError,

    /// Unexpected failure
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

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownMenuItem(id) => ApiError::not_found("Menu item", &id.to_string()),
            CoreError::LineNotFound(line_id) => ApiError::not_found("Cart line", &line_id),
            CoreError::DuplicateMenuItem { id } => {
                ApiError::internal(format!("Menu has duplicate item id {}", id))
            }
            CoreError::MenuData(e) => {
                tracing::error!("Menu data error: {}", e);
                ApiError::internal("Menu data is invalid")
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Malformed request lines.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Invalid request: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Error
// =============================================================================

/// Failures before the request loop starts.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Could not read menu file {}: {}", .path.display(), .source)]
    MenuFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Menu file {} is invalid: {}", .path.display(), .source)]
    Menu {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::LineNotFound("abc".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Cart line not found: abc");

        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::cart("Cannot submit an empty order");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": "CART_ERROR", "message": "Cannot submit an empty order"})
        );
    }

    #[test]
    fn test_bad_json_is_bad_request() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert!(err.message.starts_with("Invalid request"));
    }
}
