//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow: Core → Command → View                    │
//! │                                                                         │
//! │  ┌─────────────┐     ┌─────────────┐     ┌─────────────┐               │
//! │  │ CoreError   │     │ ConfigError │     │ Admin gate  │               │
//! │  └──────┬──────┘     └──────┬──────┘     └──────┬──────┘               │
//! │         │                   │                   │                       │
//! │         └───────────────────┼───────────────────┘                       │
//! │                             ▼                                           │
//! │                    ┌─────────────────┐                                  │
//! │                    │    ApiError     │ ← Serializable                  │
//! │                    │  code + message │                                  │
//! │                    └────────┬────────┘                                  │
//! │                             ▼                                           │
//! │                    View: { code: "NOT_FOUND", message: "..." }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use stylehub_core::CoreError;

use crate::state::ConfigError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the view layer receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
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
    /// Product, order or review does not exist
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Cart operation failed (stale index, empty cart)
    CartError,

    /// Admin command without an admin session
    Unauthorized,

    /// Settings file or environment is invalid
    ConfigError,
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
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Creates an unauthorized error for admin-only commands.
    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Admin login required")
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", id),
            e @ CoreError::CartIndexOutOfRange { .. } => ApiError::cart(e.to_string()),
            e @ CoreError::EmptyCart => ApiError::cart(e.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for storefront commands.
pub type ApiResult<T> = Result<T, ApiError>;
