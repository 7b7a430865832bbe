//! # Error Types
//!
//! Domain-specific error types for stylehub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stylehub-core errors (this file)                                      │
//! │  ├── CoreError        - Store operation failures                       │
//! │  └── ValidationError  - Form input validation failures                 │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  ├── ConfigError      - Settings file / environment problems           │
//! │  └── ApiError         - What the view layer sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups of unknown ids on delete and status updates are not errors: those
//! operations are no-ops that report whether anything matched.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Store operation errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Order id is not in the order list.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// A cart position outside the current cart.
    ///
    /// ## When This Occurs
    /// - The view layer holds a stale index after the cart shrank
    /// - A remove/update races a checkout that cleared the cart
    #[error("Cart position {index} is out of range (cart has {len} items)")]
    CartIndexOutOfRange { index: usize, len: usize },

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not one of the allowed choices.
    #[error("{field} '{value}' must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Required`].
    pub fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CartIndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Cart position 4 is out of range (cart has 2 items)"
        );
        assert_eq!(
            CoreError::ProductNotFound(ProductId(7)).to_string(),
            "Product not found: 7"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("phone").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
