//! # Validation Module
//!
//! Input validation for the admin product form, the product detail
//! selection and the checkout form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View (out of tree)                                           │
//! │  └── Disabled buttons, required inputs                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (apps/storefront)                                    │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Size / colour selection (THIS MODULE)                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Product form and checkout rules (THIS MODULE)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stylehub_core::money::Money;
//! use stylehub_core::validation::{validate_price, validate_product_name};
//!
//! assert!(validate_product_name("Denim Jacket").is_ok());
//! assert!(validate_product_name("   ").is_err());
//! assert!(validate_price(Money::zero()).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CustomerDetails, PaymentMethod, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Form
// =============================================================================

/// Validates a product name: must not be blank.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }
    Ok(())
}

/// Validates a selling price: must be strictly positive.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates the effective name and price of a product about to be saved.
///
/// `None` means the field was neither supplied nor inherited from an
/// existing product.
pub fn validate_product_fields(name: Option<&str>, price: Option<Money>) -> ValidationResult<()> {
    validate_product_name(name.unwrap_or_default())?;
    match price {
        Some(price) => validate_price(price),
        None => Err(ValidationError::required("price")),
    }
}

// =============================================================================
// Cart Selection
// =============================================================================

/// Validates a cart quantity: at least one unit.
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates the size and colour picked on the product detail page.
///
/// ## Rules
/// - A size is required when the product offers sizes, and must be one of them
/// - A colour is required when the product offers colours, and must be one of them
/// - Size is checked first, matching the order of the detail page's prompts
///
/// ## Returns
/// The trimmed `(size, color)` pair to store on the cart line. A product
/// without size (or colour) options yields an empty string for that slot.
pub fn validate_cart_selection(
    product: &Product,
    size: Option<&str>,
    color: Option<&str>,
) -> ValidationResult<(String, String)> {
    let size = pick_option("size", size, &product.sizes, |s| product.has_size(s))?;
    let color_names: Vec<String> = product.colors.iter().map(|c| c.name.clone()).collect();
    let color = pick_option("color", color, &color_names, |c| product.has_color(c))?;
    Ok((size, color))
}

fn pick_option<F>(
    field: &str,
    picked: Option<&str>,
    allowed: &[String],
    offered: F,
) -> ValidationResult<String>
where
    F: Fn(&str) -> bool,
{
    let picked = picked.map(str::trim).filter(|s| !s.is_empty());
    match picked {
        None if allowed.is_empty() => Ok(String::new()),
        None => Err(ValidationError::required(field)),
        Some(value) if offered(value) => Ok(value.to_string()),
        Some(value) => Err(ValidationError::NotAllowed {
            field: field.to_string(),
            value: value.to_string(),
            allowed: allowed.to_vec(),
        }),
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Validates the checkout form.
///
/// ## Rules
/// - Name, phone and address must be non-blank (email and city are optional)
/// - A payment method must be selected
///
/// ## Returns
/// The selected payment method.
pub fn validate_checkout(
    details: &CustomerDetails,
    payment_method: Option<PaymentMethod>,
) -> ValidationResult<PaymentMethod> {
    for (field, value) in [
        ("name", &details.name),
        ("phone", &details.phone),
        ("address", &details.address),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::required(field));
        }
    }

    payment_method.ok_or_else(|| ValidationError::required("payment method"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ColorOption, ProductDraft, ProductId};

    fn sneaker() -> Product {
        ProductDraft {
            sizes: Some(vec!["40".into(), "41".into()]),
            colors: Some(vec![ColorOption::new("Black", "#000000")]),
            ..ProductDraft::new("Urban Sneakers", Money::from_minor(5999), Category::Shoes)
        }
        .into_new_product(ProductId(3))
    }

    fn details() -> CustomerDetails {
        CustomerDetails {
            name: "Rahim Ahmed".into(),
            phone: "01712345678".into(),
            email: String::new(),
            address: "House 12, Road 5, Dhanmondi".into(),
            city: "Dhaka".into(),
        }
    }

    #[test]
    fn test_product_fields() {
        assert!(validate_product_fields(Some("Tee"), Some(Money::from_minor(10))).is_ok());
        assert_eq!(
            validate_product_fields(None, Some(Money::from_minor(10))),
            Err(ValidationError::required("name"))
        );
        assert_eq!(
            validate_product_fields(Some("Tee"), None),
            Err(ValidationError::required("price"))
        );
        assert!(matches!(
            validate_product_fields(Some("Tee"), Some(Money::from_minor(-5))),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_cart_selection_requires_size_then_color() {
        let p = sneaker();
        assert_eq!(
            validate_cart_selection(&p, None, None),
            Err(ValidationError::required("size"))
        );
        assert_eq!(
            validate_cart_selection(&p, Some("41"), Some(" ")),
            Err(ValidationError::required("color"))
        );
        assert_eq!(
            validate_cart_selection(&p, Some("41"), Some("Black")),
            Ok(("41".to_string(), "Black".to_string()))
        );
    }

    #[test]
    fn test_cart_selection_rejects_unknown_options() {
        let p = sneaker();
        assert!(matches!(
            validate_cart_selection(&p, Some("XL"), Some("Black")),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_cart_selection_without_options() {
        let mut p = sneaker();
        p.sizes.clear();
        p.colors.clear();
        assert_eq!(
            validate_cart_selection(&p, None, None),
            Ok((String::new(), String::new()))
        );
    }

    #[test]
    fn test_checkout_rules() {
        assert_eq!(
            validate_checkout(&details(), Some(PaymentMethod::Nagad)),
            Ok(PaymentMethod::Nagad)
        );

        let mut blank_phone = details();
        blank_phone.phone = "  ".into();
        assert_eq!(
            validate_checkout(&blank_phone, Some(PaymentMethod::Bkash)),
            Err(ValidationError::required("phone"))
        );

        assert_eq!(
            validate_checkout(&details(), None),
            Err(ValidationError::required("payment method"))
        );
    }
}
