//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Add To Cart Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Detail page: pick size, pick colour, quantity, "Add to Cart"           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  product exists? ──── no ──► NOT_FOUND                                  │
//! │       │                                                                 │
//! │  size picked?  ────── no ──► toast "Please select a size"               │
//! │       │                                                                 │
//! │  colour picked? ───── no ──► toast "Please select a color"              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::add_to_cart (merge on product + size + colour)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  toast "<name> added to cart!" ──► CartResponse                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use stylehub_core::validation::{validate_cart_selection, validate_quantity};
use stylehub_core::{CartItem, CoreError, ProductId, ValidationError};

use crate::error::{ApiError, ApiResult};
use crate::state::{CartTotals, Store, StoreState, ToastChannel};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Store> for CartResponse {
    fn from(store: &Store) -> Self {
        CartResponse {
            items: store.cart().items().to_vec(),
            totals: store.cart_totals(),
        }
    }
}

/// Add-to-cart request from the product detail page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub color: Option<String>,
    /// Defaults to 1.
    pub quantity: Option<u32>,
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart(store: &StoreState) -> CartResponse {
    debug!("get_cart command");
    store.with_store(|s| CartResponse::from(s))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Same product, size and colour already in cart: quantity increases
/// - Otherwise: added as a new line
/// - The product is copied into the line, later edits do not affect it
///
/// ## Returns
/// Updated cart with all items and totals
pub fn add_to_cart(
    store: &StoreState,
    toast: &ToastChannel,
    request: AddToCartRequest,
) -> ApiResult<CartResponse> {
    let quantity = request.quantity.unwrap_or(1);
    debug!(
        product_id = %request.product_id,
        size = ?request.size,
        color = ?request.color,
        quantity,
        "add_to_cart command"
    );

    let result = store.with_store_mut(|s| {
        let product = s
            .product(request.product_id)
            .cloned()
            .ok_or(CoreError::ProductNotFound(request.product_id))?;

        let (size, color) = validate_cart_selection(
            &product,
            request.size.as_deref(),
            request.color.as_deref(),
        )?;
        validate_quantity(quantity)?;

        let name = product.name.clone();
        s.add_to_cart(CartItem::new(product, quantity, size, color));
        Ok::<_, CoreError>((name, CartResponse::from(&*s)))
    });

    match result {
        Ok((name, response)) => {
            info!(product = %name, quantity, "Added to cart");
            toast.show(format!("{} added to cart!", name));
            Ok(response)
        }
        Err(CoreError::Validation(e)) => {
            warn!(error = %e, "add_to_cart rejected");
            if let Some(prompt) = selection_prompt(&e) {
                toast.show(prompt);
            }
            Err(ApiError::validation(e.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Prompt shown when a required size or colour was not picked.
fn selection_prompt(err: &ValidationError) -> Option<&'static str> {
    match err {
        ValidationError::Required { field } if field == "size" => Some("Please select a size"),
        ValidationError::Required { field } if field == "color" => Some("Please select a color"),
        _ => None,
    }
}

/// Updates the quantity of the cart line at `index`.
///
/// ## Behavior
/// - Quantity below 1 is raised to 1 (use `remove_from_cart` to drop a line)
/// - Index out of range: CART_ERROR, cart unchanged
pub fn update_cart_item(
    store: &StoreState,
    index: usize,
    quantity: u32,
) -> ApiResult<CartResponse> {
    debug!(index, quantity, "update_cart_item command");

    let result = store.with_store_mut(|s| {
        s.update_quantity(index, quantity)?;
        Ok::<CartResponse, CoreError>(CartResponse::from(&*s))
    });

    Ok(result?)
}

/// Removes the cart line at `index`.
pub fn remove_from_cart(store: &StoreState, index: usize) -> ApiResult<CartResponse> {
    debug!(index, "remove_from_cart command");

    let result = store.with_store_mut(|s| {
        let removed = s.remove_from_cart(index)?;
        debug!(product = %removed.product.name, "Removed cart line");
        Ok::<CartResponse, CoreError>(CartResponse::from(&*s))
    });

    Ok(result?)
}

/// Clears all items from the cart.
pub fn clear_cart(store: &StoreState) -> CartResponse {
    debug!("clear_cart command");

    store.with_store_mut(|s| {
        s.clear_cart();
        CartResponse::from(&*s)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (StoreState, ToastChannel) {
        (StoreState::default(), ToastChannel::default())
    }

    fn request(id: u32, size: Option<&str>, color: Option<&str>) -> AddToCartRequest {
        AddToCartRequest {
            product_id: ProductId(id),
            size: size.map(str::to_string),
            color: color.map(str::to_string),
            quantity: None,
        }
    }

    #[test]
    fn test_add_to_cart_toasts_product_name() {
        let (store, toast) = setup();
        let cart = add_to_cart(&store, &toast, request(2, Some("M"), Some("Pink Floral"))).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.totals.unit_count, 1);
        assert_eq!(cart.totals.subtotal.amount(), 3499);
        assert_eq!(toast.current(), "Floral Summer Dress added to cart!");
    }

    #[test]
    fn test_missing_size_then_color_prompts() {
        let (store, toast) = setup();

        let err = add_to_cart(&store, &toast, request(1, None, Some("White"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(toast.current(), "Please select a size");

        add_to_cart(&store, &toast, request(1, Some("L"), None)).unwrap_err();
        assert_eq!(toast.current(), "Please select a color");

        assert!(get_cart(&store).items.is_empty());
    }

    #[test]
    fn test_unknown_product() {
        let (store, toast) = setup();
        let err = add_to_cart(&store, &toast, request(404, Some("M"), Some("Red"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(toast.current(), "");
    }

    #[test]
    fn test_same_variant_merges() {
        let (store, toast) = setup();
        let mut req = request(9, Some("32"), Some("Black"));
        req.quantity = Some(2);
        add_to_cart(&store, &toast, req.clone()).unwrap();
        let cart = add_to_cart(&store, &toast, req).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 4);
        assert_eq!(cart.totals.subtotal.amount(), 4 * 3999);
        assert!(cart.totals.shipping.is_zero());
    }

    #[test]
    fn test_unbounded_quantity_does_not_overflow() {
        let (store, toast) = setup();
        let mut req = request(9, Some("32"), Some("Black"));
        req.quantity = Some(u32::MAX);
        add_to_cart(&store, &toast, req.clone()).unwrap();
        let cart = add_to_cart(&store, &toast, req).unwrap();

        assert_eq!(cart.items[0].quantity, u32::MAX);
        assert_eq!(cart.totals.unit_count, u32::MAX);
        assert_eq!(
            cart.totals.subtotal.amount(),
            3999 * i64::from(u32::MAX)
        );
        assert_eq!(get_cart(&store).totals, cart.totals);
        assert_eq!(store.with_store(|s| s.cart_count()), u32::MAX);
    }

    #[test]
    fn test_update_remove_and_clear() {
        let (store, toast) = setup();
        add_to_cart(&store, &toast, request(1, Some("M"), Some("White"))).unwrap();
        add_to_cart(&store, &toast, request(14, Some("One Size"), Some("Gold"))).unwrap();

        let cart = update_cart_item(&store, 1, 3).unwrap();
        assert_eq!(cart.totals.unit_count, 4);

        let err = update_cart_item(&store, 7, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        let cart = remove_from_cart(&store, 0).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product.id, ProductId(14));

        assert!(clear_cart(&store).items.is_empty());
    }
}
