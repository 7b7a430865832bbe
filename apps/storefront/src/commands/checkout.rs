//! # Checkout Commands
//!
//! Order summary and order placement.
//!
//! ## Place Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checkout form + payment method                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  name / phone / address / method present? ── no ──► toast, VALIDATION   │
//! │       │                                                                 │
//! │  cart empty? ──────────────────────────────── yes ─► CART_ERROR         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Order { id: ORD-nnn, status: pending, total = subtotal + shipping }    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  prepended to orders, cart cleared                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use stylehub_core::{CartItem, CoreError, CustomerDetails, Order, PaymentMethod};

use crate::error::ApiResult;
use crate::state::{CartTotals, StoreState, ToastChannel};

/// A payment method as offered on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    pub method: PaymentMethod,
    pub label: &'static str,
}

/// Order summary column of the checkout page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub payment_options: Vec<PaymentOption>,
}

/// Checkout form submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(flatten)]
    pub details: CustomerDetails,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

/// Gets the checkout summary: cart lines, totals and payment options.
pub fn checkout_summary(store: &StoreState) -> CheckoutSummary {
    debug!("checkout_summary command");

    store.with_store(|s| CheckoutSummary {
        items: s.cart().items().to_vec(),
        totals: s.cart_totals(),
        payment_options: PaymentMethod::ALL
            .iter()
            .map(|&method| PaymentOption {
                method,
                label: method.label(),
            })
            .collect(),
    })
}

/// Places an order for the current cart.
///
/// ## Behavior
/// - Missing name, phone, address or payment method: toast
///   "Please fill all required fields", nothing changes
/// - Empty cart: CART_ERROR, nothing changes
/// - Otherwise the new order is returned, the order list grows by one at
///   the front and the cart is emptied
pub fn place_order(
    store: &StoreState,
    toast: &ToastChannel,
    request: PlaceOrderRequest,
) -> ApiResult<Order> {
    debug!(payment_method = ?request.payment_method, "place_order command");

    let result = store.with_store_mut(|s| s.place_order(request.details, request.payment_method));

    match result {
        Ok(order) => {
            info!(
                order_id = %order.id,
                total = order.total.amount(),
                items = order.items.len(),
                method = %order.payment_method,
                "Order placed"
            );
            Ok(order)
        }
        Err(e @ CoreError::Validation(_)) => {
            warn!(error = %e, "Checkout form incomplete");
            toast.show("Please fill all required fields");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart, AddToCartRequest};
    use crate::error::ErrorCode;
    use stylehub_core::{OrderStatus, ProductId};

    fn details() -> CustomerDetails {
        CustomerDetails {
            name: "Nusrat Jahan".to_string(),
            phone: "01711000000".to_string(),
            email: String::new(),
            address: "House 12, Road 5, Dhanmondi".to_string(),
            city: "Dhaka".to_string(),
        }
    }

    fn fill_cart(store: &StoreState, toast: &ToastChannel) {
        add_to_cart(
            store,
            toast,
            AddToCartRequest {
                product_id: ProductId(1),
                size: Some("M".to_string()),
                color: Some("White".to_string()),
                quantity: Some(2),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_summary_lists_payment_options() {
        let store = StoreState::default();
        let summary = checkout_summary(&store);
        assert!(summary.items.is_empty());
        assert_eq!(summary.payment_options.len(), 4);
        assert_eq!(summary.payment_options[3].method, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_place_order_under_threshold_pays_shipping() {
        let store = StoreState::default();
        let toast = ToastChannel::default();
        fill_cart(&store, &toast);
        let orders_before = store.with_store(|s| s.orders().len());

        let order = place_order(
            &store,
            &toast,
            PlaceOrderRequest {
                details: details(),
                payment_method: Some(PaymentMethod::Bkash),
            },
        )
        .unwrap();

        assert_eq!(order.shipping.amount(), 120);
        assert_eq!(order.total.amount(), 2 * 1499 + 120);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.id, format!("ORD-{:03}", orders_before + 1));
        assert!(get_cart(&store).items.is_empty());
        store.with_store(|s| assert_eq!(s.orders()[0].id, order.id));
    }

    #[test]
    fn test_missing_fields_toast() {
        let store = StoreState::default();
        let toast = ToastChannel::default();
        fill_cart(&store, &toast);

        let err = place_order(
            &store,
            &toast,
            PlaceOrderRequest {
                details: details(),
                payment_method: None,
            },
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(toast.current(), "Please fill all required fields");
        assert_eq!(get_cart(&store).items.len(), 1);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let store = StoreState::default();
        let toast = ToastChannel::default();

        let err = place_order(
            &store,
            &toast,
            PlaceOrderRequest {
                details: details(),
                payment_method: Some(PaymentMethod::CashOnDelivery),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(toast.current(), "");
    }

    #[test]
    fn test_request_from_form_json() {
        let request: PlaceOrderRequest = serde_json::from_str(
            r#"{"name":"Rafi","phone":"0188","address":"Mirpur","paymentMethod":"cod"}"#,
        )
        .unwrap();
        assert_eq!(request.details.name, "Rafi");
        assert!(request.details.city.is_empty());
        assert_eq!(request.payment_method, Some(PaymentMethod::CashOnDelivery));
    }
}
