//! # Cart
//!
//! The shopping cart held inside the [`Store`](super::Store).
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Lifecycle                                  │
//! │                                                                         │
//! │   ┌─────────┐  add (new line)  ┌─────────┐  add (same line)            │
//! │   │  Empty  │ ───────────────► │ Lines   │ ─────────────┐              │
//! │   └─────────┘                  └────┬────┘ ◄────────────┘ qty += n     │
//! │        ▲                            │                                   │
//! │        │     clear / place order    │ set_quantity(i, q) / remove(i)    │
//! │        └────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are addressed by position, the way the cart page lists them.

use serde::{Deserialize, Serialize};
use stylehub_core::pricing::{cart_subtotal, cart_unit_count, ShippingPolicy};
use stylehub_core::{CartItem, CoreError, CoreResult, Money};

/// The shopping cart.
///
/// ## Invariants
/// - No two lines share the same (product id, size, colour)
/// - Every line has quantity ≥ 1
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a line, or merges it into the matching line by summing quantities.
    /// A merged quantity saturates at `u32::MAX`.
    ///
    /// Returns the position of the line that now holds the item.
    pub fn add(&mut self, item: CartItem) -> usize {
        if let Some(pos) = self.items.iter().position(|line| line.same_line(&item)) {
            let line = &mut self.items[pos];
            line.quantity = line.quantity.saturating_add(item.quantity.max(1));
            return pos;
        }

        let mut item = item;
        item.quantity = item.quantity.max(1);
        self.items.push(item);
        self.items.len() - 1
    }

    /// Removes the line at `index`.
    pub fn remove(&mut self, index: usize) -> CoreResult<CartItem> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Sets the quantity of the line at `index`, flooring it at 1.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> CoreResult<()> {
        self.check_index(index)?;
        self.items[index].quantity = quantity.max(1);
        Ok(())
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Σ quantity (the header badge).
    pub fn unit_count(&self) -> u32 {
        cart_unit_count(&self.items)
    }

    /// Σ price × quantity.
    pub fn subtotal(&self) -> Money {
        cart_subtotal(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index >= self.items.len() {
            return Err(CoreError::CartIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub unit_count: u32,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    /// Amount still needed for free shipping (zero once reached).
    pub free_shipping_remaining: Money,
}

impl CartTotals {
    pub fn compute(cart: &Cart, policy: &ShippingPolicy) -> Self {
        let subtotal = cart.subtotal();
        let shipping = policy.fee_for(subtotal);
        CartTotals {
            line_count: cart.line_count(),
            unit_count: cart.unit_count(),
            subtotal,
            shipping,
            total: subtotal + shipping,
            free_shipping_remaining: policy.remaining_for_free(subtotal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylehub_core::{Category, ProductDraft, ProductId};

    fn line(id: u32, price: i64, qty: u32, size: &str, color: &str) -> CartItem {
        let product = ProductDraft::new(format!("Product {}", id), Money::from_minor(price), Category::Clothes)
            .into_new_product(ProductId(id));
        CartItem::new(product, qty, size, color)
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add(line(1, 999, 2, "M", "Black"));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.unit_count(), 2);
        assert_eq!(cart.subtotal().amount(), 1998);
    }

    #[test]
    fn test_cart_add_same_line_increases_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(line(1, 999, 2, "M", "Black")), 0);
        assert_eq!(cart.add(line(1, 999, 3, "M", "Black")), 0);

        assert_eq!(cart.line_count(), 1); // Still one line
        assert_eq!(cart.unit_count(), 5);
    }

    #[test]
    fn test_cart_huge_quantities_saturate() {
        let mut cart = Cart::new();
        cart.add(line(1, 999, u32::MAX, "M", "Black"));
        cart.add(line(1, 999, 1, "M", "Black"));
        assert_eq!(cart.items()[0].quantity, u32::MAX);

        cart.add(line(1, 999, u32::MAX, "L", "Black"));
        assert_eq!(cart.unit_count(), u32::MAX);

        cart.add(line(2, i64::MAX, 2, "S", "Blue"));
        let totals = CartTotals::compute(&cart, &ShippingPolicy::default());
        assert_eq!(totals.subtotal.amount(), i64::MAX);
        assert_eq!(totals.total.amount(), i64::MAX);
        assert!(totals.shipping.is_zero());
    }

    #[test]
    fn test_cart_different_variant_is_new_line() {
        let mut cart = Cart::new();
        cart.add(line(1, 999, 1, "M", "Black"));
        assert_eq!(cart.add(line(1, 999, 1, "L", "Black")), 1);
        assert_eq!(cart.add(line(1, 999, 1, "M", "White")), 2);
        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn test_cart_set_quantity_floors_at_one() {
        let mut cart = Cart::new();
        cart.add(line(1, 500, 3, "M", "Black"));

        cart.set_quantity(0, 0).unwrap();
        assert_eq!(cart.items()[0].quantity, 1);

        cart.set_quantity(0, 7).unwrap();
        assert_eq!(cart.unit_count(), 7);
    }

    #[test]
    fn test_cart_out_of_range_leaves_cart_untouched() {
        let mut cart = Cart::new();
        cart.add(line(1, 500, 1, "M", "Black"));
        let before = cart.clone();

        assert_eq!(
            cart.remove(5),
            Err(CoreError::CartIndexOutOfRange { index: 5, len: 1 })
        );
        assert!(cart.set_quantity(1, 2).is_err());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(line(1, 999, 2, "M", "Black"));
        cart.add(line(2, 100, 1, "S", "Blue"));
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_totals_apply_shipping_policy() {
        let policy = ShippingPolicy::default();
        let mut cart = Cart::new();
        cart.add(line(1, 2500, 1, "M", "Black"));

        let totals = CartTotals::compute(&cart, &policy);
        assert_eq!(totals.shipping.amount(), 120);
        assert_eq!(totals.total.amount(), 2620);
        assert_eq!(totals.free_shipping_remaining.amount(), 2500);

        cart.add(line(1, 2500, 1, "M", "Black"));
        let totals = CartTotals::compute(&cart, &policy);
        assert!(totals.shipping.is_zero());
        assert_eq!(totals.total.amount(), 5000);
    }
}
