//! # Pricing Module
//!
//! Shipping fee policy, cart sums and discount display math.
//!
//! ## Checkout Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart lines ──► subtotal = Σ price × quantity                           │
//! │                    │                                                    │
//! │                    ├── subtotal ≥ 5000 ──► shipping = 0                 │
//! │                    └── subtotal < 5000 ──► shipping = 120               │
//! │                                                                         │
//! │  total = subtotal + shipping                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::CartItem;
use crate::{FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD};

// =============================================================================
// Shipping Policy
// =============================================================================

/// Flat-rate shipping with a free-shipping threshold.
///
/// The threshold is inclusive: a subtotal of exactly the threshold ships free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPolicy {
    pub free_threshold: Money,
    pub flat_fee: Money,
}

impl ShippingPolicy {
    pub const fn new(free_threshold: Money, flat_fee: Money) -> Self {
        ShippingPolicy {
            free_threshold,
            flat_fee,
        }
    }

    /// Shipping fee for an items subtotal.
    #[inline]
    pub fn fee_for(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_threshold {
            Money::zero()
        } else {
            self.flat_fee
        }
    }

    /// How much more the shopper must add to qualify for free shipping.
    pub fn remaining_for_free(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_threshold {
            Money::zero()
        } else {
            self.free_threshold - subtotal
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy::new(
            Money::from_minor(FREE_SHIPPING_THRESHOLD),
            Money::from_minor(FLAT_SHIPPING_FEE),
        )
    }
}

// =============================================================================
// Cart Sums
// =============================================================================

/// Σ price × quantity over all lines.
pub fn cart_subtotal(items: &[CartItem]) -> Money {
    items.iter().map(CartItem::line_total).sum()
}

/// Σ quantity over all lines (the header badge number), saturating at
/// `u32::MAX`.
pub fn cart_unit_count(items: &[CartItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |count, item| count.saturating_add(item.quantity))
}

// =============================================================================
// Discounts
// =============================================================================

/// Whole-percent discount of `price` against `original_price`.
///
/// Rounds half up. Zero when there is no original price or it is not above
/// the selling price.
///
/// ```rust
/// use stylehub_core::money::Money;
/// use stylehub_core::pricing::discount_percent;
///
/// let pct = discount_percent(Money::from_minor(3499), Some(Money::from_minor(4999)));
/// assert_eq!(pct, 30);
/// assert_eq!(discount_percent(Money::from_minor(3499), None), 0);
/// ```
pub fn discount_percent(price: Money, original_price: Option<Money>) -> u32 {
    let Some(original) = original_price else {
        return 0;
    };
    if original <= price || !original.is_positive() {
        return 0;
    }

    let saved = i128::from((original - price).amount());
    let orig = i128::from(original.amount());
    // round(saved / orig * 100) in integer math, widened so huge prices fit
    let pct = (saved * 200 + orig) / (orig * 2);
    u32::try_from(pct).unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ProductDraft, ProductId};

    fn line(price: i64, qty: u32) -> CartItem {
        let product = ProductDraft::new("Item", Money::from_minor(price), Category::Clothes)
            .into_new_product(ProductId(1));
        CartItem::new(product, qty, "M", "Black")
    }

    #[test]
    fn test_shipping_boundary_is_inclusive() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(Money::from_minor(4999)).amount(), 120);
        assert_eq!(policy.fee_for(Money::from_minor(5000)).amount(), 0);
        assert_eq!(policy.fee_for(Money::from_minor(12000)).amount(), 0);
        assert_eq!(policy.fee_for(Money::zero()).amount(), 120);
    }

    #[test]
    fn test_remaining_for_free() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.remaining_for_free(Money::from_minor(4200)).amount(), 800);
        assert!(policy.remaining_for_free(Money::from_minor(5000)).is_zero());
    }

    #[test]
    fn test_cart_sums() {
        let items = vec![line(1000, 2), line(500, 1)];
        assert_eq!(cart_subtotal(&items).amount(), 2500);
        assert_eq!(cart_unit_count(&items), 3);
    }

    #[test]
    fn test_cart_sums_saturate() {
        let items = vec![line(i64::MAX / 2, u32::MAX), line(1, u32::MAX)];
        assert_eq!(cart_unit_count(&items), u32::MAX);
        assert_eq!(cart_subtotal(&items).amount(), i64::MAX);
        assert!(cart_subtotal(&[]).is_zero());
    }

    #[test]
    fn test_discount_with_huge_prices() {
        let pct = discount_percent(Money::from_minor(i64::MAX / 2), Some(Money::from_minor(i64::MAX)));
        assert_eq!(pct, 50);
    }

    #[test]
    fn test_discount_rounding() {
        let p = |v| Money::from_minor(v);
        // 1500 / 4999 = 30.006%
        assert_eq!(discount_percent(p(3499), Some(p(4999))), 30);
        // 200 / 2999 = 6.67%
        assert_eq!(discount_percent(p(2799), Some(p(2999))), 7);
        // exactly half rounds up
        assert_eq!(discount_percent(p(199), Some(p(200))), 1);
        assert_eq!(discount_percent(p(5000), Some(p(5000))), 0);
        assert_eq!(discount_percent(p(6000), Some(p(5000))), 0);
    }
}
