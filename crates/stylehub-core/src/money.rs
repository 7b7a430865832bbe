//! # Money Module
//!
//! Provides the `Money` type for handling prices and totals safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price in the storefront is a whole number of display units:     │
//! │                                                                         │
//! │    Classic White T-Shirt   1499   (shown as ৳1,499)                    │
//! │    Shipping                 120   (shown as ৳120)                      │
//! │                                                                         │
//! │  Sums, line totals and shipping are plain integer math that saturates  │
//! │  at the i64 bounds instead of overflowing.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stylehub_core::money::Money;
//!
//! let price = Money::from_minor(1499);
//! let line = price.multiply_quantity(2);
//! assert_eq!(line.amount(), 2998);
//! assert_eq!(line.to_string(), "৳2,998");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

/// Currency glyph used by [`Money`]'s `Display` implementation.
pub const CURRENCY_SYMBOL: &str = "৳";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor display units.
///
/// ## Design Decisions
/// - **i64 (signed)**: differences (savings, refunds) can go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare number for the view layer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor display units.
    #[inline]
    pub const fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount in minor display units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a cart quantity, saturating at the i64
    /// bounds.
    ///
    /// ## Example
    /// ```rust
    /// use stylehub_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(3499);
    /// assert_eq!(unit_price.multiply_quantity(3).amount(), 10497);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Formats the amount with thousands separators and no glyph.
    ///
    /// ```rust
    /// use stylehub_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(12999).grouped(), "12,999");
    /// assert_eq!(Money::from_minor(-1200).grouped(), "-1,200");
    /// ```
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the storefront prints prices (`৳1,499`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grouped = self.grouped();
        match grouped.strip_prefix('-') {
            Some(rest) => write!(f, "-{CURRENCY_SYMBOL}{rest}"),
            None => write!(f, "{CURRENCY_SYMBOL}{grouped}"),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1499).to_string(), "৳1,499");
        assert_eq!(Money::from_minor(120).to_string(), "৳120");
        assert_eq!(Money::from_minor(1_234_567).to_string(), "৳1,234,567");
        assert_eq!(Money::from_minor(0).to_string(), "৳0");
        assert_eq!(Money::from_minor(-1500).to_string(), "-৳1,500");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).amount(), 1500);
        assert_eq!((a - b).amount(), 500);
        assert_eq!((a * 3).amount(), 3000);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.amount(), 1500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_minor(i64::MAX - 10);

        assert_eq!((huge + Money::from_minor(100)).amount(), i64::MAX);
        assert_eq!(huge.multiply_quantity(u32::MAX).amount(), i64::MAX);
        assert_eq!((Money::from_minor(i64::MIN) - Money::from_minor(1)).amount(), i64::MIN);

        let mut running = huge;
        running += huge;
        assert_eq!(running.amount(), i64::MAX);

        let total: Money = [huge, huge, Money::from_minor(5)].iter().sum();
        assert_eq!(total.amount(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let lines = [Money::from_minor(1499), Money::from_minor(3499), Money::from_minor(2)];
        let total: Money = lines.iter().sum();
        assert_eq!(total.amount(), 5000);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_minor(1).is_positive());
        assert!(Money::from_minor(-1).is_negative());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::from_minor(8999)).unwrap();
        assert_eq!(json, "8999");
        let back: Money = serde_json::from_str("120").unwrap();
        assert_eq!(back, Money::from_minor(120));
    }
}
