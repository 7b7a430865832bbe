//! # stylehub-core: Pure Storefront Logic
//!
//! This crate holds the domain model and every pure computation of the
//! StyleHub storefront. It has zero I/O dependencies: no clock, no timers,
//! no logging, no shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     StyleHub Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View Layer (out of tree)                     │   │
//! │  │   Home ──► Listing ──► Detail ──► Cart ──► Checkout ──► Admin   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (state + commands)              │   │
//! │  │     StoreState, NavigationState, ToastChannel, AdminState       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stylehub-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │   │  types  │ │  money  │ │ pricing │ │ catalog │ │validation│  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, Order, Customer, Review)
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Shipping fee policy and cart sums
//! - [`catalog`] - Listing filters, sorting and shelves
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for product and checkout forms
//!
//! ## Example Usage
//!
//! ```rust
//! use stylehub_core::money::Money;
//! use stylehub_core::pricing::ShippingPolicy;
//!
//! let policy = ShippingPolicy::default();
//! assert_eq!(policy.fee_for(Money::from_minor(4999)), Money::from_minor(120));
//! assert_eq!(policy.fee_for(Money::from_minor(5000)), Money::zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Subtotal at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: i64 = 5000;

/// Flat shipping fee charged below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: i64 = 120;

/// Upper bound of the listing page's default price slider.
pub const DEFAULT_MAX_LISTING_PRICE: i64 = 15000;

/// Prefix of generated order identifiers (`ORD-008`).
pub const ORDER_ID_PREFIX: &str = "ORD-";
