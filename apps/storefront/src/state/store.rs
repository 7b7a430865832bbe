//! # Store State
//!
//! The single owner of the storefront's collections: products, orders,
//! customers, reviews, the cart and the wishlist.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command reads or mutates it
//! 2. Each mutation must run to completion before the next one starts
//! 3. Commands may be invoked from more than one thread
//!
//! ## Mutation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper                          Admin                                 │
//! │  ───────                          ─────                                 │
//! │  add_to_cart ──────► cart         upsert_product ──► products           │
//! │  update_quantity ──► cart         delete_product ──► products           │
//! │  remove_from_cart ─► cart         delete_review ───► reviews            │
//! │  toggle_wishlist ──► wishlist     update_order_status ──► orders        │
//! │  place_order ──────► orders + cart (cleared)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Derived values (cart totals, shipping, dashboard numbers) are recomputed
//! from the collections on every read.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use stylehub_core::catalog::DashboardStats;
use stylehub_core::pricing::ShippingPolicy;
use stylehub_core::validation::{validate_checkout, validate_product_fields};
use stylehub_core::{
    CartItem, CoreError, CoreResult, Customer, CustomerDetails, Money, Order, OrderStatus,
    PaymentMethod, Product, ProductDraft, ProductId, Review, ORDER_ID_PREFIX,
};

use super::cart::{Cart, CartTotals};
use crate::seed;

/// Whether an upsert created a new product or merged into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// All storefront collections plus the shipping policy that prices the cart.
#[derive(Debug, Clone)]
pub struct Store {
    products: Vec<Product>,
    orders: Vec<Order>,
    customers: Vec<Customer>,
    reviews: Vec<Review>,
    cart: Cart,
    wishlist: BTreeSet<ProductId>,
    shipping: ShippingPolicy,
}

impl Store {
    /// Creates a store over the given collections with an empty cart and
    /// wishlist.
    pub fn new(
        products: Vec<Product>,
        orders: Vec<Order>,
        customers: Vec<Customer>,
        reviews: Vec<Review>,
    ) -> Self {
        Store {
            products,
            orders,
            customers,
            reviews,
            cart: Cart::new(),
            wishlist: BTreeSet::new(),
            shipping: ShippingPolicy::default(),
        }
    }

    /// Creates a store holding the seed catalog, orders, customers and reviews.
    pub fn seeded() -> Self {
        Store::new(
            seed::products(),
            seed::orders(),
            seed::customers(),
            seed::reviews(),
        )
    }

    /// Replaces the shipping policy (from configuration).
    pub fn with_shipping(mut self, shipping: ShippingPolicy) -> Self {
        self.shipping = shipping;
        self
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Orders, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn wishlist(&self) -> &BTreeSet<ProductId> {
        &self.wishlist
    }

    pub fn is_wishlisted(&self, id: ProductId) -> bool {
        self.wishlist.contains(&id)
    }

    pub fn shipping_policy(&self) -> &ShippingPolicy {
        &self.shipping
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Σ price × quantity over the cart.
    pub fn cart_total(&self) -> Money {
        self.cart.subtotal()
    }

    /// Σ quantity over the cart.
    pub fn cart_count(&self) -> u32 {
        self.cart.unit_count()
    }

    /// Shipping fee for an items subtotal under the current policy.
    pub fn shipping_fee(&self, subtotal: Money) -> Money {
        self.shipping.fee_for(subtotal)
    }

    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::compute(&self.cart, &self.shipping)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.products, &self.orders, self.customers.len())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds an item, merging into an existing (product, size, colour) line.
    ///
    /// Returns the position of the affected line.
    pub fn add_to_cart(&mut self, item: CartItem) -> usize {
        self.cart.add(item)
    }

    /// Removes the cart line at `index`.
    pub fn remove_from_cart(&mut self, index: usize) -> CoreResult<CartItem> {
        self.cart.remove(index)
    }

    /// Sets the quantity of the cart line at `index`; values below 1 become 1.
    pub fn update_quantity(&mut self, index: usize, quantity: u32) -> CoreResult<()> {
        self.cart.set_quantity(index, quantity)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Adds the id if absent, removes it if present.
    ///
    /// Returns whether the id is wishlisted afterwards.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> bool {
        if self.wishlist.remove(&id) {
            false
        } else {
            self.wishlist.insert(id);
            true
        }
    }

    // =========================================================================
    // Catalog Administration
    // =========================================================================

    /// Creates or updates a product from an admin form draft.
    ///
    /// ## Behavior
    /// - Draft id matches a product: supplied fields are merged over it
    /// - Draft id missing or unknown: a new product with id `max + 1`,
    ///   rating 0 and no reviews is appended
    /// - Effective name blank or price not positive: validation error,
    ///   nothing changes
    pub fn upsert_product(&mut self, draft: ProductDraft) -> CoreResult<(Product, SaveOutcome)> {
        let existing = draft
            .id
            .and_then(|id| self.products.iter().position(|p| p.id == id));

        match existing {
            Some(pos) => {
                let current = &self.products[pos];
                validate_product_fields(
                    draft.name.as_deref().or(Some(current.name.as_str())),
                    draft.price.or(Some(current.price)),
                )?;

                let product = &mut self.products[pos];
                draft.apply_to(product);
                Ok((product.clone(), SaveOutcome::Updated))
            }
            None => {
                validate_product_fields(draft.name.as_deref(), draft.price)?;

                let product = draft.into_new_product(self.next_product_id());
                self.products.push(product.clone());
                Ok((product, SaveOutcome::Created))
            }
        }
    }

    /// Removes the product with `id`. Cart lines keep their own copy.
    ///
    /// Returns whether a product was removed.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Removes the review with `id`. Returns whether a review was removed.
    pub fn delete_review(&mut self, id: u32) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|r| r.id != id);
        self.reviews.len() != before
    }

    /// Sets the status of order `order_id`. Any status may follow any other.
    ///
    /// Returns whether an order matched.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| o.id == order_id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => false,
        }
    }

    fn next_product_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(ProductId(1), ProductId::next)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Places an order for the current cart, dated today (UTC).
    pub fn place_order(
        &mut self,
        details: CustomerDetails,
        payment_method: Option<PaymentMethod>,
    ) -> CoreResult<Order> {
        self.place_order_on(details, payment_method, Utc::now().date_naive())
    }

    /// Places an order for the current cart with an explicit order date.
    ///
    /// ## Checkout Flow
    /// ```text
    /// validate form ──► cart empty? ──► build order ──► prepend ──► clear cart
    ///      │                 │
    ///      └── Err ──────────┴── Err (orders and cart untouched)
    /// ```
    pub fn place_order_on(
        &mut self,
        details: CustomerDetails,
        payment_method: Option<PaymentMethod>,
        date: NaiveDate,
    ) -> CoreResult<Order> {
        let payment_method = validate_checkout(&details, payment_method)?;
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let subtotal = self.cart.subtotal();
        let shipping = self.shipping.fee_for(subtotal);
        let order = Order {
            id: self.next_order_id(),
            customer: details.name.trim().to_string(),
            phone: details.phone.trim().to_string(),
            email: details.email.trim().to_string(),
            address: details.address.trim().to_string(),
            city: details.city.trim().to_string(),
            items: self.cart.items().to_vec(),
            total: subtotal + shipping,
            shipping,
            payment_method,
            status: OrderStatus::initial(),
            date,
        };

        self.orders.insert(0, order.clone());
        self.cart.clear();
        Ok(order)
    }

    /// `ORD-{n:03}` with n = order count + 1, skipping ids already taken.
    fn next_order_id(&self) -> String {
        let mut n = self.orders.len() + 1;
        loop {
            let id = format!("{}{:03}", ORDER_ID_PREFIX, n);
            if self.order(&id).is_none() {
                return id;
            }
            n += 1;
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }
}

/// Shared store state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Store>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one command mutates the store at a time
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = store_state.with_store(|s| s.cart_totals());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|s| s.toggle_wishlist(ProductId(3)));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        StoreState::new(Store::seeded())
    }
}
