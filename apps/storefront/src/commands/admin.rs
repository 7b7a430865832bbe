//! # Admin Commands
//!
//! Commands behind the admin panel: login, dashboard, product table,
//! order table, customer list and review moderation.
//!
//! ## Session Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  admin_login(admin, admin123) ──► AdminSession.authenticated = true     │
//! │                                                                         │
//! │  dashboard / save_product / update_order_status / ...                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ensure_admin() ── not logged in ──► UNAUTHORIZED                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreState.with_store[_mut](...) ──► toast ──► response                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use stylehub_core::catalog::{self, DashboardStats, StatusFilter};
use stylehub_core::{
    CoreError, Customer, Order, OrderStatus, Product, ProductDraft, ProductId, Review,
};

use super::catalog::{to_dtos, ProductDto};
use crate::error::{ApiError, ApiResult};
use crate::state::{AdminSession, SaveOutcome, StoreState, ToastChannel};

// =============================================================================
// Session
// =============================================================================

/// Admin login form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Whether the admin panel is unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStatus {
    pub authenticated: bool,
}

/// Unlocks the admin panel.
///
/// A wrong pair is not an error: the response reports the session state and
/// a toast tells the user which credentials to use.
pub fn admin_login(
    session: &AdminSession,
    toast: &ToastChannel,
    request: LoginRequest,
) -> AdminStatus {
    debug!(username = %request.username, "admin_login command");

    if session.login(&request.username, &request.password) {
        info!("Admin logged in");
        toast.show("Welcome to Admin Panel!");
    } else {
        warn!(username = %request.username, "Admin login failed");
        toast.show("Wrong credentials! Use admin / admin123");
    }

    AdminStatus {
        authenticated: session.is_authenticated(),
    }
}

/// Locks the admin panel again.
pub fn admin_logout(session: &AdminSession) -> AdminStatus {
    debug!("admin_logout command");
    session.logout();
    AdminStatus {
        authenticated: false,
    }
}

fn ensure_admin(session: &AdminSession) -> ApiResult<()> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(ApiError::unauthorized())
    }
}

// =============================================================================
// Dashboard
// =============================================================================

/// Headline numbers plus the latest orders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    /// First five orders (newest first).
    pub recent_orders: Vec<Order>,
}

/// Number of orders shown on the dashboard.
pub const RECENT_ORDERS: usize = 5;

pub fn dashboard(session: &AdminSession, store: &StoreState) -> ApiResult<DashboardResponse> {
    debug!("dashboard command");
    ensure_admin(session)?;

    Ok(store.with_store(|s| DashboardResponse {
        stats: s.dashboard_stats(),
        recent_orders: s.orders().iter().take(RECENT_ORDERS).cloned().collect(),
    }))
}

// =============================================================================
// Products
// =============================================================================

/// Admin product table. An empty query lists the whole catalog.
pub fn search_products(
    session: &AdminSession,
    store: &StoreState,
    query: &str,
) -> ApiResult<Vec<ProductDto>> {
    debug!(query = %query, "admin search_products command");
    ensure_admin(session)?;

    Ok(store.with_store(|s| to_dtos(s, &catalog::admin_product_search(s.products(), query))))
}

/// Pre-filled product form for the edit modal.
pub fn edit_product_form(
    session: &AdminSession,
    store: &StoreState,
    product_id: ProductId,
) -> ApiResult<ProductDraft> {
    debug!(%product_id, "edit_product_form command");
    ensure_admin(session)?;

    let draft = store.with_store(|s| s.product(product_id).map(ProductDraft::from));
    Ok(draft.ok_or(CoreError::ProductNotFound(product_id))?)
}

/// Saves the product form.
///
/// ## Behavior
/// - Draft without an id (or with an unknown id): new product, toast "Product added!"
/// - Draft with a known id: fields merged, toast "Product updated!"
/// - Blank name or non-positive price: toast "Name and Price are required!"
pub fn save_product(
    session: &AdminSession,
    store: &StoreState,
    toast: &ToastChannel,
    draft: ProductDraft,
) -> ApiResult<Product> {
    debug!(id = ?draft.id, name = ?draft.name, "save_product command");
    ensure_admin(session)?;

    match store.with_store_mut(|s| s.upsert_product(draft)) {
        Ok((product, outcome)) => {
            info!(product_id = %product.id, name = %product.name, ?outcome, "Product saved");
            toast.show(match outcome {
                SaveOutcome::Created => "Product added!",
                SaveOutcome::Updated => "Product updated!",
            });
            Ok(product)
        }
        Err(e @ CoreError::Validation(_)) => {
            warn!(error = %e, "Product form rejected");
            toast.show("Name and Price are required!");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes a product. Returns whether one was removed; an unknown id is a
/// silent no-op.
pub fn delete_product(
    session: &AdminSession,
    store: &StoreState,
    toast: &ToastChannel,
    product_id: ProductId,
) -> ApiResult<bool> {
    debug!(%product_id, "delete_product command");
    ensure_admin(session)?;

    let removed = store.with_store_mut(|s| s.delete_product(product_id));
    if removed {
        info!(%product_id, "Product deleted");
        toast.show("Product deleted!");
    }
    Ok(removed)
}

// =============================================================================
// Orders
// =============================================================================

/// Admin order table filtered by id/customer text and status.
pub fn list_orders(
    session: &AdminSession,
    store: &StoreState,
    query: &str,
    status: StatusFilter,
) -> ApiResult<Vec<Order>> {
    debug!(query = %query, %status, "list_orders command");
    ensure_admin(session)?;

    Ok(store.with_store(|s| {
        catalog::filter_orders(s.orders(), query, status)
            .into_iter()
            .cloned()
            .collect()
    }))
}

/// Order detail view.
pub fn get_order(session: &AdminSession, store: &StoreState, order_id: &str) -> ApiResult<Order> {
    debug!(order_id, "get_order command");
    ensure_admin(session)?;

    let order = store.with_store(|s| s.order(order_id).cloned());
    Ok(order.ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()))?)
}

/// Moves an order to `status`. Any status may follow any other.
///
/// Returns the updated order, or `None` when no order has `order_id`.
pub fn update_order_status(
    session: &AdminSession,
    store: &StoreState,
    toast: &ToastChannel,
    order_id: &str,
    status: OrderStatus,
) -> ApiResult<Option<Order>> {
    debug!(order_id, %status, "update_order_status command");
    ensure_admin(session)?;

    let order = store.with_store_mut(|s| {
        if s.update_order_status(order_id, status) {
            s.order(order_id).cloned()
        } else {
            None
        }
    });

    if order.is_some() {
        info!(order_id, %status, "Order status updated");
        toast.show(format!("Order {} updated to {}", order_id, status));
    }
    Ok(order)
}

// =============================================================================
// Customers & Reviews
// =============================================================================

pub fn list_customers(session: &AdminSession, store: &StoreState) -> ApiResult<Vec<Customer>> {
    debug!("list_customers command");
    ensure_admin(session)?;
    Ok(store.with_store(|s| s.customers().to_vec()))
}

pub fn list_reviews(session: &AdminSession, store: &StoreState) -> ApiResult<Vec<Review>> {
    debug!("list_reviews command");
    ensure_admin(session)?;
    Ok(store.with_store(|s| s.reviews().to_vec()))
}

/// Deletes a review. Returns whether one was removed.
pub fn delete_review(
    session: &AdminSession,
    store: &StoreState,
    toast: &ToastChannel,
    review_id: u32,
) -> ApiResult<bool> {
    debug!(review_id, "delete_review command");
    ensure_admin(session)?;

    let removed = store.with_store_mut(|s| s.delete_review(review_id));
    if removed {
        info!(review_id, "Review deleted");
        toast.show("Review deleted!");
    }
    Ok(removed)
}
