//! # Wishlist Commands
//!
//! Heart-icon toggling and the saved-items view.

use serde::Serialize;
use tracing::debug;

use stylehub_core::ProductId;

use super::catalog::ProductDto;
use crate::state::StoreState;

/// Result of a heart-icon click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistToggle {
    pub product_id: ProductId,
    /// Whether the product is wishlisted after the click.
    pub wishlisted: bool,
    /// Wishlist size, for the header badge.
    pub count: usize,
}

/// Saved items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    /// Every saved id, including ids whose product has since been deleted.
    pub product_ids: Vec<ProductId>,
    /// Saved products still in the catalog, in id order.
    pub products: Vec<ProductDto>,
}

/// Adds the product to the wishlist, or removes it if already there.
pub fn toggle_wishlist(store: &StoreState, product_id: ProductId) -> WishlistToggle {
    debug!(%product_id, "toggle_wishlist command");

    store.with_store_mut(|s| {
        let wishlisted = s.toggle_wishlist(product_id);
        WishlistToggle {
            product_id,
            wishlisted,
            count: s.wishlist().len(),
        }
    })
}

/// Gets the saved items.
pub fn get_wishlist(store: &StoreState) -> WishlistResponse {
    debug!("get_wishlist command");

    store.with_store(|s| WishlistResponse {
        product_ids: s.wishlist().iter().copied().collect(),
        products: s
            .wishlist()
            .iter()
            .filter_map(|id| s.product(*id))
            .map(|p| ProductDto::from_store(s, p))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let store = StoreState::default();

        let first = toggle_wishlist(&store, ProductId(5));
        assert!(first.wishlisted);
        assert_eq!(first.count, 1);

        let second = toggle_wishlist(&store, ProductId(5));
        assert!(!second.wishlisted);
        assert_eq!(second.count, 0);
        assert!(get_wishlist(&store).product_ids.is_empty());
    }

    #[test]
    fn test_wishlist_lists_existing_products() {
        let store = StoreState::default();
        toggle_wishlist(&store, ProductId(12));
        toggle_wishlist(&store, ProductId(3));
        store.with_store_mut(|s| s.delete_product(ProductId(12)));

        let wishlist = get_wishlist(&store);
        assert_eq!(wishlist.product_ids, vec![ProductId(3), ProductId(12)]);
        assert_eq!(wishlist.products.len(), 1);
        assert_eq!(wishlist.products[0].product.id, ProductId(3));
        assert!(wishlist.products[0].in_wishlist);
    }
}
