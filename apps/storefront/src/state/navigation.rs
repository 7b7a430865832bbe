//! # Navigation State
//!
//! Which page the view layer should render, with its typed payload.
//!
//! ## Pages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Home ──► Products { category } ──► Product { product_id }              │
//! │                                          │                              │
//! │  Account      Admin              Cart ◄──┘ ──► Checkout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any page can be reached from any other page. There is no history stack;
//! navigating replaces the current page and its payload together.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use stylehub_core::catalog::CategoryFilter;
use stylehub_core::ProductId;

/// A page together with the data it needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum Page {
    #[default]
    Home,
    /// Product listing, pre-filtered to a category.
    Products {
        #[serde(default)]
        category: CategoryFilter,
    },
    /// Product detail.
    #[serde(rename_all = "camelCase")]
    Product { product_id: ProductId },
    Cart,
    Checkout,
    Account,
    Admin,
}

impl Page {
    /// Listing page showing every category.
    pub fn all_products() -> Self {
        Page::Products {
            category: CategoryFilter::All,
        }
    }

    /// Token the view layer switches on.
    pub const fn token(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Products { .. } => "products",
            Page::Product { .. } => "product",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::Account => "account",
            Page::Admin => "admin",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Current page holder.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current: Arc<Mutex<Page>>,
}

impl NavigationState {
    pub fn new() -> Self {
        NavigationState::default()
    }

    /// Replaces the current page. Returns the page that was showing.
    pub fn navigate_to(&self, page: Page) -> Page {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, page)
    }

    pub fn current(&self) -> Page {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylehub_core::Category;

    #[test]
    fn test_starts_at_home() {
        assert_eq!(NavigationState::new().current(), Page::Home);
    }

    #[test]
    fn test_navigate_replaces_page_and_payload() {
        let nav = NavigationState::new();
        let previous = nav.navigate_to(Page::Product {
            product_id: ProductId(2),
        });
        assert_eq!(previous, Page::Home);

        nav.navigate_to(Page::Products {
            category: CategoryFilter::Only(Category::Shoes),
        });
        assert_eq!(nav.current().token(), "products");

        nav.navigate_to(Page::Cart);
        assert_eq!(nav.current(), Page::Cart);
    }

    #[test]
    fn test_page_wire_format() {
        let json = serde_json::to_value(Page::Product {
            product_id: ProductId(7),
        })
        .unwrap();
        assert_eq!(json["page"], "product");
        assert_eq!(json["productId"], 7);

        let page: Page = serde_json::from_str(r#"{"page":"products"}"#).unwrap();
        assert_eq!(page, Page::all_products());

        let page: Page = serde_json::from_str(r#"{"page":"products","category":"Jeans"}"#).unwrap();
        assert_eq!(
            page,
            Page::Products {
                category: CategoryFilter::Only(Category::Jeans)
            }
        );
    }
}
