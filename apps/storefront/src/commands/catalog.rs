//! # Catalog Commands
//!
//! Commands behind the home page, the listing page, the product detail page
//! and the header search.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View: category menu / price slider / sort dropdown                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products(CatalogQuery)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreState.with_store(|s| query.apply(s.products()))                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductDto[] (with discount and wishlist flag) + category counts       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use stylehub_core::catalog::{
    self, CatalogQuery, CategoryFilter, HOME_SHELF_SIZE, RELATED_LIMIT, SUGGESTION_LIMIT,
};
use stylehub_core::{Category, Product, ProductId, Review};

use crate::error::{ApiError, ApiResult};
use crate::state::{ConfigState, Store, StoreState};

/// Product DTO for the view layer.
///
/// Carries the product plus the per-shopper display values the cards need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(flatten)]
    pub product: Product,
    /// Rounded discount against the original price (0 when none).
    pub discount_percent: u32,
    pub in_wishlist: bool,
}

impl ProductDto {
    pub fn from_store(store: &Store, product: &Product) -> Self {
        ProductDto {
            discount_percent: product.discount_percent(),
            in_wishlist: store.is_wishlisted(product.id),
            product: product.clone(),
        }
    }
}

pub(crate) fn to_dtos(store: &Store, products: &[&Product]) -> Vec<ProductDto> {
    products
        .iter()
        .map(|p| ProductDto::from_store(store, p))
        .collect()
}

/// Products per category, for the category menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

fn category_counts(store: &Store) -> Vec<CategoryCount> {
    catalog::category_counts(store.products())
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

// =============================================================================
// Home
// =============================================================================

/// Everything the home page renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub featured: Vec<ProductDto>,
    pub best_sellers: Vec<ProductDto>,
    pub categories: Vec<CategoryCount>,
    pub reviews: Vec<Review>,
}

/// Gets the home page shelves: first four featured, first four best sellers.
pub fn home_shelves(store: &StoreState) -> HomeResponse {
    debug!("home_shelves command");

    store.with_store(|s| HomeResponse {
        featured: to_dtos(s, &catalog::featured(s.products(), HOME_SHELF_SIZE)),
        best_sellers: to_dtos(s, &catalog::best_sellers(s.products(), HOME_SHELF_SIZE)),
        categories: category_counts(s),
        reviews: s.reviews().to_vec(),
    })
}

// =============================================================================
// Listing
// =============================================================================

/// Listing page result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
    /// Number of products matching the query.
    pub total: usize,
    /// Size of the whole catalog (the "All" entry of the menu).
    pub catalog_size: usize,
    pub categories: Vec<CategoryCount>,
}

/// The query a fresh listing page starts with, using the configured price
/// window.
pub fn default_query(config: &ConfigState, category: CategoryFilter) -> CatalogQuery {
    CatalogQuery {
        price_range: config.default_price_range(),
        ..CatalogQuery::for_category(category)
    }
}

/// Filters and sorts the catalog.
///
/// ## Arguments
/// * `query` - Category, inclusive price range, optional name search, sort
///
/// ## Returns
/// Matching products in display order.
pub fn list_products(store: &StoreState, query: CatalogQuery) -> ProductListResponse {
    debug!(
        category = %query.category,
        min = query.price_range.min.amount(),
        max = query.price_range.max.amount(),
        sort = ?query.sort,
        "list_products command"
    );

    store.with_store(|s| {
        let products = to_dtos(s, &query.apply(s.products()));
        ProductListResponse {
            total: products.len(),
            products,
            catalog_size: s.products().len(),
            categories: category_counts(s),
        }
    })
}

// =============================================================================
// Detail
// =============================================================================

/// Product detail page payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    pub product: ProductDto,
    pub related: Vec<ProductDto>,
    pub reviews: Vec<Review>,
}

/// Gets a product with its related products and reviews.
pub fn get_product(store: &StoreState, product_id: ProductId) -> ApiResult<ProductDetailResponse> {
    debug!(%product_id, "get_product command");

    store.with_store(|s| {
        let product = s
            .product(product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;

        Ok::<_, ApiError>(ProductDetailResponse {
            product: ProductDto::from_store(s, product),
            related: to_dtos(s, &catalog::related(s.products(), product, RELATED_LIMIT)),
            reviews: s
                .reviews()
                .iter()
                .filter(|r| r.product_id == Some(product_id))
                .cloned()
                .collect(),
        })
    })
}

/// Same-category products for the "You may also like" row.
pub fn related_products(store: &StoreState, product_id: ProductId) -> ApiResult<Vec<ProductDto>> {
    debug!(%product_id, "related_products command");

    store.with_store(|s| {
        let product = s
            .product(product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;
        Ok::<_, ApiError>(to_dtos(
            s,
            &catalog::related(s.products(), product, RELATED_LIMIT),
        ))
    })
}

// =============================================================================
// Header Search
// =============================================================================

/// Header search dropdown: up to five name matches once two characters are
/// typed.
pub fn search_suggestions(store: &StoreState, query: &str) -> Vec<ProductDto> {
    debug!(query = %query, "search_suggestions command");

    store.with_store(|s| {
        to_dtos(
            s,
            &catalog::search_suggestions(s.products(), query, SUGGESTION_LIMIT),
        )
    })
}
