//! # Catalog Module
//!
//! Listing filters, sorting, home page shelves and the admin read models.
//!
//! ## Listing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products (catalog order)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  category == filter (or All)  AND  min ≤ price ≤ max                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  name contains search (case-insensitive, optional)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stable sort: Default | PriceLowToHigh | PriceHighToLow | Rating        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here borrows the collections it reads and returns
//! references in a new `Vec`; nothing is cached.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Category, Order, OrderStatus, Product};
use crate::DEFAULT_MAX_LISTING_PRICE;

/// Products shown on each home page shelf.
pub const HOME_SHELF_SIZE: usize = 4;

/// "You may also like" entries on the detail page.
pub const RELATED_LIMIT: usize = 4;

/// Header search dropdown entries.
pub const SUGGESTION_LIMIT: usize = 5;

/// Minimum query length before the header search suggests anything.
pub const MIN_SUGGESTION_QUERY: usize = 2;

// =============================================================================
// Category Filter
// =============================================================================

/// Category selector of the listing page: everything, or one department.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive price window of the listing slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub const fn new(min: Money, max: Money) -> Self {
        PriceRange { min, max }
    }

    #[inline]
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange::new(Money::zero(), Money::from_minor(DEFAULT_MAX_LISTING_PRICE))
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Listing sort. All sorts are stable, so ties keep catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog (insertion) order.
    #[default]
    Default,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Highest rated first.
    Rating,
}

// =============================================================================
// Catalog Query
// =============================================================================

/// Everything the listing page can filter and sort by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl CatalogQuery {
    /// Query scoped to one category filter, everything else default.
    pub fn for_category(category: CategoryFilter) -> Self {
        CatalogQuery {
            category,
            ..Default::default()
        }
    }

    /// Applies the query to `products`, returning matches in display order.
    ///
    /// ## Example
    /// ```rust
    /// use stylehub_core::catalog::{CatalogQuery, SortOrder};
    ///
    /// let query = CatalogQuery { sort: SortOrder::PriceHighToLow, ..Default::default() };
    /// assert!(query.apply(&[]).is_empty());
    /// ```
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<&Product> = products
            .iter()
            .filter(|p| self.category.matches(p.category) && self.price_range.contains(p.price))
            .filter(|p| match &needle {
                Some(n) => name_contains(p, n),
                None => true,
            })
            .collect();

        match self.sort {
            SortOrder::Default => {}
            SortOrder::PriceLowToHigh => matched.sort_by_key(|p| p.price),
            SortOrder::PriceHighToLow => matched.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Rating => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }

        matched
    }
}

/// `needle` must already be lowercase.
fn name_contains(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
}

// =============================================================================
// Shelves and Lookups
// =============================================================================

/// Featured products in catalog order, at most `limit`.
pub fn featured(products: &[Product], limit: usize) -> Vec<&Product> {
    products.iter().filter(|p| p.featured).take(limit).collect()
}

/// Best sellers in catalog order, at most `limit`.
pub fn best_sellers(products: &[Product], limit: usize) -> Vec<&Product> {
    products.iter().filter(|p| p.best_seller).take(limit).collect()
}

/// Same-category products other than `product`, at most `limit`.
pub fn related<'a>(products: &'a [Product], product: &Product, limit: usize) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(limit)
        .collect()
}

/// Header search dropdown.
///
/// Empty until the trimmed query has at least two characters.
pub fn search_suggestions<'a>(products: &'a [Product], query: &str, limit: usize) -> Vec<&'a Product> {
    let query = query.trim();
    if query.chars().count() < MIN_SUGGESTION_QUERY {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| name_contains(p, &needle))
        .take(limit)
        .collect()
}

/// Admin product table search. An empty query matches everything.
pub fn admin_product_search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    products.iter().filter(|p| name_contains(p, &needle)).collect()
}

/// Number of products per category, in menu order.
pub fn category_counts(products: &[Product]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|c| (c, products.iter().filter(|p| p.category == c).count()))
        .collect()
}

// =============================================================================
// Orders
// =============================================================================

/// Status selector of the admin order table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

/// Admin order table: id or customer contains `query` (case-insensitive)
/// and status passes `status`.
pub fn filter_orders<'a>(orders: &'a [Order], query: &str, status: StatusFilter) -> Vec<&'a Order> {
    let needle = query.trim().to_lowercase();
    orders
        .iter()
        .filter(|o| {
            o.id.to_lowercase().contains(&needle) || o.customer.to_lowercase().contains(&needle)
        })
        .filter(|o| status.matches(o.status))
        .collect()
}

// =============================================================================
// Dashboard
// =============================================================================

/// Headline numbers of the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Σ totals of all orders that are not cancelled.
    pub total_revenue: Money,
    pub total_orders: usize,
    pub pending_orders: usize,
    pub total_products: usize,
    pub total_customers: usize,
    /// Order count per status, including zero counts.
    pub orders_by_status: BTreeMap<String, usize>,
}

impl DashboardStats {
    pub fn compute(products: &[Product], orders: &[Order], customer_count: usize) -> Self {
        let total_revenue = orders
            .iter()
            .filter(|o| o.status.counts_as_revenue())
            .map(|o| o.total)
            .sum();

        let orders_by_status = OrderStatus::ALL
            .iter()
            .map(|st| {
                let count = orders.iter().filter(|o| o.status == *st).count();
                (st.to_string(), count)
            })
            .collect();

        DashboardStats {
            total_revenue,
            total_orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            total_products: products.len(),
            total_customers: customer_count,
            orders_by_status,
        }
    }

    /// Share of orders in `status`, in whole percent.
    pub fn status_share(&self, status: OrderStatus) -> u32 {
        if self.total_orders == 0 {
            return 0;
        }
        let count = self
            .orders_by_status
            .get(status.as_str())
            .copied()
            .unwrap_or(0);
        ((count * 200 + self.total_orders) / (self.total_orders * 2)) as u32
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaymentMethod, ProductDraft, ProductId};
    use chrono::NaiveDate;

    fn product(id: u32, name: &str, price: i64, category: Category, rating: f32) -> Product {
        let mut p = ProductDraft::new(name, Money::from_minor(price), category)
            .into_new_product(ProductId(id));
        p.rating = rating;
        p
    }

    fn catalog() -> Vec<Product> {
        let mut items = vec![
            product(1, "Classic White T-Shirt", 1499, Category::Clothes, 4.5),
            product(2, "Floral Summer Dress", 3499, Category::Clothes, 4.8),
            product(3, "Urban Sneakers", 5999, Category::Shoes, 4.7),
            product(4, "Slim Fit Jeans", 2999, Category::Jeans, 4.6),
            product(5, "Leather Oxford", 8999, Category::Shoes, 4.9),
            product(6, "Leather Belt", 1299, Category::Accessories, 4.5),
        ];
        items[0].featured = true;
        items[2].featured = true;
        items[1].best_seller = true;
        items
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.0).collect()
    }

    fn order(id: &str, customer: &str, total: i64, status: OrderStatus) -> Order {
        Order {
            id: id.into(),
            customer: customer.into(),
            phone: "01700000000".into(),
            email: String::new(),
            address: "House 12, Road 5".into(),
            city: "Dhaka".into(),
            items: Vec::new(),
            total: Money::from_minor(total),
            shipping: Money::zero(),
            payment_method: PaymentMethod::Bkash,
            status,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        }
    }

    #[test]
    fn test_default_query_returns_catalog_order() {
        let products = catalog();
        let out = CatalogQuery::default().apply(&products);
        assert_eq!(ids(&out), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_category_and_price_are_conjunctive() {
        let products = catalog();
        let query = CatalogQuery {
            category: CategoryFilter::Only(Category::Shoes),
            price_range: PriceRange::new(Money::from_minor(0), Money::from_minor(6000)),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&products)), vec![3]);
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let products = catalog();
        let query = CatalogQuery {
            price_range: PriceRange::new(Money::from_minor(1499), Money::from_minor(2999)),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&products)), vec![1, 4]);
    }

    #[test]
    fn test_sorts() {
        let products = catalog();
        let mut query = CatalogQuery {
            sort: SortOrder::PriceLowToHigh,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&products)), vec![6, 1, 4, 2, 3, 5]);

        query.sort = SortOrder::PriceHighToLow;
        assert_eq!(ids(&query.apply(&products)), vec![5, 3, 2, 4, 1, 6]);

        // ties (1 and 6 at 4.5) keep catalog order
        query.sort = SortOrder::Rating;
        assert_eq!(ids(&query.apply(&products)), vec![5, 2, 3, 4, 1, 6]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = catalog();
        let query = CatalogQuery {
            search: Some("  LEATHER ".into()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&products)), vec![5, 6]);
    }

    #[test]
    fn test_shelves() {
        let products = catalog();
        assert_eq!(ids(&featured(&products, HOME_SHELF_SIZE)), vec![1, 3]);
        assert_eq!(ids(&best_sellers(&products, HOME_SHELF_SIZE)), vec![2]);
        assert_eq!(ids(&related(&products, &products[2], RELATED_LIMIT)), vec![5]);
        assert_eq!(ids(&featured(&products, 1)), vec![1]);
    }

    #[test]
    fn test_search_suggestions_need_two_chars() {
        let products = catalog();
        assert!(search_suggestions(&products, "l", SUGGESTION_LIMIT).is_empty());
        assert_eq!(ids(&search_suggestions(&products, "le", SUGGESTION_LIMIT)), vec![5, 6]);
        assert_eq!(search_suggestions(&products, "e", 10).len(), 0);
        assert_eq!(admin_product_search(&products, "").len(), products.len());
    }

    #[test]
    fn test_category_counts() {
        let counts = category_counts(&catalog());
        assert_eq!(
            counts,
            vec![
                (Category::Clothes, 2),
                (Category::Shoes, 2),
                (Category::Jeans, 1),
                (Category::Accessories, 1),
            ]
        );
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Shoes".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Shoes)
        );
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Jeans)).unwrap();
        assert_eq!(json, r#""Jeans""#);
        assert!(serde_json::from_str::<CategoryFilter>(r#""Hats""#).is_err());
    }

    #[test]
    fn test_filter_orders() {
        let orders = vec![
            order("ORD-001", "Rahim Ahmed", 4998, OrderStatus::Delivered),
            order("ORD-002", "Fatima Khan", 8999, OrderStatus::Pending),
            order("ORD-003", "Karim Hossain", 5998, OrderStatus::Pending),
        ];

        let all: Vec<&str> = filter_orders(&orders, "", StatusFilter::All)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(all, vec!["ORD-001", "ORD-002", "ORD-003"]);

        let by_name = filter_orders(&orders, "fatima", StatusFilter::All);
        assert_eq!(by_name.len(), 1);

        let by_id_and_status = filter_orders(&orders, "ord-00", StatusFilter::Only(OrderStatus::Pending));
        assert_eq!(by_id_and_status.len(), 2);

        assert_eq!("pending".parse::<StatusFilter>().unwrap(), StatusFilter::Only(OrderStatus::Pending));
    }

    #[test]
    fn test_dashboard_excludes_cancelled_revenue() {
        let orders = vec![
            order("ORD-001", "A", 1000, OrderStatus::Delivered),
            order("ORD-002", "B", 2000, OrderStatus::Cancelled),
            order("ORD-003", "C", 500, OrderStatus::Pending),
        ];
        let stats = DashboardStats::compute(&catalog(), &orders, 7);

        assert_eq!(stats.total_revenue.amount(), 1500);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.pending_orders, 1);
        assert_eq!(stats.total_products, 6);
        assert_eq!(stats.total_customers, 7);
        assert_eq!(stats.orders_by_status["cancelled"], 1);
        assert_eq!(stats.orders_by_status["shipped"], 0);
        assert_eq!(stats.status_share(OrderStatus::Pending), 33);
    }
}
