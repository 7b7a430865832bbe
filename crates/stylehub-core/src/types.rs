//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │◄──│  product (copy) │──►│  items snapshot │       │
//! │  │  price          │   │  size, color    │   │  total/shipping │       │
//! │  │  sizes, colors  │   │  quantity       │   │  status, date   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Review       │   │    Customer     │   │  OrderStatus    │       │
//! │  │  rating 1-5     │   │  orders, spent  │   │  pending ──►    │       │
//! │  │  product_id?    │   │  active/inactive│   │  ... cancelled  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartItem` owns a full copy of its `Product`, and an `Order` owns copies
//! of its cart items. Editing or deleting a product later never rewrites a
//! cart line or a placed order.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::pricing;

// =============================================================================
// Identifiers
// =============================================================================

/// Catalog identifier. Unique, positive and never reassigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(pub u32);

impl ProductId {
    /// Returns the id following this one.
    #[inline]
    pub const fn next(self) -> Self {
        ProductId(self.0 + 1)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The fixed set of catalog departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Clothes,
    Shoes,
    Jeans,
    Accessories,
}

impl Category {
    /// Every category in menu order.
    pub const ALL: [Category; 4] = [
        Category::Clothes,
        Category::Shoes,
        Category::Jeans,
        Category::Accessories,
    ];

    /// Display name, also the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Clothes => "Clothes",
            Category::Shoes => "Shoes",
            Category::Jeans => "Jeans",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                value: wanted.to_string(),
                allowed: Category::ALL.iter().map(|c| c.to_string()).collect(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A named colour choice with its swatch hex code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorOption {
    pub name: String,
    pub hex: String,
}

impl ColorOption {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        ColorOption {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Selling price.
    pub price: Money,

    /// Pre-sale price, only used to show a discount.
    pub original_price: Option<Money>,

    pub category: Category,

    /// Ordered gallery tokens (at least one).
    pub images: Vec<String>,

    /// Icon token shown on cards.
    pub emoji: String,

    pub description: String,

    /// Size labels (letter sizes, shoe sizes, waist sizes or "One Size").
    pub sizes: Vec<String>,

    pub colors: Vec<ColorOption>,

    /// Average rating, 0-5 with one decimal.
    pub rating: f32,

    pub review_count: u32,

    /// Promotional label ("Sale", "New", ...).
    pub badge: Option<String>,

    pub in_stock: bool,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub best_seller: bool,
}

impl Product {
    /// Discount shown on the card, in whole percent.
    #[inline]
    pub fn discount_percent(&self) -> u32 {
        pricing::discount_percent(self.price, self.original_price)
    }

    /// Whether `size` is one of this product's size labels.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Whether `color` names one of this product's colour options.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c.name == color)
    }
}

// =============================================================================
// Product Draft (admin form)
// =============================================================================

/// Gallery tokens given to a new product when the form supplies none.
pub const DEFAULT_PRODUCT_IMAGES: [&str; 4] = [
    "from-gray-100 to-gray-200",
    "from-gray-200 to-gray-300",
    "from-gray-100 to-gray-300",
    "from-gray-200 to-gray-400",
];

/// Icon given to a new product when the form supplies none.
pub const DEFAULT_PRODUCT_EMOJI: &str = "👕";

/// Partial product coming from the admin product form.
///
/// `None` means "leave unchanged" on update and "use the default" on create.
/// The two optional product fields (`original_price`, `badge`) use a nested
/// option so a form can explicitly clear them with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub price: Option<Money>,
    #[serde(deserialize_with = "double_option")]
    #[ts(optional = nullable)]
    pub original_price: Option<Option<Money>>,
    pub category: Option<Category>,
    pub images: Option<Vec<String>>,
    pub emoji: Option<String>,
    pub description: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<ColorOption>>,
    #[serde(deserialize_with = "double_option")]
    #[ts(optional = nullable)]
    pub badge: Option<Option<String>>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
    pub best_seller: Option<bool>,
}

impl ProductDraft {
    /// Starts a draft for a brand new product.
    pub fn new(name: impl Into<String>, price: Money, category: Category) -> Self {
        ProductDraft {
            name: Some(name.into()),
            price: Some(price),
            category: Some(category),
            ..Default::default()
        }
    }

    /// Starts a draft that edits the product with `id`.
    pub fn edit(id: ProductId) -> Self {
        ProductDraft {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Merges every supplied field over `product`. The id never changes.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name.trim().to_string();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(images) = self.images.filter(|i| !i.is_empty()) {
            product.images = images;
        }
        if let Some(emoji) = self.emoji {
            product.emoji = emoji;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(sizes) = self.sizes {
            product.sizes = sizes;
        }
        if let Some(colors) = self.colors {
            product.colors = colors;
        }
        if let Some(badge) = self.badge {
            product.badge = normalize_badge(badge);
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
        if let Some(best_seller) = self.best_seller {
            product.best_seller = best_seller;
        }
    }

    /// Builds a new catalog entry with a fresh id and zeroed rating.
    ///
    /// Name and price must already have been validated; missing fields fall
    /// back to the admin form's blank-product defaults.
    pub fn into_new_product(self, id: ProductId) -> Product {
        let mut product = Product {
            id,
            name: String::new(),
            price: Money::zero(),
            original_price: None,
            category: Category::Clothes,
            images: DEFAULT_PRODUCT_IMAGES.iter().map(|s| s.to_string()).collect(),
            emoji: DEFAULT_PRODUCT_EMOJI.to_string(),
            description: String::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            rating: 0.0,
            review_count: 0,
            badge: None,
            in_stock: true,
            featured: false,
            best_seller: false,
        };
        self.apply_to(&mut product);
        product
    }
}

impl From<&Product> for ProductDraft {
    /// Pre-fills the admin form from an existing product.
    fn from(p: &Product) -> Self {
        ProductDraft {
            id: Some(p.id),
            name: Some(p.name.clone()),
            price: Some(p.price),
            original_price: Some(p.original_price),
            category: Some(p.category),
            images: Some(p.images.clone()),
            emoji: Some(p.emoji.clone()),
            description: Some(p.description.clone()),
            sizes: Some(p.sizes.clone()),
            colors: Some(p.colors.clone()),
            badge: Some(p.badge.clone()),
            in_stock: Some(p.in_stock),
            featured: Some(p.featured),
            best_seller: Some(p.best_seller),
        }
    }
}

/// An empty badge string from the form means "no badge".
fn normalize_badge(badge: Option<String>) -> Option<String> {
    badge
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
}

/// Distinguishes a missing field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// Two lines are the same line when product id, size and colour all match;
/// adding a matching line increases the quantity of the existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Frozen copy of the product at the time it was added.
    pub product: Product,
    pub quantity: u32,
    pub size: String,
    /// Colour name (one of `product.colors[].name`).
    pub color: String,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32, size: impl Into<String>, color: impl Into<String>) -> Self {
        CartItem {
            product,
            quantity,
            size: size.into(),
            color: color.into(),
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }

    /// Whether `other` occupies the same cart line (product, size, colour).
    pub fn same_line(&self, other: &CartItem) -> bool {
        self.product.id == other.product.id && self.size == other.size && self.color == other.color
    }
}

// =============================================================================
// Review
// =============================================================================

/// A customer review shown on the home page and moderated by the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Review {
    pub id: u32,
    /// Reviewer display name.
    pub name: String,
    pub avatar: String,
    /// Star rating, 1-5.
    pub rating: u8,
    pub text: String,
    /// Relative display date ("2 days ago"); never parsed.
    pub date: String,
    pub product_id: Option<ProductId>,
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfillment state of an order.
///
/// Listed in their natural order, but the admin panel may jump to any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status in fulfillment order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// The state every new order starts in.
    pub const fn initial() -> Self {
        OrderStatus::Pending
    }

    /// Cancelled orders are excluded from revenue.
    pub const fn counts_as_revenue(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::initial()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "status".to_string(),
                value: wanted.to_string(),
                allowed: OrderStatus::ALL.iter().map(|st| st.to_string()).collect(),
            })
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the shopper intends to pay. A tag only; nothing is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PaymentMethod {
    Bkash,
    Nagad,
    Rocket,
    /// Cash on delivery.
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Bkash,
        PaymentMethod::Nagad,
        PaymentMethod::Rocket,
        PaymentMethod::CashOnDelivery,
    ];

    /// Wire tag (`bkash`, `nagad`, `rocket`, `cod`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Bkash => "bkash",
            PaymentMethod::Nagad => "nagad",
            PaymentMethod::Rocket => "rocket",
            PaymentMethod::CashOnDelivery => "cod",
        }
    }

    /// Human label shown on the payment buttons.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Bkash => "bKash",
            PaymentMethod::Nagad => "Nagad",
            PaymentMethod::Rocket => "Rocket",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "payment method".to_string(),
                value: wanted.to_string(),
                allowed: PaymentMethod::ALL.iter().map(|m| m.to_string()).collect(),
            })
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order. Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// `ORD-001` style identifier.
    pub id: String,
    /// Customer name from the checkout form.
    pub customer: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    /// Cart contents at checkout time.
    pub items: Vec<CartItem>,
    /// Items subtotal plus shipping.
    pub total: Money,
    pub shipping: Money,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub date: NaiveDate,
}

impl Order {
    /// Items subtotal (total without shipping).
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.total - self.shipping
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Contact and delivery fields captured by the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
}

// =============================================================================
// Customer
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// A registered customer with lifetime aggregates.
///
/// Aggregates come from the seed data; placing an order does not update them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Lifetime order count.
    pub orders: u32,
    pub total_spent: Money,
    #[ts(as = "String")]
    pub join_date: NaiveDate,
    pub status: CustomerStatus,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        ProductDraft {
            sizes: Some(vec!["S".into(), "M".into()]),
            colors: Some(vec![ColorOption::new("White", "#FFFFFF")]),
            original_price: Some(Some(Money::from_minor(1999))),
            ..ProductDraft::new("Tee", Money::from_minor(1499), Category::Clothes)
        }
        .into_new_product(ProductId(1))
    }

    #[test]
    fn test_new_product_defaults() {
        let p = ProductDraft::new("Scarf", Money::from_minor(900), Category::Accessories)
            .into_new_product(ProductId(17));

        assert_eq!(p.id, ProductId(17));
        assert_eq!(p.rating, 0.0);
        assert_eq!(p.review_count, 0);
        assert_eq!(p.images.len(), DEFAULT_PRODUCT_IMAGES.len());
        assert_eq!(p.emoji, DEFAULT_PRODUCT_EMOJI);
        assert!(p.in_stock);
        assert!(p.badge.is_none());
    }

    #[test]
    fn test_draft_merges_only_supplied_fields() {
        let mut p = tee();
        ProductDraft {
            price: Some(Money::from_minor(1299)),
            badge: Some(Some("Sale".into())),
            ..ProductDraft::edit(ProductId(99))
        }
        .apply_to(&mut p);

        assert_eq!(p.id, ProductId(1)); // id never changes
        assert_eq!(p.name, "Tee");
        assert_eq!(p.price.amount(), 1299);
        assert_eq!(p.badge.as_deref(), Some("Sale"));
        assert_eq!(p.original_price, Some(Money::from_minor(1999)));
    }

    #[test]
    fn test_draft_can_clear_optional_fields() {
        let mut p = tee();
        ProductDraft {
            original_price: Some(None),
            badge: Some(Some("  ".into())),
            ..Default::default()
        }
        .apply_to(&mut p);

        assert_eq!(p.original_price, None);
        assert_eq!(p.badge, None);
    }

    #[test]
    fn test_draft_json_null_vs_missing() {
        let missing: ProductDraft = serde_json::from_str(r#"{"name":"X"}"#).unwrap();
        assert_eq!(missing.original_price, None);

        let cleared: ProductDraft = serde_json::from_str(r#"{"originalPrice":null}"#).unwrap();
        assert_eq!(cleared.original_price, Some(None));

        let set: ProductDraft = serde_json::from_str(r#"{"originalPrice":4999}"#).unwrap();
        assert_eq!(set.original_price, Some(Some(Money::from_minor(4999))));
    }

    #[test]
    fn test_product_size_and_color_membership() {
        let p = tee();
        assert!(p.has_size("M"));
        assert!(!p.has_size("XL"));
        assert!(p.has_color("White"));
        assert!(!p.has_color("#FFFFFF"));
    }

    #[test]
    fn test_cart_line_identity() {
        let a = CartItem::new(tee(), 1, "M", "White");
        let b = CartItem::new(tee(), 4, "M", "White");
        let c = CartItem::new(tee(), 1, "S", "White");

        assert!(a.same_line(&b));
        assert!(!a.same_line(&c));
        assert_eq!(b.line_total().amount(), 4 * 1499);
    }

    #[test]
    fn test_status_and_payment_parsing() {
        assert_eq!("Shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert!("lost".parse::<OrderStatus>().is_err());
        assert_eq!("cod".parse::<PaymentMethod>().unwrap(), PaymentMethod::CashOnDelivery);
        assert_eq!("accessories".parse::<Category>().unwrap(), Category::Accessories);
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            r#""cod""#
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            r#""processing""#
        );
        let json = serde_json::to_value(tee()).unwrap();
        assert_eq!(json["originalPrice"], 1999);
        assert_eq!(json["reviewCount"], 0);
    }
}
