//! # Seed Data
//!
//! The fixed catalog, reviews, orders and customers every session starts
//! with. There is no persistence, so this is also what a restart returns to.
//!
//! ## Contents
//! - 16 products across the four categories
//! - 6 reviews
//! - 7 historical orders (`ORD-001`..`ORD-007`, no line items)
//! - 7 customers

use chrono::NaiveDate;
use stylehub_core::{
    Category, ColorOption, Customer, CustomerStatus, Money, Order, OrderStatus, PaymentMethod,
    Product, ProductId, Review,
};

// =============================================================================
// Products
// =============================================================================

struct ProductSeed {
    id: u32,
    name: &'static str,
    price: i64,
    original_price: Option<i64>,
    category: Category,
    images: [&'static str; 4],
    emoji: &'static str,
    description: &'static str,
    sizes: &'static [&'static str],
    colors: &'static [(&'static str, &'static str)],
    rating: f32,
    review_count: u32,
    badge: Option<&'static str>,
    featured: bool,
    best_seller: bool,
}

const LETTER_SIZES: &[&str] = &["XS", "S", "M", "L", "XL"];
const WAIST_SIZES: &[&str] = &["28", "30", "32", "34", "36"];
const ONE_SIZE: &[&str] = &["One Size"];

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: 1,
        name: "Classic White T-Shirt",
        price: 1499,
        original_price: None,
        category: Category::Clothes,
        images: ["from-gray-100 via-white to-gray-200", "from-stone-100 to-gray-200", "from-gray-50 to-stone-200", "from-neutral-100 to-gray-300"],
        emoji: "👕",
        description: "Premium cotton crew-neck t-shirt with a relaxed fit. Perfect for everyday wear.",
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        colors: &[("White", "#FFFFFF"), ("Black", "#1a1a1a"), ("Gray", "#9ca3af")],
        rating: 4.5,
        review_count: 128,
        badge: Some("New"),
        featured: true,
        best_seller: false,
    },
    ProductSeed {
        id: 2,
        name: "Floral Summer Dress",
        price: 3499,
        original_price: Some(4999),
        category: Category::Clothes,
        images: ["from-pink-100 to-rose-200", "from-rose-100 to-pink-200", "from-fuchsia-100 to-pink-200", "from-pink-200 to-rose-300"],
        emoji: "👗",
        description: "Beautiful floral print midi dress with a flattering A-line silhouette.",
        sizes: LETTER_SIZES,
        colors: &[("Pink Floral", "#f9a8d4"), ("Blue Floral", "#93c5fd")],
        rating: 4.8,
        review_count: 256,
        badge: Some("Sale"),
        featured: true,
        best_seller: true,
    },
    ProductSeed {
        id: 3,
        name: "Leather Biker Jacket",
        price: 8999,
        original_price: None,
        category: Category::Clothes,
        images: ["from-gray-700 to-gray-900", "from-gray-600 to-gray-800", "from-zinc-700 to-zinc-900", "from-neutral-700 to-neutral-900"],
        emoji: "🧥",
        description: "Genuine leather biker jacket with asymmetric zip closure.",
        sizes: &["S", "M", "L", "XL"],
        colors: &[("Black", "#1a1a1a"), ("Brown", "#78350f")],
        rating: 4.7,
        review_count: 89,
        badge: None,
        featured: false,
        best_seller: true,
    },
    ProductSeed {
        id: 4,
        name: "Silk Blouse",
        price: 4499,
        original_price: Some(5499),
        category: Category::Clothes,
        images: ["from-sky-100 to-blue-200", "from-blue-100 to-sky-200", "from-cyan-100 to-sky-200", "from-sky-50 to-blue-100"],
        emoji: "👚",
        description: "Luxurious silk blouse with a relaxed fit and elegant drape.",
        sizes: LETTER_SIZES,
        colors: &[("Sky Blue", "#7dd3fc"), ("Ivory", "#fffff0"), ("Blush", "#fda4af")],
        rating: 4.6,
        review_count: 67,
        badge: Some("Sale"),
        featured: true,
        best_seller: false,
    },
    ProductSeed {
        id: 5,
        name: "Running Sneakers",
        price: 5999,
        original_price: None,
        category: Category::Shoes,
        images: ["from-emerald-100 to-teal-200", "from-teal-100 to-emerald-200", "from-green-100 to-teal-200", "from-emerald-200 to-teal-300"],
        emoji: "👟",
        description: "Lightweight running sneakers with responsive cushioning.",
        sizes: &["36", "37", "38", "39", "40", "41", "42", "43", "44"],
        colors: &[("White/Green", "#10b981"), ("Black/Red", "#ef4444")],
        rating: 4.4,
        review_count: 203,
        badge: None,
        featured: true,
        best_seller: false,
    },
    ProductSeed {
        id: 6,
        name: "Elegant Stiletto Heels",
        price: 6999,
        original_price: Some(8999),
        category: Category::Shoes,
        images: ["from-red-200 to-rose-300", "from-rose-200 to-red-300", "from-pink-200 to-rose-300", "from-red-100 to-rose-200"],
        emoji: "👠",
        description: "Stunning stiletto heels with a pointed toe and 10cm heel height.",
        sizes: &["35", "36", "37", "38", "39", "40", "41"],
        colors: &[("Red", "#ef4444"), ("Black", "#1a1a1a"), ("Nude", "#d4a574")],
        rating: 4.3,
        review_count: 145,
        badge: Some("Sale"),
        featured: false,
        best_seller: true,
    },
    ProductSeed {
        id: 7,
        name: "Chelsea Boots",
        price: 7999,
        original_price: None,
        category: Category::Shoes,
        images: ["from-amber-200 to-orange-300", "from-orange-200 to-amber-300", "from-yellow-200 to-amber-300", "from-amber-100 to-orange-200"],
        emoji: "👢",
        description: "Classic Chelsea boots in genuine suede with elastic side panels.",
        sizes: &["36", "37", "38", "39", "40", "41", "42", "43"],
        colors: &[("Tan", "#d97706"), ("Black", "#1a1a1a")],
        rating: 4.6,
        review_count: 98,
        badge: None,
        featured: false,
        best_seller: false,
    },
    ProductSeed {
        id: 8,
        name: "Canvas Slip-Ons",
        price: 2499,
        original_price: None,
        category: Category::Shoes,
        images: ["from-stone-100 to-stone-200", "from-neutral-100 to-stone-200", "from-stone-200 to-neutral-300", "from-stone-50 to-stone-200"],
        emoji: "🥿",
        description: "Comfortable canvas slip-on shoes with vulcanized rubber sole.",
        sizes: &["36", "37", "38", "39", "40", "41", "42", "43", "44"],
        colors: &[("Natural", "#d6d3d1"), ("Navy", "#1e3a5f")],
        rating: 4.2,
        review_count: 312,
        badge: Some("Popular"),
        featured: false,
        best_seller: false,
    },
    ProductSeed {
        id: 9,
        name: "Skinny Fit Jeans",
        price: 3999,
        original_price: None,
        category: Category::Jeans,
        images: ["from-indigo-200 to-blue-300", "from-blue-200 to-indigo-300", "from-indigo-300 to-blue-400", "from-blue-300 to-indigo-400"],
        emoji: "👖",
        description: "Classic skinny fit jeans in premium stretch denim.",
        sizes: WAIST_SIZES,
        colors: &[("Dark Blue", "#1e40af"), ("Black", "#1a1a1a")],
        rating: 4.5,
        review_count: 189,
        badge: None,
        featured: true,
        best_seller: true,
    },
    ProductSeed {
        id: 10,
        name: "High-Waist Mom Jeans",
        price: 3699,
        original_price: Some(4499),
        category: Category::Jeans,
        images: ["from-sky-200 to-blue-200", "from-blue-100 to-sky-200", "from-sky-300 to-blue-300", "from-sky-100 to-blue-200"],
        emoji: "👖",
        description: "Trendy high-waist mom jeans with a relaxed, tapered fit.",
        sizes: WAIST_SIZES,
        colors: &[("Light Blue", "#93c5fd"), ("Medium Blue", "#60a5fa")],
        rating: 4.7,
        review_count: 234,
        badge: Some("Trending"),
        featured: false,
        best_seller: true,
    },
    ProductSeed {
        id: 11,
        name: "Bootcut Denim",
        price: 4299,
        original_price: None,
        category: Category::Jeans,
        images: ["from-blue-200 to-indigo-300", "from-indigo-200 to-blue-300", "from-blue-300 to-indigo-300", "from-indigo-100 to-blue-200"],
        emoji: "👖",
        description: "Vintage-inspired bootcut jeans with a slight flare from the knee.",
        sizes: WAIST_SIZES,
        colors: &[("Medium Wash", "#3b82f6"), ("Dark Wash", "#1e3a8a")],
        rating: 4.3,
        review_count: 76,
        badge: None,
        featured: false,
        best_seller: false,
    },
    ProductSeed {
        id: 12,
        name: "Ripped Boyfriend Jeans",
        price: 3299,
        original_price: None,
        category: Category::Jeans,
        images: ["from-slate-200 to-gray-300", "from-gray-200 to-slate-300", "from-zinc-200 to-gray-300", "from-slate-300 to-gray-400"],
        emoji: "👖",
        description: "Relaxed boyfriend jeans with artful distressing.",
        sizes: WAIST_SIZES,
        colors: &[("Vintage Wash", "#94a3b8")],
        rating: 4.1,
        review_count: 112,
        badge: None,
        featured: false,
        best_seller: false,
    },
    ProductSeed {
        id: 13,
        name: "Leather Crossbody Bag",
        price: 5499,
        original_price: Some(6999),
        category: Category::Accessories,
        images: ["from-amber-200 to-yellow-300", "from-yellow-200 to-amber-300", "from-amber-100 to-yellow-200", "from-orange-200 to-amber-300"],
        emoji: "👜",
        description: "Elegant crossbody bag crafted from genuine leather.",
        sizes: ONE_SIZE,
        colors: &[("Camel", "#d97706"), ("Black", "#1a1a1a"), ("Burgundy", "#881337")],
        rating: 4.8,
        review_count: 178,
        badge: Some("Best Seller"),
        featured: true,
        best_seller: true,
    },
    ProductSeed {
        id: 14,
        name: "Gold Chain Necklace",
        price: 2999,
        original_price: None,
        category: Category::Accessories,
        images: ["from-yellow-200 to-amber-300", "from-amber-200 to-yellow-300", "from-yellow-100 to-amber-200", "from-amber-300 to-yellow-400"],
        emoji: "📿",
        description: "Delicate gold-plated chain necklace with a minimalist pendant.",
        sizes: ONE_SIZE,
        colors: &[("Gold", "#f59e0b"), ("Silver", "#9ca3af")],
        rating: 4.4,
        review_count: 93,
        badge: None,
        featured: false,
        best_seller: false,
    },
    ProductSeed {
        id: 15,
        name: "Classic Analog Watch",
        price: 12999,
        original_price: None,
        category: Category::Accessories,
        images: ["from-zinc-200 to-slate-300", "from-slate-200 to-zinc-300", "from-gray-200 to-zinc-300", "from-zinc-300 to-slate-400"],
        emoji: "⌚",
        description: "Sophisticated analog watch with genuine leather strap.",
        sizes: ONE_SIZE,
        colors: &[("Brown/Silver", "#78716c"), ("Black/Gold", "#292524")],
        rating: 4.9,
        review_count: 56,
        badge: Some("Premium"),
        featured: false,
        best_seller: true,
    },
    ProductSeed {
        id: 16,
        name: "Silk Scarf",
        price: 1999,
        original_price: Some(2999),
        category: Category::Accessories,
        images: ["from-purple-200 to-violet-300", "from-violet-200 to-purple-300", "from-fuchsia-200 to-violet-300", "from-purple-100 to-violet-200"],
        emoji: "🧣",
        description: "Luxurious silk scarf with a vibrant print.",
        sizes: ONE_SIZE,
        colors: &[("Purple Print", "#a855f7"), ("Blue Print", "#6366f1")],
        rating: 4.5,
        review_count: 141,
        badge: Some("Sale"),
        featured: false,
        best_seller: false,
    },
];

impl ProductSeed {
    fn to_product(&self) -> Product {
        Product {
            id: ProductId(self.id),
            name: self.name.to_string(),
            price: Money::from_minor(self.price),
            original_price: self.original_price.map(Money::from_minor),
            category: self.category,
            images: self.images.iter().map(|s| s.to_string()).collect(),
            emoji: self.emoji.to_string(),
            description: self.description.to_string(),
            sizes: self.sizes.iter().map(|s| s.to_string()).collect(),
            colors: self
                .colors
                .iter()
                .map(|(name, hex)| ColorOption::new(*name, *hex))
                .collect(),
            rating: self.rating,
            review_count: self.review_count,
            badge: self.badge.map(str::to_string),
            in_stock: true,
            featured: self.featured,
            best_seller: self.best_seller,
        }
    }
}

/// The initial catalog, in display order.
pub fn products() -> Vec<Product> {
    PRODUCTS.iter().map(ProductSeed::to_product).collect()
}

// =============================================================================
// Reviews
// =============================================================================

const REVIEWS: &[(u32, &str, &str, u8, &str, &str, u32)] = &[
    (1, "Sarah M.", "👩", 5, "Absolutely love the quality! The floral dress fits perfectly. Fast delivery to Dhaka!", "2 days ago", 2),
    (2, "Aisha R.", "👩‍🦱", 5, "The leather bag is gorgeous! Great customer service via WhatsApp.", "1 week ago", 13),
    (3, "Tanvir H.", "👨", 4, "Best online fashion store in Bangladesh! Easy bKash payment.", "2 weeks ago", 1),
    (4, "Nusrat J.", "👩‍🦰", 5, "The mom jeans are so comfortable and trendy. Perfect fit!", "3 weeks ago", 10),
    (5, "Rifat K.", "👨‍🦱", 5, "Classic watch arrived beautifully packaged. Looks premium!", "1 month ago", 15),
    (6, "Mim F.", "👩‍🦳", 4, "Running sneakers are super comfortable! True to size.", "1 month ago", 5),
];

pub fn reviews() -> Vec<Review> {
    REVIEWS
        .iter()
        .map(|&(id, name, avatar, rating, text, date, product_id)| Review {
            id,
            name: name.to_string(),
            avatar: avatar.to_string(),
            rating,
            text: text.to_string(),
            date: date.to_string(),
            product_id: Some(ProductId(product_id)),
        })
        .collect()
}

// =============================================================================
// Orders
// =============================================================================

struct OrderSeed {
    id: &'static str,
    customer: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    city: &'static str,
    total: i64,
    shipping: i64,
    payment_method: PaymentMethod,
    status: OrderStatus,
    date: (i32, u32, u32),
}

const ORDERS: &[OrderSeed] = &[
    OrderSeed { id: "ORD-001", customer: "Rafiq Ahmed", phone: "01712345678", email: "rafiq@email.com", address: "House 12, Road 5, Dhanmondi", city: "Dhaka", total: 8498, shipping: 0, payment_method: PaymentMethod::Bkash, status: OrderStatus::Delivered, date: (2024, 1, 15) },
    OrderSeed { id: "ORD-002", customer: "Fatema Begum", phone: "01898765432", email: "fatema@email.com", address: "Flat 3B, Green Tower, Nasirabad", city: "Chittagong", total: 12998, shipping: 120, payment_method: PaymentMethod::Nagad, status: OrderStatus::Shipped, date: (2024, 1, 18) },
    OrderSeed { id: "ORD-003", customer: "Kamal Hossain", phone: "01612345678", email: "kamal@email.com", address: "45 Station Road, Ambarkhana", city: "Sylhet", total: 5999, shipping: 120, payment_method: PaymentMethod::Rocket, status: OrderStatus::Processing, date: (2024, 1, 20) },
    OrderSeed { id: "ORD-004", customer: "Nadia Islam", phone: "01512345678", email: "nadia@email.com", address: "House 78, Sector 10, Uttara", city: "Dhaka", total: 15497, shipping: 0, payment_method: PaymentMethod::Bkash, status: OrderStatus::Confirmed, date: (2024, 1, 22) },
    OrderSeed { id: "ORD-005", customer: "Arif Rahman", phone: "01912345678", email: "arif@email.com", address: "Block C, Bashundhara R/A", city: "Dhaka", total: 3499, shipping: 120, payment_method: PaymentMethod::CashOnDelivery, status: OrderStatus::Pending, date: (2024, 1, 23) },
    OrderSeed { id: "ORD-006", customer: "Sumaiya Akter", phone: "01812345678", email: "sumaiya@email.com", address: "House 5, Road 3, Mirpur-10", city: "Dhaka", total: 9698, shipping: 0, payment_method: PaymentMethod::Bkash, status: OrderStatus::Delivered, date: (2024, 1, 10) },
    OrderSeed { id: "ORD-007", customer: "Habib Mia", phone: "01312345678", email: "habib@email.com", address: "24 College Road, Rajshahi", city: "Rajshahi", total: 6999, shipping: 120, payment_method: PaymentMethod::Nagad, status: OrderStatus::Cancelled, date: (2024, 1, 8) },
];

/// Historical orders, newest id last. They carry no line items.
pub fn orders() -> Vec<Order> {
    ORDERS
        .iter()
        .map(|o| Order {
            id: o.id.to_string(),
            customer: o.customer.to_string(),
            phone: o.phone.to_string(),
            email: o.email.to_string(),
            address: o.address.to_string(),
            city: o.city.to_string(),
            items: Vec::new(),
            total: Money::from_minor(o.total),
            shipping: Money::from_minor(o.shipping),
            payment_method: o.payment_method,
            status: o.status,
            date: ymd(o.date),
        })
        .collect()
}

// =============================================================================
// Customers
// =============================================================================

const CUSTOMERS: &[(u32, &str, &str, &str, u32, i64, (i32, u32, u32), CustomerStatus)] = &[
    (1, "Rafiq Ahmed", "rafiq@email.com", "01712345678", 5, 32450, (2023, 6, 15), CustomerStatus::Active),
    (2, "Fatema Begum", "fatema@email.com", "01898765432", 3, 18990, (2023, 8, 20), CustomerStatus::Active),
    (3, "Kamal Hossain", "kamal@email.com", "01612345678", 2, 11998, (2023, 10, 5), CustomerStatus::Active),
    (4, "Nadia Islam", "nadia@email.com", "01512345678", 8, 65800, (2023, 3, 10), CustomerStatus::Active),
    (5, "Arif Rahman", "arif@email.com", "01912345678", 1, 3499, (2024, 1, 23), CustomerStatus::Active),
    (6, "Sumaiya Akter", "sumaiya@email.com", "01812345678", 4, 28700, (2023, 7, 12), CustomerStatus::Active),
    (7, "Habib Mia", "habib@email.com", "01312345678", 1, 6999, (2024, 1, 8), CustomerStatus::Inactive),
];

pub fn customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .map(|&(id, name, email, phone, orders, total_spent, joined, status)| Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            orders,
            total_spent: Money::from_minor(total_spent),
            join_date: ymd(joined),
            status,
        })
        .collect()
}

/// Fixture dates are literal and always valid.
fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(products().len(), 16);
        assert_eq!(reviews().len(), 6);
        assert_eq!(orders().len(), 7);
        assert_eq!(customers().len(), 7);
    }

    #[test]
    fn test_product_ids_unique_and_valid() {
        let products = products();
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());

        for p in &products {
            assert!(p.price.is_positive(), "{} has no price", p.name);
            assert!(!p.images.is_empty());
            assert!(!p.sizes.is_empty());
            assert!(!p.colors.is_empty());
        }
    }

    #[test]
    fn test_reviews_point_at_catalog() {
        let ids: HashSet<_> = products().iter().map(|p| p.id).collect();
        for r in reviews() {
            assert!(ids.contains(&r.product_id.unwrap()));
            assert!((1..=5).contains(&r.rating));
        }
    }

    #[test]
    fn test_order_fixture_dates() {
        let orders = orders();
        assert_eq!(orders[0].date.to_string(), "2024-01-15");
        assert_eq!(orders[4].payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(orders[6].status, OrderStatus::Cancelled);
        assert_eq!(customers()[6].join_date.to_string(), "2024-01-08");
    }
}
