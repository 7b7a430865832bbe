//! # Commands Module
//!
//! Every operation the view layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── catalog.rs     ◄─── Home shelves, listing, detail, header search
//! ├── cart.rs        ◄─── Cart manipulation
//! ├── wishlist.rs    ◄─── Heart toggles, saved items
//! ├── checkout.rs    ◄─── Order summary and placement
//! ├── admin.rs       ◄─── Login gate, dashboard, products, orders, reviews
//! ├── navigation.rs  ◄─── Current page
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Command Flow                                       │
//! │                                                                         │
//! │  View layer                                                             │
//! │  ──────────                                                             │
//! │  add_to_cart(&store, &toast, AddToCartRequest { .. })                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command                                                                │
//! │  ───────                                                                │
//! │  fn add_to_cart(                                                        │
//! │      store: &StoreState,      ◄── Only the holders it needs             │
//! │      toast: &ToastChannel,                                              │
//! │      request: AddToCartRequest,                                         │
//! │  ) -> ApiResult<CartResponse>                                           │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  View receives: CartResponse or ApiError { code, message }              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection (Option B)
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the store
//! fn list_products(store: &StoreState, query: CatalogQuery)
//!
//! // Needs the store and the toast channel
//! fn place_order(store: &StoreState, toast: &ToastChannel, request: PlaceOrderRequest)
//!
//! // Admin commands also need the session gate
//! fn delete_review(session: &AdminSession, store: &StoreState, toast: &ToastChannel, id: u32)
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod navigation;
pub mod wishlist;
