//! # State Module
//!
//! Manages the in-memory session state of the storefront.
//!
//! ## Why Multiple State Types? (Option B)
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Each holder can be built on its own
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: A toast or page change never waits on the store lock
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         State Architecture                              │
//! │                                                                         │
//! │   ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐  │
//! │   │  StoreState  │ │ Navigation   │ │ ToastChannel │ │ AdminSession │  │
//! │   │  ──────────  │ │ State        │ │ ──────────── │ │ ──────────── │  │
//! │   │ Arc<Mutex<   │ │ Arc<Mutex<   │ │ watch + one  │ │ Arc<Atomic   │  │
//! │   │   Store>>    │ │   Page>>     │ │ timer task   │ │   Bool>      │  │
//! │   └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘  │
//! │                                                                         │
//! │   ┌──────────────┐                                                      │
//! │   │ ConfigState  │  read-only after startup                             │
//! │   └──────────────┘                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admin;
mod cart;
mod config;
mod navigation;
mod store;
mod toast;

pub use admin::{AdminSession, DEMO_ADMIN_PASSWORD, DEMO_ADMIN_USERNAME};
pub use cart::{Cart, CartTotals};
pub use config::{ConfigError, ConfigState, CONFIG_PATH_ENV};
pub use navigation::{NavigationState, Page};
pub use store::{SaveOutcome, Store, StoreState};
pub use toast::{Toast, ToastChannel, DEFAULT_TOAST_DURATION};
