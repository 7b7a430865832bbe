//! # StyleHub Storefront Library
//!
//! Session state and command layer of the StyleHub storefront.
//! The view layer owns rendering; everything it reads or changes goes
//! through the commands in this crate.
//!
//! ## Module Organization
//! ```text
//! stylehub_storefront/
//! ├── lib.rs          ◄─── You are here (wiring, tracing, run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Catalog, orders, customers, reviews, cart, wishlist
//! │   ├── cart.rs     ◄─── Cart lines and totals
//! │   ├── navigation.rs ◄─ Current page
//! │   ├── toast.rs    ◄─── Single-slot notification with auto-clear
//! │   ├── admin.rs    ◄─── Demo admin gate
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── Operations the view layer invokes
//! ├── seed.rs         ◄─── Demo catalog and history
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Option B: Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront State                                     │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ StoreState   │ │ Navigation   │ │ ToastChannel │ │ AdminSession │   │
//! │  │              │ │ State        │ │              │ │              │   │
//! │  │ • products   │ │ • page       │ │ • message    │ │ • logged in  │   │
//! │  │ • orders     │ │ • category / │ │ • 3 s timer  │ │              │   │
//! │  │ • cart       │ │   product id │ │              │ │              │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  Each command only requests the state it needs.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod seed;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AdminSession, ConfigState, NavigationState, Store, StoreState, ToastChannel};

/// Every state holder of one storefront session.
///
/// Handles are cheap clones sharing the same underlying state, so a view
/// layer can hand individual holders to whichever component needs them.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub config: ConfigState,
    pub store: StoreState,
    pub navigation: NavigationState,
    pub toast: ToastChannel,
    pub admin: AdminSession,
}

impl Storefront {
    /// Builds a seeded session priced and timed by `config`.
    pub fn new(config: ConfigState) -> Self {
        let store = Store::seeded().with_shipping(config.shipping_policy());
        Storefront {
            store: StoreState::new(store),
            navigation: NavigationState::new(),
            toast: ToastChannel::new(config.toast_duration()),
            admin: AdminSession::new(),
            config,
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Storefront::new(ConfigState::default())
    }
}

/// Runs the storefront smoke entry point.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,stylehub=debug, overridable with RUST_LOG           │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, then STYLEHUB_CONFIG file, then STYLEHUB_* variables    │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • StoreState: seeded catalog with the configured shipping policy    │
/// │     • NavigationState, ToastChannel, AdminSession                       │
/// │                                                                         │
/// │  4. Log Dashboard Summary ────────────────────────────────────────────► │
/// │     • DashboardStats as JSON                                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting StyleHub storefront");

    let config = ConfigState::load()?;
    info!(store = %config.store_name, "Configuration loaded");

    let app = Storefront::new(config);
    let stats = app.store.with_store(|s| s.dashboard_stats());
    info!(
        products = stats.total_products,
        orders = stats.total_orders,
        revenue = %app.config.format_currency(stats.total_revenue),
        "State initialized"
    );
    info!(summary = %serde_json::to_string(&stats)?, "Dashboard summary");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stylehub=trace` - Show trace for stylehub crates only
/// - Default: `info,stylehub=debug`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,stylehub=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylehub_core::Money;

    #[test]
    fn test_storefront_uses_config() {
        let config = ConfigState {
            free_shipping_threshold: 1000,
            flat_shipping_fee: 80,
            toast_duration_ms: 1200,
            ..Default::default()
        };
        let app = Storefront::new(config);

        assert_eq!(app.toast.duration().as_millis(), 1200);
        app.store.with_store(|s| {
            assert_eq!(s.products().len(), 16);
            assert_eq!(s.shipping_fee(Money::from_minor(999)).amount(), 80);
            assert!(s.shipping_fee(Money::from_minor(1000)).is_zero());
        });
    }

    #[test]
    fn test_cloned_handles_share_state() {
        let app = Storefront::default();
        let other = app.clone();

        other.admin.login("admin", "admin123");
        assert!(app.admin.is_authenticated());

        other.store.with_store_mut(|s| s.toggle_wishlist(stylehub_core::ProductId(1)));
        assert_eq!(app.store.with_store(|s| s.wishlist().len()), 1);
    }
}
