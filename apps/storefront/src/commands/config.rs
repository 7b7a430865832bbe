//! # Config Commands
//!
//! Read-only access to storefront settings.

use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

/// Settings the view layer needs at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub config: ConfigState,
    /// Ready-to-print free-shipping line, e.g. "Free shipping over ৳5,000".
    pub free_shipping_banner: String,
}

/// Gets the current storefront configuration.
///
/// ## When Used
/// - App startup (store name in the header)
/// - Currency formatting
/// - Free-shipping banner and price slider bounds
pub fn get_config(config: &ConfigState) -> ConfigResponse {
    debug!("get_config command");
    ConfigResponse {
        free_shipping_banner: format!(
            "Free shipping over {}",
            config.format_currency(config.shipping_policy().free_threshold)
        ),
        config: config.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_banner() {
        let response = get_config(&ConfigState::default());
        assert_eq!(response.free_shipping_banner, "Free shipping over ৳5,000");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["config"]["storeName"], "StyleHub");
        assert_eq!(json["freeShippingBanner"], "Free shipping over ৳5,000");
    }
}
