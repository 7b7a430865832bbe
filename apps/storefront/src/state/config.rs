//! # Configuration State
//!
//! Storefront settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STYLEHUB_*`)
//! 2. Config file (path in `STYLEHUB_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! # stylehub.toml
//! store_name = "StyleHub"
//! currency_symbol = "৳"
//! free_shipping_threshold = 5000
//! flat_shipping_fee = 120
//! toast_duration_ms = 3000
//! listing_price_min = 0
//! listing_price_max = 15000
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stylehub_core::catalog::PriceRange;
use stylehub_core::money::CURRENCY_SYMBOL;
use stylehub_core::pricing::ShippingPolicy;
use stylehub_core::{Money, DEFAULT_MAX_LISTING_PRICE, FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "STYLEHUB_CONFIG";

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment override could not be parsed.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: String, value: String },

    /// A setting is out of its allowed range.
    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: String, reason: String },
}

// =============================================================================
// Config State
// =============================================================================

/// Storefront configuration.
///
/// Read from TOML with snake_case keys, sent to the view layer in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Subtotal at or above which shipping is free
    pub free_shipping_threshold: i64,

    /// Shipping fee below the threshold
    pub flat_shipping_fee: i64,

    /// How long a toast stays visible
    pub toast_duration_ms: u64,

    /// Default lower bound of the listing price filter
    pub listing_price_min: i64,

    /// Default upper bound of the listing price filter
    pub listing_price_max: i64,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "StyleHub".to_string(),
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
            flat_shipping_fee: FLAT_SHIPPING_FEE,
            toast_duration_ms: 3000,
            listing_price_min: 0,
            listing_price_max: DEFAULT_MAX_LISTING_PRICE,
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    ///
    /// ## Load Order
    /// 1. Start from defaults
    /// 2. If `STYLEHUB_CONFIG` names a file, parse it as TOML
    /// 3. Apply `STYLEHUB_*` overrides
    /// 4. Validate
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::load`] with an injectable variable lookup.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                debug!("No config file set, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading storefront config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `STYLEHUB_*` environment overrides.
    ///
    /// ## Environment Variables
    /// - `STYLEHUB_STORE_NAME`: Override store name
    /// - `STYLEHUB_FREE_SHIPPING_THRESHOLD`: Override free-shipping threshold
    /// - `STYLEHUB_FLAT_SHIPPING_FEE`: Override shipping fee
    /// - `STYLEHUB_TOAST_MS`: Override toast duration in milliseconds
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("STYLEHUB_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store_name = name;
        }

        if let Some(v) = lookup("STYLEHUB_FREE_SHIPPING_THRESHOLD") {
            self.free_shipping_threshold = parse_env("STYLEHUB_FREE_SHIPPING_THRESHOLD", &v)?;
        }

        if let Some(v) = lookup("STYLEHUB_FLAT_SHIPPING_FEE") {
            self.flat_shipping_fee = parse_env("STYLEHUB_FLAT_SHIPPING_FEE", &v)?;
        }

        if let Some(v) = lookup("STYLEHUB_TOAST_MS") {
            self.toast_duration_ms = parse_env("STYLEHUB_TOAST_MS", &v)?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_name.trim().is_empty() {
            return Err(invalid("store_name", "must not be empty"));
        }
        if self.free_shipping_threshold < 0 {
            return Err(invalid("free_shipping_threshold", "must not be negative"));
        }
        if self.flat_shipping_fee < 0 {
            return Err(invalid("flat_shipping_fee", "must not be negative"));
        }
        if self.toast_duration_ms == 0 {
            return Err(invalid("toast_duration_ms", "must be positive"));
        }
        if self.listing_price_min < 0 || self.listing_price_min > self.listing_price_max {
            return Err(invalid(
                "listing_price_min",
                "must be between 0 and listing_price_max",
            ));
        }
        Ok(())
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy::new(
            Money::from_minor(self.free_shipping_threshold),
            Money::from_minor(self.flat_shipping_fee),
        )
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Price window the listing page starts with.
    pub fn default_price_range(&self) -> PriceRange {
        PriceRange::new(
            Money::from_minor(self.listing_price_min),
            Money::from_minor(self.listing_price_max),
        )
    }

    /// Formats an amount with the configured symbol and thousands separators.
    ///
    /// ## Example
    /// ```rust
    /// use stylehub_core::Money;
    /// use stylehub_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_minor(12999)), "৳12,999");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let grouped = amount.grouped();
        match grouped.strip_prefix('-') {
            Some(rest) => format!("-{}{}", self.currency_symbol, rest),
            None => format!("{}{}", self.currency_symbol, grouped),
        }
    }
}

fn parse_env<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var: var.to_string(),
        value: value.to_string(),
    })
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::load_with(env(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.shipping_policy(), ShippingPolicy::default());
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
        assert_eq!(config.default_price_range(), PriceRange::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::load_with(env(&[
            ("STYLEHUB_STORE_NAME", "StyleHub Chittagong"),
            ("STYLEHUB_FREE_SHIPPING_THRESHOLD", "3000"),
            ("STYLEHUB_FLAT_SHIPPING_FEE", "60"),
            ("STYLEHUB_TOAST_MS", "1500"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "StyleHub Chittagong");
        assert_eq!(config.shipping_policy().fee_for(Money::from_minor(2999)).amount(), 60);
        assert!(config.shipping_policy().fee_for(Money::from_minor(3000)).is_zero());
        assert_eq!(config.toast_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_bad_env_value() {
        let err = ConfigState::load_with(env(&[("STYLEHUB_TOAST_MS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));

        let err = ConfigState::load_with(env(&[("STYLEHUB_TOAST_MS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let err = ConfigState::load_with(env(&[("STYLEHUB_FLAT_SHIPPING_FEE", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_toml_partial_file() {
        let config = ConfigState::from_toml_str(
            r#"
            store_name = "StyleHub Outlet"
            listing_price_max = 20000
            "#,
        )
        .unwrap();
        assert_eq!(config.store_name, "StyleHub Outlet");
        assert_eq!(config.listing_price_max, 20000);
        assert_eq!(config.flat_shipping_fee, 120);

        assert!(matches!(
            ConfigState::from_toml_str("toast_duration_ms = \"fast\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["storeName"], "StyleHub");
        assert_eq!(json["freeShippingThreshold"], 5000);
        assert_eq!(json["toastDurationMs"], 3000);
        assert!(json.get("store_name").is_none());
    }

    #[test]
    fn test_missing_config_file() {
        let err = ConfigState::load_with(env(&[(CONFIG_PATH_ENV, "/nonexistent/stylehub.toml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_minor(1499)), "৳1,499");
        assert_eq!(config.format_currency(Money::from_minor(0)), "৳0");
        assert_eq!(config.format_currency(Money::from_minor(-1500)), "-৳1,500");
        assert_eq!(config.format_currency(Money::from_minor(123456789)), "৳123,456,789");
    }
}
