//! # Shop Configuration
//!
//! Tunables for the service layer.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BOOKSTORE_PAYMENT_DELAY_MS=250                                     │
//! │     BOOKSTORE_PAYMENT_SUCCESS_RATE=1.0                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/bookstore/shop.toml (Linux)                              │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     1000 ms settlement delay, 90% success rate                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shop.toml
//! [payment]
//! settle_delay_ms = 1000
//! success_rate = 0.9
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

const ENV_PAYMENT_DELAY_MS: &str = "BOOKSTORE_PAYMENT_DELAY_MS";
const ENV_PAYMENT_SUCCESS_RATE: &str = "BOOKSTORE_PAYMENT_SUCCESS_RATE";

// =============================================================================
// Errors
// =============================================================================

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Payment Settings
// =============================================================================

/// How simulated payments settle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSettings {
    /// Time between `process_payment` and the status transition.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Probability (0.0 to 1.0) that a payment completes instead of failing.
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
}

fn default_settle_delay_ms() -> u64 {
    1000
}

fn default_success_rate() -> f64 {
    0.9
}

impl Default for PaymentSettings {
    fn default() -> Self {
        PaymentSettings {
            settle_delay_ms: default_settle_delay_ms(),
            success_rate: default_success_rate(),
        }
    }
}

impl PaymentSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

// =============================================================================
// Shop Configuration
// =============================================================================

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub payment: PaymentSettings,
}

impl ShopConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`shop.toml`), if present
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading shop config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load shop config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let rate = self.payment.success_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::Invalid(format!(
                "payment.success_rate must be between 0.0 and 1.0, got {}",
                rate
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production). Unparseable values are logged and ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(delay) = lookup(ENV_PAYMENT_DELAY_MS) {
            match delay.parse::<u64>() {
                Ok(ms) => {
                    debug!(delay_ms = ms, "Overriding settlement delay from environment");
                    self.payment.settle_delay_ms = ms;
                }
                Err(_) => warn!(value = %delay, "Ignoring invalid {}", ENV_PAYMENT_DELAY_MS),
            }
        }

        if let Some(rate) = lookup(ENV_PAYMENT_SUCCESS_RATE) {
            match rate.parse::<f64>() {
                Ok(r) => {
                    debug!(success_rate = r, "Overriding success rate from environment");
                    self.payment.success_rate = r;
                }
                Err(_) => warn!(value = %rate, "Ignoring invalid {}", ENV_PAYMENT_SUCCESS_RATE),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "bookstore", "shop")
            .map(|dirs| dirs.config_dir().join("shop.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.payment.settle_delay_ms, 1000);
        assert_eq!(config.payment.settle_delay(), Duration::from_secs(1));
        assert!((config.payment.success_rate - 0.9).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = ShopConfig::from_toml_str("[payment]\nsettle_delay_ms = 250\n").unwrap();
        assert_eq!(config.payment.settle_delay_ms, 250);
        assert!((config.payment.success_rate - 0.9).abs() < f64::EPSILON);

        let empty = ShopConfig::from_toml_str("").unwrap();
        assert_eq!(empty, ShopConfig::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = ShopConfig::from_toml_str("[payment]\nsuccess_rate = \"high\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_rejects_bad_rate() {
        let mut config = ShopConfig::default();
        config.payment.success_rate = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.payment.success_rate = f64::NAN;
        assert!(config.validate().is_err());

        config.payment.success_rate = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_PAYMENT_DELAY_MS, "50"),
            (ENV_PAYMENT_SUCCESS_RATE, "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = ShopConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.payment.settle_delay_ms, 50);
        assert!((config.payment.success_rate - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("bookstore-missing-config-for-test.toml");
        let config = ShopConfig::load_or_default(Some(path));
        assert_eq!(config.payment.settle_delay_ms, ShopConfig::default().payment.settle_delay_ms);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ShopConfig::default()).unwrap();
        assert!(toml_str.contains("[payment]"));
        assert!(toml_str.contains("settle_delay_ms"));
    }
}
