//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - Built-in defaults
//! - TOML file (`till.toml` in the working directory, or `--config <path>`)
//! - Environment variables prefixed with `TILL_`, double underscore for nesting
//!   (`TILL_BILLING__INSURED_DISCOUNT_RATE=0.15`)
//!
//! ```toml
//! [billing]
//! insured_discount_rate = "0.10"
//!
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! till_core = "debug"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use till_core::calc::{BillingPolicy, ValidationResult, DEFAULT_INSURED_DISCOUNT_RATE};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "till.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Billing rules
    #[serde(default)]
    pub billing: BillingSettings,

    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingSettings {
    /// Discount rate for insured patients, between 0 and 1
    #[serde(default = "default_discount_rate")]
    pub insured_discount_rate: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for every target without an override
    #[serde(default = "default_level")]
    pub default: String,

    /// Per-target overrides, e.g. `till_core = "debug"`
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

fn default_discount_rate() -> Decimal {
    DEFAULT_INSURED_DISCOUNT_RATE
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for BillingSettings {
    fn default() -> Self {
        Self {
            insured_discount_rate: default_discount_rate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_level(),
            modules: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Filter directives in `EnvFilter` syntax.
    pub fn directives(&self) -> String {
        let mut filter = self.default.clone();
        for (module, level) in &self.modules {
            filter.push_str(&format!(",{module}={level}"));
        }
        filter
    }
}

impl Settings {
    /// Load settings from all sources.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        let file = match path {
            Some(path) if !path.exists() => {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        Self::figment(&file).extract().map_err(Box::new)
    }

    /// The figment behind [`Settings::load`].
    pub fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("TILL_").split("__"))
    }

    /// Validated discount policy.
    pub fn billing_policy(&self) -> ValidationResult<BillingPolicy> {
        BillingPolicy::new(self.billing.insured_discount_rate)
    }
}
