//! Storefront configuration.
//!
//! All values carry the store's defaults; a deployment can override any
//! subset from a TOML document.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pricing rules applied by the cart and checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Sales tax rate applied to the subtotal.
    pub tax_rate: f64,
    /// Subtotal at which standard shipping becomes free.
    pub free_shipping_threshold: Money,
    /// Flat rate for standard shipping below the threshold.
    pub standard_shipping: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.07,
            free_shipping_threshold: Money::new(100_00),
            standard_shipping: Money::new(8_99),
        }
    }
}

/// Search-as-you-type behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Debounce delay in milliseconds before a query runs.
    pub debounce_ms: u64,
}

impl SearchConfig {
    /// The debounce delay as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub pricing: PricingConfig,
    pub search: SearchConfig,
}

impl Config {
    /// Parse a configuration from a TOML document.
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(s)?)
    }
}
