//! Shipping methods and rates.
//!
//! The single rate authority: both the cart's shipping estimate and the
//! checkout's final total price shipping through [`ShippingMethod::rate`].

use crate::config::PricingConfig;
use crate::money::Money;
use serde::{Deserialize, Serialize};

const EXPRESS_RATE: Money = Money::new(12_99);
const NEXT_DAY_RATE: Money = Money::new(24_99);

/// Available shipping methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Standard shipping; free once the subtotal reaches the threshold.
    #[default]
    Standard,
    /// Express shipping, flat rate.
    Express,
    /// Next-day delivery, flat rate.
    NextDay,
}

impl ShippingMethod {
    /// All methods, in display order.
    pub const ALL: [ShippingMethod; 3] = [
        ShippingMethod::Standard,
        ShippingMethod::Express,
        ShippingMethod::NextDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::NextDay => "nextday",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard Shipping",
            ShippingMethod::Express => "Express Shipping",
            ShippingMethod::NextDay => "Next Day Delivery",
        }
    }

    pub fn delivery_estimate(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "3-5 business days",
            ShippingMethod::Express => "2-3 business days",
            ShippingMethod::NextDay => "1 business day",
        }
    }

    /// The rate for this method at the given subtotal.
    pub fn rate(&self, subtotal: Money, config: &PricingConfig) -> Money {
        match self {
            ShippingMethod::Standard => {
                if subtotal >= config.free_shipping_threshold {
                    Money::zero()
                } else {
                    config.standard_shipping
                }
            }
            ShippingMethod::Express => EXPRESS_RATE,
            ShippingMethod::NextDay => NEXT_DAY_RATE,
        }
    }
}
