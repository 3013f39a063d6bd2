//! Derived cart totals.

use crate::cart::LineItem;
use crate::checkout::ShippingMethod;
use crate::config::PricingConfig;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown derived from a line-item sequence.
///
/// Always recomputed as a whole; never adjusted field by field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Totals {
    /// Sum of effective price times quantity over all line items.
    pub subtotal: Money,
    /// Standard-method shipping estimate for the subtotal.
    pub shipping: Money,
    /// Sales tax on the subtotal, rounded to the cent.
    pub tax: Money,
    /// Subtotal plus shipping plus tax.
    pub total: Money,
}

impl Totals {
    /// Compute the breakdown for `items` under `config`.
    ///
    /// The shipping field is the [`ShippingMethod::Standard`] rate; checkout
    /// replaces it with the selected method's rate at placement.
    pub fn compute(items: &[LineItem], config: &PricingConfig) -> Self {
        let subtotal: Money = items.iter().map(LineItem::line_total).sum();
        let shipping = ShippingMethod::Standard.rate(subtotal, config);
        let tax = subtotal.multiply_decimal(config.tax_rate);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}
