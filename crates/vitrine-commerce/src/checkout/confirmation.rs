//! Order confirmation issued at placement.

use crate::checkout::ShippingMethod;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Summary of a placed order.
///
/// This is the terminal artifact of a checkout session; it is shown once
/// and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Human-readable order number.
    pub order_number: String,
    /// Total item count (sum of quantities).
    pub item_count: i64,
    /// Subtotal at placement.
    pub subtotal: Money,
    /// Shipping at the selected method's rate.
    pub shipping: Money,
    /// Tax at placement.
    pub tax: Money,
    /// Amount charged: subtotal plus shipping plus tax.
    pub total: Money,
    /// The method the order ships with.
    pub shipping_method: ShippingMethod,
}

impl OrderConfirmation {
    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("ORD-{ts}")
    }
}
