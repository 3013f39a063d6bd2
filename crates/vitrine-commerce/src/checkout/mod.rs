//! Checkout module.
//!
//! Contains the checkout flow state machine, buyer contact details,
//! shipping methods, and the order confirmation.

mod confirmation;
mod contact;
mod flow;
mod shipping;

pub use confirmation::OrderConfirmation;
pub use contact::ContactDetails;
pub use flow::{Checkout, CheckoutStep};
pub use shipping::ShippingMethod;
