//! Shopping cart module.
//!
//! Contains the persisted cart ledger, its line items, and the derived
//! totals.

mod ledger;
mod totals;

pub use ledger::{Ledger, LineItem, LEDGER_KEY};
pub use totals::Totals;
