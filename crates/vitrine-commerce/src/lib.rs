//! Storefront domain types and logic for Vitrine.
//!
//! This crate provides the core of a client-rendered storefront:
//!
//! - **Catalog**: in-memory products and reviews with substring search
//! - **Cart**: a ledger of line items with derived totals, persisted
//!   through an injected blob store on every mutation
//! - **Checkout**: a linear multi-step flow ending in order placement
//! - **Search**: debounced search-as-you-type over the catalog
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//! use vitrine_kv::MemoryStore;
//!
//! let catalog = Catalog::demo();
//! let mut cart = Ledger::open(MemoryStore::new(), PricingConfig::default());
//!
//! let product = catalog.search("headphones")[0].clone();
//! cart.add(&product, 1);
//!
//! let mut checkout = Checkout::begin(&cart).unwrap();
//! checkout.set_shipping_method(ShippingMethod::Express);
//! while !checkout.is_placed() {
//!     checkout.advance(&mut cart);
//! }
//! let confirmation = checkout.confirmation().unwrap();
//! assert!(cart.is_empty());
//! assert!(confirmation.order_number.starts_with("ORD-"));
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use config::{Config, PricingConfig, SearchConfig};
pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{Config, PricingConfig, SearchConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product, Review};

    // Cart
    pub use crate::cart::{Ledger, LineItem, Totals};

    // Checkout
    pub use crate::checkout::{
        Checkout, CheckoutStep, ContactDetails, OrderConfirmation, ShippingMethod,
    };

    // Search
    pub use crate::search::{LiveSearch, SearchSnapshot};
}
