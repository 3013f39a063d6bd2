//! Cart ledger: line items plus derived totals, persisted on every
//! mutation.

use crate::cart::Totals;
use crate::catalog::Product;
use crate::config::PricingConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vitrine_kv::BlobStore;

/// Fixed key the ledger persists under.
pub const LEDGER_KEY: &str = "cart";

/// A line item: one product reference plus a quantity.
///
/// Display fields are denormalized from the product at add time so a
/// persisted cart renders without a catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The referenced product.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Base price at add time.
    pub price: Money,
    /// Sale price at add time, when the product was on sale.
    pub discount_price: Option<Money>,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item referencing `product`.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            discount_price: product.discount_price,
            quantity,
        }
    }

    /// The unit price a buyer pays: sale price when present, else base.
    pub fn effective_price(&self) -> Money {
        self.discount_price.unwrap_or(self.price)
    }

    /// Effective price times quantity.
    pub fn line_total(&self) -> Money {
        self.effective_price() * self.quantity
    }
}

/// Persisted ledger state: the line items plus the derived totals.
#[derive(Debug, Serialize, Deserialize)]
struct SavedCart {
    items: Vec<LineItem>,
    totals: Totals,
}

/// The shopping cart: an insertion-ordered sequence of line items and the
/// totals derived from it.
///
/// Every mutation recomputes the totals and persists the full state to the
/// injected blob store, best-effort: a failed save is logged and never
/// rolls back the in-memory change. Lookup misses are no-ops, not errors.
#[derive(Debug)]
pub struct Ledger<S: BlobStore> {
    items: Vec<LineItem>,
    totals: Totals,
    config: PricingConfig,
    store: S,
}

impl<S: BlobStore> Ledger<S> {
    /// Open a ledger over `store`, replaying any previously persisted
    /// state.
    ///
    /// A missing blob yields an empty cart; a malformed one is discarded
    /// with a warning.
    pub fn open(store: S, config: PricingConfig) -> Self {
        let mut ledger = Self {
            items: Vec::new(),
            totals: Totals::default(),
            config,
            store,
        };
        ledger.rehydrate();
        ledger
    }

    /// Add `quantity` of `product` to the cart.
    ///
    /// Merges into the existing line item for the product, if any;
    /// otherwise appends a new one. Quantity must be positive by caller
    /// contract.
    pub fn add(&mut self, product: &Product, quantity: i64) {
        self.merge(LineItem::from_product(product, quantity));
        self.commit();
    }

    /// Remove the line item for `product_id`, if present.
    pub fn remove(&mut self, product_id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        if self.items.len() == before {
            return;
        }
        self.commit();
    }

    /// Set the quantity of the line item for `product_id`, if present.
    ///
    /// Quantities clamp to a minimum of 1; use [`Ledger::remove`] to take
    /// an item out of the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) else {
            return;
        };
        item.quantity = quantity.max(1);
        self.commit();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.commit();
    }

    /// The current pricing breakdown, always consistent with the line
    /// items.
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// The pricing rules this ledger derives totals under.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    fn merge(&mut self, item: LineItem) {
        match self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    fn rehydrate(&mut self) {
        let bytes = match self.store.load(LEDGER_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return,
            Err(err) => {
                warn!(%err, "failed to load persisted cart, starting empty");
                return;
            }
        };
        let saved: SavedCart = match serde_json::from_slice(&bytes) {
            Ok(saved) => saved,
            Err(err) => {
                warn!(%err, "discarding malformed persisted cart");
                return;
            }
        };
        // Replay each saved item through the add path, skipping any
        // quantity below the minimum of 1.
        for item in saved.items {
            if item.quantity < 1 {
                continue;
            }
            self.merge(item);
        }
        self.totals = Totals::compute(&self.items, &self.config);
        debug!(items = self.items.len(), "rehydrated cart");
    }

    /// Recompute totals and persist, best-effort.
    fn commit(&mut self) {
        self.totals = Totals::compute(&self.items, &self.config);
        if let Err(err) = self.persist() {
            warn!(%err, "failed to persist cart state");
        }
    }

    fn persist(&self) -> Result<(), CommerceError> {
        let state = SavedCart {
            items: self.items.clone(),
            totals: self.totals,
        };
        let bytes = serde_json::to_vec(&state)?;
        self.store.save(LEDGER_KEY, &bytes)?;
        Ok(())
    }
}
