//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are owned by the catalog and immutable from the storefront's
/// perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Base price.
    pub price: Money,
    /// Sale price; below `price` when present.
    pub discount_price: Option<Money>,
    /// Average review rating (0.0 to 5.0).
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: i64,
    /// Image URLs.
    pub images: Vec<String>,
    /// Category name.
    pub category: String,
    /// Tags for filtering and search.
    pub tags: Vec<String>,
    /// Whether the product can be purchased right now.
    pub in_stock: bool,
    /// Headline features for the detail page.
    pub features: Vec<String>,
    /// Ordered specification name/value pairs.
    pub specifications: Vec<(String, String)>,
}

impl Product {
    /// Create a minimal product; listing fields start empty.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            discount_price: None,
            rating: 0.0,
            review_count: 0,
            images: Vec::new(),
            category: String::new(),
            tags: Vec::new(),
            in_stock: true,
            features: Vec::new(),
            specifications: Vec::new(),
        }
    }

    /// The price a buyer actually pays: the sale price when present,
    /// otherwise the base price.
    pub fn effective_price(&self) -> Money {
        self.discount_price.unwrap_or(self.price)
    }

    /// Check if this product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.discount_price
            .map(|sale| sale < self.price)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.discount_price.and_then(|sale| {
            if sale < self.price && self.price.is_positive() {
                let savings = self.price - sale;
                Some(savings.cents() as f64 / self.price.cents() as f64 * 100.0)
            } else {
                None
            }
        })
    }
}
