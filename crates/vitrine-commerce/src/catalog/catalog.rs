//! In-memory catalog service.

use crate::catalog::{Product, Review};
use crate::ids::ProductId;

/// Read-only catalog of products and their reviews.
///
/// Lookups that miss return empty results rather than errors; the
/// storefront renders an empty state for them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Create a catalog over the given products and reviews.
    pub fn new(products: Vec<Product>, reviews: Vec<Review>) -> Self {
        Self { products, reviews }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    pub fn get_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in the given category (exact match).
    pub fn list_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products carrying the given tag.
    pub fn list_by_tag(&self, tag: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Case-insensitive substring search over name, description, category,
    /// and tags.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Reviews for the given product, in dataset order.
    pub fn reviews_for(&self, id: &ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| &r.product_id == id)
            .collect()
    }

    /// Average star rating across the product's reviews, if it has any.
    pub fn average_rating(&self, id: &ProductId) -> Option<f64> {
        let reviews = self.reviews_for(id);
        if reviews.is_empty() {
            return None;
        }
        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(sum) / reviews.len() as f64)
    }
}
