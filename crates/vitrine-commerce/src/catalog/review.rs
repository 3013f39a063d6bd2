//! Customer review types.

use crate::ids::{ProductId, ReviewId};
use serde::{Deserialize, Serialize};

/// A customer review of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// The product being reviewed.
    pub product_id: ProductId,
    /// Display name of the reviewer.
    pub user_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review headline.
    pub title: String,
    /// Review body.
    pub comment: String,
    /// ISO-8601 date the review was posted.
    pub date: String,
    /// Whether the reviewer is a verified buyer.
    pub verified: bool,
}
