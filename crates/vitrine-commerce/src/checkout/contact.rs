//! Buyer contact details collected during checkout.

use serde::{Deserialize, Serialize};

/// Contact and shipping-address fields from the information step.
///
/// Fields start empty and fill in as the buyer types; no checkout
/// transition gates on them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
}

impl ContactDetails {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as a single line for the review panel.
    pub fn one_line(&self) -> String {
        [
            self.address.as_str(),
            self.city.as_str(),
            self.province.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Check if every field has been filled in.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty()
            && !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.address.is_empty()
            && !self.city.is_empty()
            && !self.province.is_empty()
            && !self.postal_code.is_empty()
            && !self.country.is_empty()
            && !self.phone.is_empty()
    }
}
