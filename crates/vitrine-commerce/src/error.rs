//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout was entered with nothing in the cart.
    #[error("checkout requires a non-empty cart")]
    EmptyCart,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Blob-store error.
    #[error("store error: {0}")]
    Store(#[from] vitrine_kv::StoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}
