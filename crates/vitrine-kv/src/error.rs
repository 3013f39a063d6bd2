//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a blob store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store rejected the operation.
    #[error("store operation failed: {0}")]
    Backend(String),
}

impl StoreError {
    pub(crate) fn poisoned() -> Self {
        Self::Backend("store mutex poisoned".to_string())
    }
}
