//! Search module.
//!
//! Debounced search-as-you-type over the catalog.

mod live;

pub use live::{LiveSearch, SearchSnapshot};
