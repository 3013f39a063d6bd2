//! Blob-store port and the in-memory backend.

use crate::StoreError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A key-value store holding opaque byte blobs.
///
/// Serialization is the caller's concern; the store never inspects the
/// bytes it is handed.
pub trait BlobStore {
    /// Load the blob stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

impl<S: BlobStore + ?Sized> BlobStore for Arc<S> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

/// In-memory blob store.
///
/// Thread-safe behind a mutex so a single instance can be shared between
/// the owning process and tests via `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::poisoned())?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.load("absent").unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        store.save("cart", b"hello").unwrap();
        assert_eq!(store.load("cart").unwrap(), Some(b"hello".to_vec()));
    }

    #[test]
    fn test_save_replaces() {
        let store = MemoryStore::new();
        store.save("cart", b"old").unwrap();
        store.save("cart", b"new").unwrap();
        assert_eq!(store.load("cart").unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn test_shared_via_arc() {
        let store = Arc::new(MemoryStore::new());
        let alias = Arc::clone(&store);
        alias.save("cart", b"shared").unwrap();
        assert_eq!(store.load("cart").unwrap(), Some(b"shared".to_vec()));
    }
}
