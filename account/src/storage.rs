//! Durable string key-value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists through this trait so the same logic runs over
//! browser `localStorage` (client), a JSON file (CLI) or a map (tests, SSR).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;

/// Error returned by a storage backend write.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No backing store is reachable (e.g. no `window` during SSR).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the write.
    #[error("storage write failed: {0}")]
    Write(String),
    /// Filesystem failure in a file-backed store.
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// String key-value persistence, in the shape of the Web Storage API.
pub trait KeyValueStorage {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot persist the value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot persist the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage used by tests and server-side rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
