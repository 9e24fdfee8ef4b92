//! In-memory store, used by tests and embedders.

use std::collections::HashMap;

use super::{Store, StoreError, StoreKey};

/// A store backed by a `HashMap`. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<StoreKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(&key).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), StoreError> {
        self.entries.remove(&key);
        Ok(())
    }
}
