//! Key-value persistence for notebook state.
//!
//! Five independent keys hold the whole persisted state. Collections are
//! JSON arrays; the selection, view and theme are plain strings. An empty
//! collection is stored as an absent key.

mod dir;
mod memory;

pub use dir::DirStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Keys of the persisted entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// JSON array of notes.
    Notes,
    /// JSON array of categories.
    Categories,
    /// Id of the selected note.
    LastSelected,
    /// Name of the active view.
    LastActiveView,
    /// `light` or `dark`.
    Theme,
}

impl StoreKey {
    #[cfg(test)]
    pub(crate) const ALL: [StoreKey; 5] = [
        StoreKey::Notes,
        StoreKey::Categories,
        StoreKey::LastSelected,
        StoreKey::LastActiveView,
        StoreKey::Theme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Notes => "notes",
            StoreKey::Categories => "categories",
            StoreKey::LastSelected => "lastSelected",
            StoreKey::LastActiveView => "lastActiveView",
            StoreKey::Theme => "theme",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("store path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid UTF-8 in stored value for '{key}'")]
    InvalidEncoding { key: StoreKey },

    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: StoreKey,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key-value store.
///
/// No transactions: each call stands alone.
pub trait Store {
    /// Returns the stored value, or `None` if the key is absent.
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: StoreKey) -> Result<(), StoreError>;
}

/// Reads a plain string entry, logging and swallowing backend errors.
pub fn read_string(store: &dyn Store, key: StoreKey) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::error!("failed to read '{}' from store: {}", key, e);
            None
        }
    }
}

/// Reads and decodes a JSON array entry.
///
/// Malformed data (not JSON, not an array, wrong record shape) and backend
/// errors are logged and treated as an absent key, yielding an empty list.
pub fn load_collection<T: DeserializeOwned>(store: &dyn Store, key: StoreKey) -> Vec<T> {
    let Some(raw) = read_string(store, key) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => {
            log::debug!("loaded {} item(s) from '{}'", items.len(), key);
            items
        }
        Err(e) => {
            log::error!("ignoring malformed '{}' entry: {}", key, e);
            Vec::new()
        }
    }
}

/// Writes a collection as a JSON array, removing the key when it is empty.
pub fn save_collection<T: Serialize>(
    store: &mut dyn Store,
    key: StoreKey,
    items: &[T],
) -> Result<(), StoreError> {
    if items.is_empty() {
        return store.remove(key);
    }
    let json = serde_json::to_string(items).map_err(|source| StoreError::Encode { key, source })?;
    store.set(key, &json)
}
