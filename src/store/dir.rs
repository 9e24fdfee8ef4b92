//! Directory-backed store: one file per key, replaced atomically.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{Store, StoreError, StoreKey};

/// A store that keeps each key in `<dir>/<key>`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash never leaves a half-written value behind.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotADirectory` if `dir` exists but is a file.
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        if dir.exists() && !dir.is_dir() {
            return Err(StoreError::NotADirectory { path: dir });
        }
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        log::debug!("opened store at {}", dir.display());
        Ok(Self { dir })
    }

    /// Returns the root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path holding `key`.
    pub fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(key.as_str())
    }
}

impl Store for DirStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| StoreError::InvalidEncoding { key })
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        temp.write_all(value.as_bytes())
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        temp.persist(&path).map_err(|e| StoreError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        log::trace!("wrote {} byte(s) to '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                log::trace!("removed '{}'", key);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}
