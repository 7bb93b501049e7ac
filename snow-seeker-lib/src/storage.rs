//! Durable key-value storage.
//!
//! The favorites store only needs "read one value at startup, overwrite it on
//! every change", so the seam is a two-method trait. [`FileStore`] keeps one
//! file per key; [`MemoryStore`] backs tests and throwaway sessions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StorageError;

/// Minimal durable key-value storage.
///
/// `set` must be durable when it returns: a crash right after it must not
/// lose the written value.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, or `None` if nothing was written yet.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never sees a half-written file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path.display().to_string(), e)),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let io_err = |e| StorageError::io(path.display().to_string(), e);

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;

        // Write atomically
        let tmp = path.with_extension("json.tmp");
        {
            use std::io::Write;
            let mut file = std::fs::File::create(&tmp).map_err(io_err)?;
            file.write_all(value).map_err(io_err)?;
            file.sync_all().map_err(io_err)?;
        }
        std::fs::rename(&tmp, &path).map_err(io_err)?;
        sync_dir(&self.dir).map_err(io_err)?;
        Ok(())
    }
}

/// Flush directory metadata so a completed rename survives power loss.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

// Directories cannot be opened as files here; the rename is already durable.
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

/// In-memory storage. Clones share the same contents, which lets a test
/// drop a store and open a fresh one over the "same disk".
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
