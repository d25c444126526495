//! JSON key-value store over a data directory.
//!
//! Every piece of application state - the cart, the session, the order list,
//! the catalog override - lives under a well-known key (see [`keys`]), one
//! JSON file per key. This is the single persistence primitive of the whole
//! system; there is no database.
//!
//! # Failure model
//!
//! Reads degrade: a missing file means "no value", and a file that fails to
//! parse is logged with `tracing::warn!` and treated the same way, so callers
//! always get default state rather than an error. Writes go through a
//! temp-file-and-rename so a crash mid-write never leaves a torn file, but
//! there is no atomicity *across* keys: a crash between two `set` calls (say,
//! writing an order and clearing the cart) leaves the store partially
//! updated. Accepted - single user, local data, low stakes.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

pub mod keys;

/// Errors raised by write operations on the store.
///
/// Reads never surface this type; they degrade to `None` (see crate docs).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Value could not be serialized to JSON.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A directory-backed key-value store of JSON blobs.
#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Open (creating if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory this store lives in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and deserialize the value under `key`.
    ///
    /// Returns `None` when the key is absent. A value that exists but fails
    /// to read or parse is logged and also reported as `None` - callers get
    /// default state, never an error.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value, using default");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored value is corrupt, using default");
                None
            }
        }
    }

    /// Like [`KvStore::get`], but falls back to `T::default()`.
    #[must_use]
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_default()
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// Writes to a temp file in the same directory and renames it into
    /// place, so readers never observe a half-written value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the filesystem write fails.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Remove the value under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, KvStore) {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let (_dir, store) = store();
        assert_eq!(store.get::<Vec<String>>("nothing"), None);
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let (_dir, store) = store();
        store.set("cart", &vec!["a".to_owned(), "b".to_owned()]).unwrap();
        let back: Vec<String> = store.get("cart").unwrap();
        assert_eq!(back, ["a", "b"]);
    }

    #[test]
    fn test_set_overwrites() {
        let (_dir, store) = store();
        store.set("flag", &true).unwrap();
        store.set("flag", &false).unwrap();
        assert_eq!(store.get::<bool>("flag"), Some(false));
    }

    #[test]
    fn test_corrupt_value_degrades_to_none() {
        let (dir, store) = store();
        fs::write(dir.path().join("cart.json"), b"{not json").unwrap();
        assert_eq!(store.get::<Vec<String>>("cart"), None);
        assert!(store.get_or_default::<Vec<String>>("cart").is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = store();
        store.set("flag", &true).unwrap();
        store.remove("flag").unwrap();
        store.remove("flag").unwrap();
        assert_eq!(store.get::<bool>("flag"), None);
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let (dir, store) = store();
        store.set("orders", &vec![1, 2, 3]).unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
