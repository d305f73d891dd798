//! Named key-value slots backing the persisted cart.
//!
//! The cart manager only needs two capabilities, read a slot and overwrite a
//! slot, so storage is injected as a [`SlotStore`]. [`MemorySlotStore`] keeps
//! slots in process (tests, embedding); [`FileSlotStore`] keeps one JSON file
//! per slot so the cart survives across sessions.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// Errors raised by slot storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Slot names are restricted to `[A-Za-z0-9_-]+`.
    #[error("Invalid slot name: {0:?}")]
    InvalidSlotName(String),

    /// Reading or writing the slot failed.
    #[error("Slot I/O error for {slot}: {source}")]
    Io {
        slot: String,
        #[source]
        source: io::Error,
    },

    /// A writer panicked while holding the in-memory store.
    #[error("Slot store lock poisoned")]
    Poisoned,
}

/// Read/overwrite access to named slots.
pub trait SlotStore {
    /// Read a slot. Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the slot exists but cannot be read.
    fn load(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replace the contents of a slot.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the slot cannot be written. The previous
    /// contents must be left intact in that case.
    fn store(&self, slot: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: SlotStore + ?Sized> SlotStore for &T {
    fn load(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).load(slot)
    }

    fn store(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        (**self).store(slot, value)
    }
}

impl<T: SlotStore + ?Sized> SlotStore for Arc<T> {
    fn load(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).load(slot)
    }

    fn store(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        (**self).store(slot, value)
    }
}

/// Check that `slot` is usable as a slot name (and therefore a file stem).
///
/// # Errors
///
/// Returns [`StorageError::InvalidSlotName`] for empty names or names with
/// characters outside `[A-Za-z0-9_-]`.
pub fn validate_slot_name(slot: &str) -> Result<(), StorageError> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidSlotName(slot.to_owned()))
    }
}

/// In-process slot storage.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot pre-populated with raw contents.
    #[must_use]
    pub fn with_slot(slot: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(slot.into(), value.into());
        Self {
            slots: RwLock::new(slots),
        }
    }
}

impl SlotStore for MemorySlotStore {
    fn load(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(slot).cloned())
    }

    fn store(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .write()
            .map_err(|_| StorageError::Poisoned)?
            .insert(slot.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed slot storage: slot `name` lives at `<dir>/name.json`.
///
/// Writes go to a sibling temp file that is renamed over the slot, so a
/// failed write never leaves a truncated slot behind.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidSlotName`] if `slot` is not a valid name.
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf, StorageError> {
        validate_slot_name(slot)?;
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl SlotStore for FileSlotStore {
    fn load(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                slot: slot.to_owned(),
                source,
            }),
        }
    }

    fn store(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(slot)?;
        let io_err = |source| StorageError::Io {
            slot: slot.to_owned(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slot_name() {
        assert!(validate_slot_name("ecommerce_cart").is_ok());
        assert!(validate_slot_name("cart-2").is_ok());
        assert!(validate_slot_name("").is_err());
        assert!(validate_slot_name("../etc/passwd").is_err());
        assert!(validate_slot_name("with space").is_err());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySlotStore::new();
        assert_eq!(store.load("cart").unwrap(), None);
        store.store("cart", "[]").unwrap();
        assert_eq!(store.load("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store_seeded_slot() {
        let store = MemorySlotStore::with_slot("cart", "not json");
        assert_eq!(store.load("cart").unwrap().as_deref(), Some("not json"));
        assert_eq!(store.load("other").unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path().join("nested"));
        assert_eq!(store.load("ecommerce_cart").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path().join("nested"));

        store.store("ecommerce_cart", "[1]").unwrap();
        store.store("ecommerce_cart", "[2]").unwrap();

        assert_eq!(store.load("ecommerce_cart").unwrap().as_deref(), Some("[2]"));
        assert!(dir.path().join("nested/ecommerce_cart.json").exists());
        assert!(!dir.path().join("nested/ecommerce_cart.json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_bad_slot_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());
        assert!(matches!(
            store.store("../escape", "[]"),
            Err(StorageError::InvalidSlotName(_))
        ));
    }
}
