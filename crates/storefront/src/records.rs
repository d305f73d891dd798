//! Read-only record store.
//!
//! Products, orders, and registration requests are loaded once from a JSON
//! catalog document and only ever read afterwards.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tradewear_core::{Order, Product, ProductId, RegistrationRequest};

/// Demo catalog shipped with the storefront.
const BUNDLED_CATALOG: &str = include_str!("../fixtures/catalog.json");

/// Errors loading a catalog document.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory collections the list screens query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordStore {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub registrations: Vec<RegistrationRequest>,
}

impl RecordStore {
    /// Load the bundled demo catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Parse`] if the bundled document is invalid.
    pub fn bundled() -> Result<Self, RecordStoreError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load a catalog document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecordStoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RecordStoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            products = store.products.len(),
            orders = store.orders.len(),
            registrations = store.registrations.len(),
            "Catalog loaded"
        );
        Ok(store)
    }

    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Parse`] if `json` is not a valid catalog.
    pub fn from_json(json: &str) -> Result<Self, RecordStoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }
}
