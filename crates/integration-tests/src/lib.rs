//! Integration tests for Tradewear.
//!
//! These exercise the storefront library the way a front end drives it: the
//! bundled catalog as the record source and a file-backed cart slot in a
//! temporary directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tradewear-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_queries` - Filtering and sorting the bundled records
//! - `cart_flow` - Cart operations against a file-backed slot

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use tempfile::TempDir;
use tradewear_core::{CartItem, Product, ProductId, Quantity};
use tradewear_storefront::cart::{CartManager, FileSlotStore};
use tradewear_storefront::records::RecordStore;

/// Shared fixture: bundled records plus a cart in a private directory.
pub struct TestContext {
    pub records: RecordStore,
    pub cart: CartManager<FileSlotStore>,
    dir: TempDir,
}

impl TestContext {
    /// Load the bundled catalog and open a cart in a fresh temp directory.
    ///
    /// # Panics
    ///
    /// Panics if the bundled catalog is invalid or no temp dir can be made.
    #[must_use]
    pub fn new() -> Self {
        let records = RecordStore::bundled().expect("bundled catalog should parse");
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let cart = CartManager::new(FileSlotStore::new(dir.path()));
        Self { records, cart, dir }
    }

    /// Directory backing the cart slot.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// A second manager over the same slot, as another process would see it.
    #[must_use]
    pub fn reopen_cart(&self) -> CartManager<FileSlotStore> {
        CartManager::with_slot(FileSlotStore::new(self.dir.path()), self.cart.slot())
    }

    /// Look up a bundled product.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the bundled catalog.
    #[must_use]
    pub fn product(&self, id: &str) -> &Product {
        self.records
            .product(&ProductId::new(id))
            .expect("product should exist in bundled catalog")
    }

    /// Cart line for `units` of bundled product `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is unknown or `units` is zero.
    #[must_use]
    pub fn line(&self, id: &str, units: u32) -> CartItem {
        self.product(id)
            .to_cart_item(Quantity::new(units).expect("units must be positive"))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
