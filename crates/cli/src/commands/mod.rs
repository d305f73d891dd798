//! Command implementations.
//!
//! Each command writes its report to stdout; diagnostics go through
//! `tracing` to stderr.

pub mod cart;
pub mod catalog;
pub mod options;

use std::io::{self, Write};

use tradewear_storefront::cart::{CartManager, FileSlotStore};
use tradewear_storefront::config::StorefrontConfig;
use tradewear_storefront::error::Result;
use tradewear_storefront::records::RecordStore;
use tradewear_storefront::telemetry::LogCapture;

/// Load the configured catalog, or the bundled one when none is set.
fn load_records(config: &StorefrontConfig) -> Result<RecordStore> {
    let store = match &config.catalog_path {
        Some(path) => RecordStore::from_path(path)?,
        None => RecordStore::bundled()?,
    };
    Ok(store)
}

/// Cart manager over the configured file-backed slot.
fn cart_manager(config: &StorefrontConfig) -> CartManager<FileSlotStore> {
    CartManager::with_slot(
        FileSlotStore::new(config.data_dir.clone()),
        config.cart_slot.clone(),
    )
}

/// Write captured log entries to stderr, oldest first.
pub fn print_log(capture: &LogCapture) -> io::Result<()> {
    let mut err = io::stderr().lock();
    writeln!(err, "-- {} captured log entries --", capture.len())?;
    for entry in capture.entries() {
        writeln!(
            err,
            "{} {:>5} {}: {}",
            entry.time.format("%H:%M:%S%.3f"),
            entry.level,
            entry.target,
            entry.message
        )?;
    }
    Ok(())
}
