//! Tradewear Storefront library.
//!
//! The behavioral core of the marketplace UI:
//!
//! - [`catalog`] - Multi-criteria filtering and sorting shared by the
//!   product, order, and registration lists
//! - [`cart`] - The persisted single-seller shopping cart
//! - [`options`] - Option lists backing sort/status/category selectors
//! - [`records`] - Read-only record store loaded from catalog fixtures
//!
//! Ambient concerns live alongside: [`config`], [`error`], [`telemetry`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod options;
pub mod records;
pub mod telemetry;

pub use cart::{AddOutcome, CartError, CartManager, CartState, CartSummary};
pub use catalog::{Criteria, Record, Selection, query};
