//! Tradewear Core - Shared domain types.
//!
//! This crate provides the types used across all Tradewear components:
//! - `storefront` - Catalog queries and the shopping cart
//! - `cli` - Command-line front end over the storefront library
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no storage
//! access, no logging setup. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs and quantities, status enums, display formatting
//! - [`models`] - Catalog records (products, orders, registration requests) and cart items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
