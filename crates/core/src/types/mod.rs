//! Core types for Tradewear.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod phone;
pub mod price;
pub mod quantity;
pub mod status;

pub use id::*;
pub use phone::format_phone_number;
pub use price::format_won;
pub use quantity::{Quantity, QuantityError};
pub use status::*;
