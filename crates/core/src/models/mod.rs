//! Marketplace records and cart line items.
//!
//! Catalog records ([`Product`], [`Order`], [`RegistrationRequest`]) are
//! read-only values owned by the record store. [`CartItem`] is the unit the
//! cart persists.

pub mod cart;
pub mod order;
pub mod product;
pub mod registration;

pub use cart::CartItem;
pub use order::{Order, OrderProduct, Party};
pub use product::Product;
pub use registration::RegistrationRequest;
