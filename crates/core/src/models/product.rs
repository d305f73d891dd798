//! Product listings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CartItem;
use crate::types::{ProductId, Quantity, SellerId};

/// A product listed by a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// URL-safe handle used in product links.
    pub slug: String,
    pub title: String,
    pub category: String,
    /// Unit price in won.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub seller: SellerId,
    /// Seller's business name for display.
    pub seller_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build the cart line for adding `quantity` units of this product.
    #[must_use]
    pub fn to_cart_item(&self, quantity: Quantity) -> CartItem {
        CartItem {
            product_id: self.id.clone(),
            product_name: self.title.clone(),
            product_slug: self.slug.clone(),
            seller: self.seller.clone(),
            price: self.price,
            quantity,
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }
}
