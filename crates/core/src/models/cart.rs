//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, Quantity, SellerId};

/// One line in the shopping cart, keyed by product.
///
/// The persisted cart slot holds a JSON array of these objects using
/// camelCase field names:
///
/// ```json
/// [{"productId":"p1","productName":"Denim Jacket","productSlug":"denim-jacket",
///   "seller":"s1","price":45000.0,"quantity":2,"thumbnailUrl":"/img/p1.jpg"}]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub product_slug: String,
    /// Seller every line in the cart must share.
    pub seller: SellerId,
    /// Unit price in won.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl CartItem {
    /// Price of the whole line (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity.get())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item() -> CartItem {
        CartItem {
            product_id: ProductId::new("p1"),
            product_name: "Denim Jacket".to_string(),
            product_slug: "denim-jacket".to_string(),
            seller: SellerId::new("s1"),
            price: Decimal::new(45_000, 0),
            quantity: Quantity::new(2).unwrap(),
            thumbnail_url: None,
        }
    }

    #[test]
    fn test_serializes_camel_case_without_thumbnail() {
        let json: serde_json::Value = serde_json::to_value(item()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "productId": "p1",
                "productName": "Denim Jacket",
                "productSlug": "denim-jacket",
                "seller": "s1",
                "price": 45000.0,
                "quantity": 2,
            })
        );
    }

    #[test]
    fn test_deserializes_integer_price_and_thumbnail() {
        let parsed: CartItem = serde_json::from_str(
            r#"{"productId":"p1","productName":"Denim Jacket","productSlug":"denim-jacket",
                "seller":"s1","price":45000,"quantity":2,"thumbnailUrl":"/img/p1.jpg"}"#,
        )
        .unwrap();

        let mut expected = item();
        expected.thumbnail_url = Some("/img/p1.jpg".to_string());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_zero_quantity_is_malformed() {
        let result = serde_json::from_str::<CartItem>(
            r#"{"productId":"p1","productName":"x","productSlug":"x",
                "seller":"s1","price":1,"quantity":0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item().line_total(), Decimal::new(90_000, 0));
    }
}
