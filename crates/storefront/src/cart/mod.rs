//! Single-seller shopping cart.
//!
//! The cart is an ordered list of [`CartItem`]s persisted as JSON in one
//! named slot of a [`SlotStore`]. [`CartManager`] is the only writer of that
//! slot and enforces the single-seller invariant: every item in a non-empty
//! cart shares the same seller.
//!
//! # Seller conflicts
//!
//! Adding an item from a different seller does not fail. The existing cart is
//! discarded and the new item becomes its only line. Callers are expected to
//! check [`CartManager::seller_conflict`] and warn the user first.
//!
//! # Concurrency
//!
//! Each mutating call is a load/modify/store sequence with no locking across
//! the three steps. Two processes sharing one slot can lose each other's
//! updates; callers that need multi-writer consistency must coordinate
//! outside this module.

mod store;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;
use tradewear_core::{CartItem, ProductId, Quantity, SellerId};

pub use store::{FileSlotStore, MemorySlotStore, SlotStore, StorageError, validate_slot_name};

/// Slot name used when none is configured.
pub const DEFAULT_CART_SLOT: &str = "ecommerce_cart";

/// Errors from cart writes. Reads never fail.
#[derive(Debug, Error)]
pub enum CartError {
    /// The slot could not be written; the persisted cart is unchanged.
    #[error("Cart storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be encoded.
    #[error("Cart serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Which seller, if any, the cart is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartState {
    Empty,
    SingleSeller(SellerId),
}

/// What [`CartManager::add_to_cart`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was not in the cart and was appended.
    Appended,
    /// The product was already in the cart; its quantity is now `quantity`.
    Merged { quantity: Quantity },
    /// The cart held another seller's items, which were discarded.
    ReplacedSeller { previous: SellerId },
}

/// Totals for a cart badge or checkout summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub seller: Option<SellerId>,
    /// Number of distinct products.
    pub line_count: usize,
    /// Sum of all line quantities.
    pub item_count: u64,
    /// Sum of `price * quantity` over all lines.
    pub subtotal: Decimal,
}

impl CartSummary {
    fn of(items: &[CartItem]) -> Self {
        Self {
            seller: items.first().map(|item| item.seller.clone()),
            line_count: items.len(),
            item_count: total_quantity(items),
            subtotal: items.iter().map(CartItem::line_total).sum(),
        }
    }
}

fn total_quantity(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity.get())).sum()
}

/// Owner of the persisted cart slot.
#[derive(Debug, Clone)]
pub struct CartManager<S> {
    store: S,
    slot: String,
}

impl<S: SlotStore> CartManager<S> {
    /// Create a manager over the [`DEFAULT_CART_SLOT`] of `store`.
    pub fn new(store: S) -> Self {
        Self::with_slot(store, DEFAULT_CART_SLOT)
    }

    /// Create a manager over a specific slot of `store`.
    pub fn with_slot(store: S, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    /// Name of the slot this manager owns.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the cart.
    ///
    /// A missing, unreadable, or malformed slot yields an empty cart; the
    /// failure is logged and never returned.
    #[instrument(skip(self), fields(slot = %self.slot))]
    pub fn get_cart(&self) -> Vec<CartItem> {
        let raw = match self.store.load(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cart slot, treating cart as empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Malformed cart data, treating cart as empty");
            Vec::new()
        })
    }

    /// Overwrite the cart with `items`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the cart cannot be encoded or written. The
    /// previously persisted cart is left untouched.
    #[instrument(skip(self, items), fields(slot = %self.slot, lines = items.len()))]
    pub fn save_cart(&self, items: &[CartItem]) -> Result<(), CartError> {
        let json = serde_json::to_string(items)?;
        self.store.store(&self.slot, &json).map_err(|e| {
            tracing::error!(error = %e, "Failed to save cart");
            CartError::from(e)
        })
    }

    /// Add `item` to the cart.
    ///
    /// - If the cart holds another seller's items they are discarded first.
    /// - If the product is already in the cart the quantities are summed.
    /// - Otherwise the item is appended.
    ///
    /// The result is persisted with a single write.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the updated cart cannot be persisted, in which
    /// case nothing changes.
    #[instrument(
        skip(self, item),
        fields(slot = %self.slot, product_id = %item.product_id, seller = %item.seller)
    )]
    pub fn add_to_cart(&self, item: CartItem) -> Result<AddOutcome, CartError> {
        let mut cart = self.get_cart();
        let mut outcome = AddOutcome::Appended;

        if let Some(existing) = cart.first().map(|line| line.seller.clone())
            && existing != item.seller
        {
            tracing::warn!(
                existing = %existing,
                new = %item.seller,
                "Cart seller conflict, clearing cart before add"
            );
            cart.clear();
            outcome = AddOutcome::ReplacedSeller { previous: existing };
        }

        if let Some(line) = cart.iter_mut().find(|line| line.product_id == item.product_id) {
            line.quantity = line.quantity.merge(item.quantity);
            outcome = AddOutcome::Merged {
                quantity: line.quantity,
            };
        } else {
            cart.push(item);
        }

        self.save_cart(&cart)?;
        tracing::debug!(?outcome, "Cart updated");
        Ok(outcome)
    }

    /// Remove the line for `product_id`.
    ///
    /// Returns whether a line was removed. Removing an absent product is not
    /// an error and does not touch the slot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the updated cart cannot be persisted.
    #[instrument(skip(self), fields(slot = %self.slot))]
    pub fn remove_from_cart(&self, product_id: &ProductId) -> Result<bool, CartError> {
        let mut cart = self.get_cart();
        let before = cart.len();
        cart.retain(|line| &line.product_id != product_id);

        if cart.len() == before {
            return Ok(false);
        }
        self.save_cart(&cart)?;
        Ok(true)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the empty cart cannot be persisted.
    #[instrument(skip(self), fields(slot = %self.slot))]
    pub fn clear_cart(&self) -> Result<(), CartError> {
        self.save_cart(&[])
    }

    /// Seller of the cart's first line, or `None` for an empty cart.
    #[must_use]
    pub fn cart_seller(&self) -> Option<SellerId> {
        self.get_cart().into_iter().next().map(|item| item.seller)
    }

    /// Sum of all line quantities; `0` for an empty cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        total_quantity(&self.get_cart())
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        CartSummary::of(&self.get_cart()).subtotal
    }

    /// Current state of the single-seller state machine.
    #[must_use]
    pub fn state(&self) -> CartState {
        self.cart_seller()
            .map_or(CartState::Empty, CartState::SingleSeller)
    }

    /// Whether adding an item from `seller` would discard the current cart.
    #[must_use]
    pub fn seller_conflict(&self, seller: &SellerId) -> bool {
        self.cart_seller().is_some_and(|current| &current != seller)
    }

    /// Seller, line count, item count, and subtotal from a single read.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.get_cart())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(product: &str, seller: &str, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(product),
            product_name: format!("Product {product}"),
            product_slug: format!("product-{product}"),
            seller: SellerId::new(seller),
            price: Decimal::new(10_000, 0),
            quantity: Quantity::new(quantity).unwrap(),
            thumbnail_url: None,
        }
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore(MemorySlotStore);

    impl SlotStore for ReadOnlyStore {
        fn load(&self, slot: &str) -> Result<Option<String>, StorageError> {
            self.0.load(slot)
        }

        fn store(&self, slot: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                slot: slot.to_owned(),
                source: std::io::Error::other("read-only"),
            })
        }
    }

    /// A store whose reads always fail.
    struct UnreadableStore;

    impl SlotStore for UnreadableStore {
        fn load(&self, _slot: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Poisoned)
        }

        fn store(&self, _slot: &str, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_cart() {
        let cart = CartManager::new(MemorySlotStore::new());
        assert!(cart.get_cart().is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.cart_seller(), None);
        assert_eq!(cart.state(), CartState::Empty);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_add_then_merge_same_product() {
        let cart = CartManager::new(MemorySlotStore::new());

        assert_eq!(cart.add_to_cart(item("p1", "A", 2)).unwrap(), AddOutcome::Appended);
        let items = cart.get_cart();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity.get(), 2);

        let outcome = cart.add_to_cart(item("p1", "A", 3)).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Merged {
                quantity: Quantity::new(5).unwrap()
            }
        );
        let items = cart.get_cart();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity.get(), 5);
    }

    #[test]
    fn test_merge_keeps_original_line_details() {
        let cart = CartManager::new(MemorySlotStore::new());
        cart.add_to_cart(item("p1", "A", 1)).unwrap();

        let mut repriced = item("p1", "A", 1);
        repriced.price = Decimal::new(1, 0);
        repriced.product_name = "Renamed".to_owned();
        cart.add_to_cart(repriced).unwrap();

        let items = cart.get_cart();
        assert_eq!(items[0].price, Decimal::new(10_000, 0));
        assert_eq!(items[0].product_name, "Product p1");
    }

    #[test]
    fn test_append_preserves_order() {
        let cart = CartManager::new(MemorySlotStore::new());
        cart.add_to_cart(item("p1", "A", 1)).unwrap();
        cart.add_to_cart(item("p2", "A", 1)).unwrap();
        cart.add_to_cart(item("p3", "A", 1)).unwrap();

        let ids: Vec<String> = cart
            .get_cart()
            .into_iter()
            .map(|i| i.product_id.into_inner())
            .collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);
    }

    #[test]
    fn test_seller_conflict_evicts_previous_cart() {
        let cart = CartManager::new(MemorySlotStore::new());
        cart.add_to_cart(item("p1", "A", 1)).unwrap();
        cart.add_to_cart(item("p3", "A", 4)).unwrap();

        assert!(cart.seller_conflict(&SellerId::new("B")));
        assert!(!cart.seller_conflict(&SellerId::new("A")));

        let outcome = cart.add_to_cart(item("p2", "B", 1)).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::ReplacedSeller {
                previous: SellerId::new("A")
            }
        );
        assert_eq!(cart.get_cart(), vec![item("p2", "B", 1)]);
        assert_eq!(cart.state(), CartState::SingleSeller(SellerId::new("B")));
    }

    #[test]
    fn test_conflicting_add_of_same_product_id_does_not_merge() {
        let cart = CartManager::new(MemorySlotStore::new());
        cart.add_to_cart(item("p1", "A", 5)).unwrap();
        cart.add_to_cart(item("p1", "B", 1)).unwrap();

        assert_eq!(cart.get_cart(), vec![item("p1", "B", 1)]);
    }

    #[test]
    fn test_remove_present_and_absent() {
        let cart = CartManager::new(MemorySlotStore::new());
        cart.add_to_cart(item("p1", "A", 1)).unwrap();
        cart.add_to_cart(item("p2", "A", 2)).unwrap();

        let before = cart.get_cart();
        assert!(!cart.remove_from_cart(&ProductId::new("nope")).unwrap());
        assert_eq!(cart.get_cart(), before);

        assert!(cart.remove_from_cart(&ProductId::new("p1")).unwrap());
        assert_eq!(cart.get_cart(), vec![item("p2", "A", 2)]);
    }

    #[test]
    fn test_removing_last_item_returns_to_empty() {
        let cart = CartManager::new(MemorySlotStore::new());
        cart.add_to_cart(item("p1", "A", 1)).unwrap();
        cart.remove_from_cart(&ProductId::new("p1")).unwrap();
        assert_eq!(cart.state(), CartState::Empty);
    }

    #[test]
    fn test_clear() {
        let cart = CartManager::new(MemorySlotStore::new());
        cart.add_to_cart(item("p1", "A", 3)).unwrap();
        cart.clear_cart().unwrap();
        assert!(cart.get_cart().is_empty());
        assert_eq!(cart.store().load(DEFAULT_CART_SLOT).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_item_count_and_summary() {
        let cart = CartManager::new(MemorySlotStore::new());
        cart.add_to_cart(item("p1", "A", 2)).unwrap();
        cart.add_to_cart(item("p2", "A", 3)).unwrap();

        assert_eq!(cart.item_count(), 5);
        assert_eq!(
            cart.summary(),
            CartSummary {
                seller: Some(SellerId::new("A")),
                line_count: 2,
                item_count: 5,
                subtotal: Decimal::new(50_000, 0),
            }
        );
    }

    #[test]
    fn test_save_then_get_round_trip() {
        let cart = CartManager::new(MemorySlotStore::new());
        let mut with_thumb = item("p2", "A", 7);
        with_thumb.thumbnail_url = Some("/img/p2.jpg".to_owned());
        with_thumb.price = Decimal::new(1_999, 2);
        let items = vec![item("p1", "A", 1), with_thumb];

        cart.save_cart(&items).unwrap();
        assert_eq!(cart.get_cart(), items);
    }

    #[test]
    fn test_malformed_slot_reads_as_empty() {
        for raw in ["not json", "{}", "[{\"productId\":\"p1\"}]", "[{\"productId\":\"p1\",\"productName\":\"x\",\"productSlug\":\"x\",\"seller\":\"A\",\"price\":1,\"quantity\":0}]"] {
            let cart = CartManager::new(MemorySlotStore::with_slot(DEFAULT_CART_SLOT, raw));
            assert!(cart.get_cart().is_empty(), "raw {raw:?}");
            assert_eq!(cart.item_count(), 0);
        }
    }

    #[test]
    fn test_add_over_malformed_slot_starts_fresh() {
        let cart = CartManager::new(MemorySlotStore::with_slot(DEFAULT_CART_SLOT, "garbage"));
        cart.add_to_cart(item("p1", "A", 1)).unwrap();
        assert_eq!(cart.get_cart(), vec![item("p1", "A", 1)]);
    }

    #[test]
    fn test_unreadable_slot_reads_as_empty() {
        let cart = CartManager::new(UnreadableStore);
        assert!(cart.get_cart().is_empty());
        assert_eq!(cart.state(), CartState::Empty);
    }

    #[test]
    fn test_failed_write_leaves_cart_unchanged() {
        let seeded = serde_json::to_string(&vec![item("p1", "A", 1)]).unwrap();
        let cart = CartManager::new(ReadOnlyStore(MemorySlotStore::with_slot(
            DEFAULT_CART_SLOT,
            seeded,
        )));

        assert!(matches!(
            cart.add_to_cart(item("p2", "B", 1)),
            Err(CartError::Storage(_))
        ));
        assert!(cart.clear_cart().is_err());
        assert_eq!(cart.get_cart(), vec![item("p1", "A", 1)]);
    }

    #[test]
    fn test_custom_slot_is_isolated() {
        let store = MemorySlotStore::new();
        let first = CartManager::with_slot(&store, "cart_a");
        let second = CartManager::with_slot(&store, "cart_b");

        first.add_to_cart(item("p1", "A", 1)).unwrap();
        assert_eq!(first.item_count(), 1);
        assert_eq!(second.item_count(), 0);
        assert_eq!(second.slot(), "cart_b");
    }
}
