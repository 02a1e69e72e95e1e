//! The shopping cart: sole owner of the line-item sequence.
//!
//! Every mutating operation re-serializes the whole sequence into the
//! storage adapter before it returns, so memory and storage never
//! diverge. There are no deferred or batched writes.
//!
//! Misuse never panics and never returns an error: an out-of-range
//! index or a zero quantity degrades to a no-op with a sentinel
//! return (`None` / `false`).

use std::time::Duration;

use loomcraft_core::{LineItem, Price};

use crate::config::PageConfig;
use crate::error::StorageError;
use crate::notify::{Notice, NoticeSink, NullSink};
use crate::storage::StorageAdapter;

/// Ordered collection of [`LineItem`]s with write-through persistence.
///
/// Insertion order is display order. No two lines share an
/// (`id`, `size`) pair: adds that match an existing pair merge into it
/// by incrementing its quantity.
pub struct Cart<S: StorageAdapter> {
    items: Vec<LineItem>,
    storage: S,
    storage_key: String,
    toast_duration: Duration,
    sink: Box<dyn NoticeSink>,
}

impl<S: StorageAdapter> Cart<S> {
    /// Load the persisted cart, or start empty.
    ///
    /// An absent key is the normal first-visit case. A present but
    /// malformed payload is discarded with a logged diagnostic rather
    /// than propagated; the cart starts empty and the next mutation
    /// overwrites the bad payload.
    #[must_use]
    pub fn hydrate(storage: S, config: &PageConfig) -> Self {
        let items = match storage.get(&config.storage_key) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<LineItem>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    let err = StorageError::MalformedPayload(err);
                    tracing::warn!(error = %err, key = %config.storage_key, "discarding persisted cart");
                    Vec::new()
                }
            },
        };

        Self {
            items,
            storage,
            storage_key: config.storage_key.clone(),
            toast_duration: config.toast_duration,
            sink: Box::new(NullSink),
        }
    }

    /// Replace the notice sink, builder style.
    #[must_use]
    pub fn with_sink(mut self, sink: impl NoticeSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Add a candidate line to the cart.
    ///
    /// Merges into an existing line with the same (`id`, `size`) pair
    /// by incrementing its quantity; otherwise appends a copy of the
    /// candidate. A candidate with quantity zero would break the
    /// cart's quantity invariant and is silently ignored.
    ///
    /// Emits a `"<name> added to cart!"` notice.
    pub fn add(&mut self, item: LineItem) {
        if item.quantity == 0 {
            tracing::debug!(id = %item.id, "ignoring add with zero quantity");
            return;
        }

        let name = item.name.clone();
        match self.items.iter().position(|line| line.same_line(&item)) {
            Some(pos) => {
                if let Some(existing) = self.items.get_mut(pos) {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
            }
            None => self.items.push(item),
        }

        self.persist();
        self.notify(format!("{name} added to cart!"));
    }

    /// Remove the line at `index` in the current display order.
    ///
    /// Out of range is a no-op returning `None`. Otherwise the removed
    /// line is returned and a `"<name> removed from cart"` notice is
    /// emitted.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            return None;
        }

        let removed = self.items.remove(index);
        self.persist();
        self.notify(format!("{} removed from cart", removed.name));
        Some(removed)
    }

    /// Overwrite the quantity of the line at `index`.
    ///
    /// Rejects an out-of-range index or a zero quantity with `false`
    /// and no side effect; setting a quantity to zero is not removal.
    /// No notice is emitted on success.
    pub fn update_quantity(&mut self, index: usize, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        let Some(line) = self.items.get_mut(index) else {
            return false;
        };

        line.quantity = quantity;
        self.persist();
        true
    }

    /// Snapshot of the current lines in display order.
    ///
    /// The returned vector is independent: mutating it does not touch
    /// the cart.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// The line at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Sum of `price * quantity` over all lines, unrounded.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all lines, for the count badge.
    /// Saturates rather than overflowing.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empty the cart and persist the empty sequence.
    ///
    /// Emits a `"Cart cleared!"` notice.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
        self.notify("Cart cleared!".to_string());
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.items) {
            Ok(payload) => self.storage.set(&self.storage_key, &payload),
            Err(err) => {
                // Line items serialize infallibly in practice; log and
                // keep the in-memory state authoritative if they ever
                // stop doing so.
                tracing::warn!(error = %err, "failed to serialize cart");
            }
        }
    }

    fn notify(&mut self, message: String) {
        self.sink.push(Notice {
            message,
            dismiss_after: self.toast_duration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::SharedSink;
    use crate::storage::MemoryStorage;
    use loomcraft_core::{ProductId, Size};
    use rust_decimal::dec;

    fn item(id: &str, size: &str, quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::from(id),
            name: "Shirt".to_string(),
            price: Price::new(dec!(10)),
            quantity,
            image: "shirt.jpg".to_string(),
            size: Size::from(size),
        }
    }

    fn empty_cart() -> Cart<MemoryStorage> {
        Cart::hydrate(MemoryStorage::new(), &PageConfig::default())
    }

    #[test]
    fn test_hydrate_absent_key_is_empty() {
        let cart = empty_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_hydrate_malformed_payload_recovers_to_empty() {
        let config = PageConfig::default();
        let mut storage = MemoryStorage::new();
        storage.set(&config.storage_key, "{not a cart");

        let cart = Cart::hydrate(storage, &config);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_distinct_pairs_appends_in_order() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", 1));
        cart.add(item("p2", "M", 1));
        cart.add(item("p1", "L", 1));

        assert_eq!(cart.len(), 3);
        let items = cart.items();
        assert_eq!(items[0].id, ProductId::from("p1"));
        assert_eq!(items[1].id, ProductId::from("p2"));
        assert_eq!(items[2].size, Size::from("L"));
    }

    #[test]
    fn test_add_same_pair_merges_quantities() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", 1));
        cart.add(item("p1", "M", 2));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total(), Price::new(dec!(30)));
    }

    #[test]
    fn test_merge_saturates_instead_of_overflowing() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", u32::MAX));
        cart.add(item("p1", "M", 5));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_total_quantity_saturates_across_lines() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", u32::MAX));
        cart.add(item("p2", "L", 9));

        assert_eq!(cart.total_quantity(), u32::MAX);
    }

    #[test]
    fn test_add_zero_quantity_is_ignored() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_a_no_op() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", 1));

        assert!(cart.remove(1).is_none());
        assert!(cart.remove(99).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_returns_the_removed_line() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", 1));
        cart.add(item("p2", "M", 1));

        let removed = cart.remove(0).expect("line exists");
        assert_eq!(removed.id, ProductId::from("p1"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].id, ProductId::from("p2"));
    }

    #[test]
    fn test_update_quantity_rejects_zero_and_bad_index() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", 2));

        assert!(!cart.update_quantity(0, 0));
        assert!(!cart.update_quantity(5, 1));
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_overwrites_in_place() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", 2));

        assert!(cart.update_quantity(0, 7));
        assert_eq!(cart.items()[0].quantity, 7);
        assert_eq!(cart.total(), Price::new(dec!(70)));
    }

    #[test]
    fn test_items_snapshot_is_independent() {
        let mut cart = empty_cart();
        cart.add(item("p1", "M", 1));

        let mut snapshot = cart.items();
        snapshot[0].quantity = 99;
        snapshot.clear();

        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_total_quantity_sums_across_lines() {
        let mut cart = empty_cart();
        assert_eq!(cart.total_quantity(), 0);

        cart.add(item("p1", "M", 2));
        cart.add(item("p2", "L", 3));
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_clear_empties_and_persists() {
        let config = PageConfig::default();
        let storage = MemoryStorage::new();
        let mut cart = Cart::hydrate(storage.clone(), &config);

        cart.add(item("p1", "M", 1));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(storage.get(&config.storage_key), Some("[]".to_string()));
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let config = PageConfig::default();
        let storage = MemoryStorage::new();
        let mut cart = Cart::hydrate(storage.clone(), &config);

        cart.add(item("p1", "M", 1));
        let after_add = storage.get(&config.storage_key).expect("persisted");
        assert!(after_add.contains("\"p1\""));

        cart.update_quantity(0, 4);
        let after_update = storage.get(&config.storage_key).expect("persisted");
        assert!(after_update.contains("\"quantity\":4"));

        cart.remove(0);
        assert_eq!(storage.get(&config.storage_key), Some("[]".to_string()));
    }

    #[test]
    fn test_notices_for_add_remove_clear_but_not_update() {
        let sink = SharedSink::new();
        let mut cart = empty_cart().with_sink(sink.clone());

        cart.add(item("p1", "M", 1));
        cart.update_quantity(0, 2);
        cart.remove(0);
        cart.clear();

        assert_eq!(
            sink.messages(),
            vec![
                "Shirt added to cart!",
                "Shirt removed from cart",
                "Cart cleared!"
            ]
        );
    }

    #[test]
    fn test_rejected_operations_emit_nothing() {
        let sink = SharedSink::new();
        let mut cart = empty_cart().with_sink(sink.clone());

        assert!(cart.remove(0).is_none());
        assert!(!cart.update_quantity(0, 1));
        assert!(sink.messages().is_empty());
    }
}
