//! The product comparison store.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::store::{WatcherId, Watchers};

/// Maximum number of products in a comparison.
pub const MAX_COMPARE: usize = 3;

/// A product in the comparison shortlist.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareEntry {
    /// Snapshot of the product when it was added.
    pub product: Product,
}

/// Change events emitted to compare watchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareEvent {
    /// A product joined the comparison.
    Added(ProductId),
    /// A product left the comparison.
    Removed(ProductId),
    /// The comparison was emptied.
    Cleared,
}

/// An ordered comparison shortlist capped at [`MAX_COMPARE`] products.
///
/// Insertion order is preserved for the side-by-side table. Once the list is
/// full, further adds are dropped rather than evicting an earlier entry.
#[derive(Debug, Default)]
pub struct CompareStore {
    entries: Vec<CompareEntry>,
    watchers: Watchers<CompareEvent>,
}

impl CompareStore {
    /// Create an empty comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the comparison.
    ///
    /// A duplicate id is a no-op. The list is appended to and then truncated
    /// to capacity, so an add to a full list is dropped. Returns whether the
    /// product is in the comparison afterwards because of this call.
    pub fn add(&mut self, product: Product) -> bool {
        let id = product.id.clone();
        if self.contains(id.clone()) {
            return false;
        }
        self.entries.push(CompareEntry { product });
        self.entries.truncate(MAX_COMPARE);

        let retained = self.contains(id.clone());
        if retained {
            tracing::debug!(product = %id, "added to comparison");
            self.watchers.notify(&CompareEvent::Added(id));
        } else {
            tracing::debug!(product = %id, "comparison full, add dropped");
        }
        retained
    }

    /// Remove a product by id. A miss is a no-op.
    pub fn remove(&mut self, id: impl Into<ProductId>) -> bool {
        let id = id.into();
        let len_before = self.entries.len();
        self.entries.retain(|e| e.product.id != id);
        let removed = self.entries.len() < len_before;
        if removed {
            self.watchers.notify(&CompareEvent::Removed(id));
        }
        removed
    }

    /// Empty the comparison.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.watchers.notify(&CompareEvent::Cleared);
        }
    }

    /// Membership test with normalized id comparison.
    pub fn contains(&self, id: impl Into<ProductId>) -> bool {
        let id = id.into();
        self.entries.iter().any(|e| e.product.id == id)
    }

    /// Remaining capacity, used to render placeholder slots. Never negative.
    pub fn empty_slots(&self) -> usize {
        MAX_COMPARE.saturating_sub(self.entries.len())
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[CompareEntry] {
        &self.entries
    }

    /// Products in comparison order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.entries.iter().map(|e| &e.product)
    }

    /// Number of products in the comparison.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the comparison is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a watcher for compare events.
    pub fn subscribe(&mut self, callback: impl Fn(&CompareEvent) + 'static) -> WatcherId {
        self.watchers.subscribe(callback)
    }

    /// Remove a watcher.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        self.watchers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::new(1000, Currency::USD))
    }

    #[test]
    fn test_capacity_drops_fourth_add() {
        let mut compare = CompareStore::new();
        assert!(compare.add(product(1)));
        assert!(compare.add(product(2)));
        assert!(compare.add(product(3)));
        assert!(!compare.add(product(4)));

        assert_eq!(compare.len(), 3);
        let ids: Vec<_> = compare.products().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_duplicate_add_keeps_order_and_count() {
        let mut compare = CompareStore::new();
        compare.add(product(1));
        compare.add(product(2));
        assert!(!compare.add(product(1)));

        assert_eq!(compare.len(), 2);
        let ids: Vec<_> = compare.products().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_empty_slots() {
        let mut compare = CompareStore::new();
        assert_eq!(compare.empty_slots(), 3);
        compare.add(product(1));
        assert_eq!(compare.empty_slots(), 2);
        compare.add(product(2));
        compare.add(product(3));
        assert_eq!(compare.empty_slots(), 0);

        // A dropped add does not go negative.
        compare.add(product(4));
        assert_eq!(compare.empty_slots(), 0);
    }

    #[test]
    fn test_remove_reopens_a_slot() {
        let mut compare = CompareStore::new();
        compare.add(product(1));
        compare.add(product(2));
        compare.add(product(3));
        compare.remove(2);

        assert!(compare.add(product(4)));
        let ids: Vec<_> = compare.products().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "4"]);
    }

    #[test]
    fn test_remove_miss_is_noop() {
        let mut compare = CompareStore::new();
        compare.add(product(1));
        assert!(!compare.remove(99));
        assert_eq!(compare.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut compare = CompareStore::new();
        compare.add(product(1));
        compare.clear();
        assert!(compare.is_empty());
        assert_eq!(compare.empty_slots(), 3);
    }
}
