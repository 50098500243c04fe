//! The wishlist store.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::store::{WatcherId, Watchers};

/// A liked product.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    /// Snapshot of the product at the time it was liked.
    pub product: Product,
}

/// Change events emitted to wishlist watchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistEvent {
    /// A product was liked.
    Added(ProductId),
    /// A product was un-liked.
    Removed(ProductId),
    /// The list was emptied.
    Cleared,
}

/// A set of liked products, keyed by product id.
///
/// Insertion order is preserved for display. Adding an id that is already
/// present is a no-op: the first snapshot wins and is not refreshed.
#[derive(Debug, Default)]
pub struct WishlistStore {
    entries: Vec<WishlistEntry>,
    watchers: Watchers<WishlistEvent>,
}

impl WishlistStore {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product if it is not already present. Returns whether it was added.
    pub fn add(&mut self, product: Product) -> bool {
        let id = product.id.clone();
        if self.contains(id.clone()) {
            return false;
        }
        self.entries.push(WishlistEntry { product });
        tracing::debug!(product = %id, "added to wishlist");
        self.watchers.notify(&WishlistEvent::Added(id));
        true
    }

    /// Remove a product by id. A miss is a no-op.
    pub fn remove(&mut self, id: impl Into<ProductId>) -> bool {
        let id = id.into();
        let len_before = self.entries.len();
        self.entries.retain(|e| e.product.id != id);
        let removed = self.entries.len() < len_before;
        if removed {
            tracing::debug!(product = %id, "removed from wishlist");
            self.watchers.notify(&WishlistEvent::Removed(id));
        }
        removed
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.watchers.notify(&WishlistEvent::Cleared);
        }
    }

    /// Membership test with normalized id comparison: numeric and string
    /// forms of the same id agree.
    pub fn contains(&self, id: impl Into<ProductId>) -> bool {
        let id = id.into();
        self.entries.iter().any(|e| e.product.id == id)
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Number of liked products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a watcher for wishlist events.
    pub fn subscribe(&mut self, callback: impl Fn(&WishlistEvent) + 'static) -> WatcherId {
        self.watchers.subscribe(callback)
    }

    /// Remove a watcher.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        self.watchers.unsubscribe(id)
    }
}
