//! The shopping cart store.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::store::{WatcherId, Watchers};
use atelier_signals::PulseSignal;

/// Maximum quantity per line item.
pub const MAX_LINE_QUANTITY: i64 = 9999;

/// A (product, quantity) pairing in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Units of the product. Always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Line total: price * quantity.
    pub fn total(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }
}

/// Change events emitted to cart watchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added or its quantity incremented by an add.
    Added(ProductId),
    /// A line was removed.
    Removed(ProductId),
    /// A line's quantity was set directly.
    QuantityChanged(ProductId, i64),
    /// The cart was emptied.
    Cleared,
}

/// The cart: a flat mutable ledger of line items.
///
/// At most one line exists per product id. The subtotal is recomputed on
/// every read, never cached. Cart contents are session-local and reset on
/// reload by design.
#[derive(Debug)]
pub struct CartStore {
    lines: Vec<CartLine>,
    currency: Currency,
    watchers: Watchers<CartEvent>,
    shake: PulseSignal,
}

impl CartStore {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self::with_currency(Currency::default())
    }

    /// Create an empty cart in a specific currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
            watchers: Watchers::new(),
            shake: PulseSignal::cart_shake(),
        }
    }

    /// Add a product to the cart.
    ///
    /// A repeat add of the same product id increments the existing line's
    /// quantity instead of creating a second line. Every successful add
    /// fires the cart shake pulse.
    ///
    /// A product priced in a different currency than the cart is rejected,
    /// so the subtotal always equals the sum over the lines actually held.
    /// Returns whether the cart changed.
    pub fn add(&mut self, product: Product) -> bool {
        if product.price.currency != self.currency {
            tracing::warn!(
                product = %product.id,
                cart_currency = %self.currency,
                price_currency = %product.price.currency,
                "rejected add with mismatched currency"
            );
            return false;
        }
        let id = product.id.clone();
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
            line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY);
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
        tracing::debug!(product = %id, "added to cart");
        self.shake.trigger();
        self.watchers.notify(&CartEvent::Added(id));
        true
    }

    /// Remove a line by product id. A miss is a no-op, not an error.
    pub fn remove(&mut self, id: impl Into<ProductId>) -> bool {
        let id = id.into();
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(product = %id, "removed from cart");
            self.watchers.notify(&CartEvent::Removed(id));
        }
        removed
    }

    /// Set a line's quantity directly.
    ///
    /// Updates with a non-positive quantity are rejected and leave the line
    /// unchanged; driving a quantity to zero never removes the line. Returns
    /// whether the quantity changed.
    pub fn update_quantity(&mut self, id: impl Into<ProductId>, quantity: i64) -> bool {
        let id = id.into();
        if quantity < 1 {
            tracing::warn!(product = %id, quantity, "rejected non-positive quantity update");
            return false;
        }
        let quantity = quantity.min(MAX_LINE_QUANTITY);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
            line.quantity = quantity;
            self.watchers
                .notify(&CartEvent::QuantityChanged(id, quantity));
            true
        } else {
            false
        }
    }

    /// Set a line's quantity from free-text input.
    ///
    /// Non-numeric input is rejected the same way a non-positive number is.
    pub fn update_quantity_input(&mut self, id: impl Into<ProductId>, raw: &str) -> bool {
        match parse_quantity(raw) {
            Ok(quantity) => self.update_quantity(id, quantity),
            Err(error) => {
                tracing::warn!(%error, "rejected quantity input");
                false
            }
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            tracing::debug!("cart cleared");
            self.watchers.notify(&CartEvent::Cleared);
        }
    }

    /// Sum of price * quantity over all lines, recomputed on every call.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| {
                acc.saturating_add(&line.total())
            })
    }

    /// Total unit count (sum of quantities), for the navbar badge.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by product id.
    pub fn get(&self, id: impl Into<ProductId>) -> Option<&CartLine> {
        let id = id.into();
        self.lines.iter().find(|l| l.product.id == id)
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The shake pulse fired by every add; the UI polls it for the cart
    /// icon animation.
    pub fn shake(&self) -> &PulseSignal {
        &self.shake
    }

    /// Register a watcher for cart events.
    pub fn subscribe(&mut self, callback: impl Fn(&CartEvent) + 'static) -> WatcherId {
        self.watchers.subscribe(callback)
    }

    /// Remove a watcher.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        self.watchers.unsubscribe(id)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a quantity from free-text input.
///
/// Accepts positive integers only; anything else is a [`CommerceError::InvalidQuantity`].
pub fn parse_quantity(raw: &str) -> Result<i64, CommerceError> {
    let quantity: i64 = raw
        .trim()
        .parse()
        .map_err(|_| CommerceError::InvalidQuantity(raw.to_string()))?;
    if quantity < 1 {
        return Err(CommerceError::InvalidQuantity(raw.to_string()));
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: i64, cents: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::new(cents, Currency::USD))
    }

    #[test]
    fn test_repeat_add_merges_into_one_line() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        cart.add(product(1, 1000));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_subtotal_tracks_mutations() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        assert_eq!(cart.subtotal().amount_cents, 1000);

        cart.add(product(1, 1000));
        assert_eq!(cart.subtotal().amount_cents, 2000);

        cart.add(product(2, 500));
        assert_eq!(cart.subtotal().amount_cents, 2500);

        cart.remove(1);
        assert_eq!(cart.subtotal().amount_cents, 500);
    }

    #[test]
    fn test_update_quantity_rejects_non_positive() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));

        assert!(!cart.update_quantity(1, 0));
        assert!(!cart.update_quantity(1, -1));
        assert_eq!(cart.get(1).unwrap().quantity, 1);

        assert!(cart.update_quantity(1, 3));
        assert_eq!(cart.get(1).unwrap().quantity, 3);
    }

    #[test]
    fn test_update_quantity_input_rejects_non_numeric() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));

        assert!(!cart.update_quantity_input(1, "abc"));
        assert!(!cart.update_quantity_input(1, ""));
        assert_eq!(cart.get(1).unwrap().quantity, 1);

        assert!(cart.update_quantity_input(1, " 4 "));
        assert_eq!(cart.get(1).unwrap().quantity, 4);
    }

    #[test]
    fn test_zero_quantity_never_removes_line() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        cart.update_quantity(1, 0);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_remove_miss_is_noop() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        assert!(!cart.remove(99));
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        cart.add(product(2, 500));
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_mismatched_currency_add_is_rejected() {
        let seen = Rc::new(RefCell::new(0));
        let mut cart = CartStore::new(); // USD

        let sink = Rc::clone(&seen);
        cart.subscribe(move |_| *sink.borrow_mut() += 1);

        let imported = Product::new(1, "Imported Rug", Money::new(1000, Currency::EUR));
        assert!(!cart.add(imported));

        // No line is held, so the subtotal stays equal to the sum over lines.
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
        assert!(!cart.shake().is_active());
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn test_matching_currency_cart_accepts_its_own_currency() {
        let mut cart = CartStore::with_currency(Currency::EUR);
        let imported = Product::new(1, "Imported Rug", Money::new(1000, Currency::EUR));
        assert!(cart.add(imported));
        assert_eq!(cart.subtotal(), Money::new(1000, Currency::EUR));
    }

    #[test]
    fn test_add_fires_shake_pulse() {
        let mut cart = CartStore::new();
        assert!(!cart.shake().is_active());
        cart.add(product(1, 1000));
        assert!(cart.shake().is_active());
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        cart.add(product(1, 1000));
        cart.add(product(2, 500));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.unique_item_count(), 2);
    }

    #[test]
    fn test_watchers_see_successful_mutations_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut cart = CartStore::new();

        let sink = Rc::clone(&seen);
        cart.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        cart.add(product(1, 1000));
        cart.update_quantity(1, 0); // rejected, no event
        cart.update_quantity(1, 5);
        cart.remove(99); // miss, no event
        cart.remove(1);

        assert_eq!(
            *seen.borrow(),
            vec![
                CartEvent::Added(ProductId::from(1i64)),
                CartEvent::QuantityChanged(ProductId::from(1i64), 5),
                CartEvent::Removed(ProductId::from(1i64)),
            ]
        );
    }

    #[test]
    fn test_quantity_caps_at_max() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        assert!(cart.update_quantity(1, MAX_LINE_QUANTITY + 50));
        assert_eq!(cart.get(1).unwrap().quantity, MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("two").is_err());
        assert!(parse_quantity("2.5").is_err());
    }

    #[test]
    fn test_numeric_and_string_ids_hit_same_line() {
        let mut cart = CartStore::new();
        cart.add(product(7, 1000));
        assert!(cart.get("7").is_some());
        assert!(cart.update_quantity("7", 2));
        assert_eq!(cart.get(7).unwrap().quantity, 2);
    }
}
