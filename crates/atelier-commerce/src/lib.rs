//! Storefront domain core for Atelier.
//!
//! This crate owns the client-side state of a browsing session:
//!
//! - **Catalog**: the externally supplied, read-only product sequence
//! - **CartStore**: line items with quantity arithmetic and a live subtotal
//! - **WishlistStore**: a set of liked products
//! - **CompareStore**: an ordered comparison shortlist capped at three
//!
//! Stores are plain values handed by reference to the components that need
//! them, never hidden globals. Each one notifies registered watchers after
//! every successful mutation. None of them persist anything: a new session
//! starts empty by design.
//!
//! # Example
//!
//! ```
//! use atelier_commerce::prelude::*;
//!
//! let product = Product::new(1, "Oak Side Table", Money::from_decimal(79.99, Currency::USD));
//!
//! let mut cart = CartStore::new();
//! cart.add(product.clone());
//! cart.add(product);
//! assert_eq!(cart.subtotal(), Money::new(15998, Currency::USD));
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod store;

pub use error::CommerceError;
pub use ids::{ProductId, UserId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Catalog, Product};
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, UserId};
    pub use crate::money::{Currency, Money};
    pub use crate::store::{
        CartEvent, CartLine, CartStore, CompareEntry, CompareEvent, CompareStore, WatcherId,
        WishlistEntry, WishlistEvent, WishlistStore, MAX_COMPARE,
    };
}
