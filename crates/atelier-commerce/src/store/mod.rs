//! Observable session stores.
//!
//! Cart, wishlist, and compare are independent in-memory collections. The UI
//! dispatches mutations into them and subscribes for change events; nothing
//! here is persisted, so every store starts a session empty.

mod cart;
mod compare;
mod watch;
mod wishlist;

pub use cart::{parse_quantity, CartEvent, CartLine, CartStore, MAX_LINE_QUANTITY};
pub use compare::{CompareEntry, CompareEvent, CompareStore, MAX_COMPARE};
pub use watch::{WatcherId, Watchers};
pub use wishlist::{WishlistEntry, WishlistEvent, WishlistStore};
