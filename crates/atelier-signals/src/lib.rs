//! Transient UI signals for the Atelier storefront.
//!
//! Both signals here are deadline state machines: a trigger moves the signal
//! to `Active` with an expiry instant, and readers observe expiry lazily by
//! comparing against a clock sample. No background timer is ever scheduled,
//! so re-triggering simply replaces the deadline (restart, not stack), and a
//! signal discarded before expiry leaks nothing.

mod notification;
mod pulse;

pub use notification::{
    Notification, NotificationLevel, NotificationSignal, DEFAULT_NOTIFICATION_MS,
};
pub use pulse::{PulseSignal, CART_SHAKE_MS, WISHLIST_POP_MS};

use std::time::Instant;

/// State of a transient signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SignalState {
    /// Nothing pending.
    #[default]
    Idle,
    /// Signal is live until the deadline passes.
    Active { expires_at: Instant },
}

impl SignalState {
    /// Whether the signal is live at the given instant.
    fn is_active_at(&self, now: Instant) -> bool {
        match self {
            SignalState::Idle => false,
            SignalState::Active { expires_at } => now < *expires_at,
        }
    }
}
