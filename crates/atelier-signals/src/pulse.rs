//! One-shot animation pulses.
//!
//! A pulse is a boolean that goes true on `trigger` and falls back to false
//! once its delay has elapsed. The UI layer maps an active pulse to a CSS
//! animation class (cart icon shake, wishlist heart pop). Re-triggering an
//! active pulse restarts the delay rather than stacking a second one.

use crate::SignalState;
use std::time::{Duration, Instant};

/// Delay for the cart icon shake animation.
pub const CART_SHAKE_MS: u64 = 500;

/// Delay for the wishlist heart pop animation.
pub const WISHLIST_POP_MS: u64 = 300;

/// A self-resetting boolean pulse.
#[derive(Debug)]
pub struct PulseSignal {
    delay: Duration,
    state: SignalState,
}

impl PulseSignal {
    /// Create a pulse with an arbitrary delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: SignalState::Idle,
        }
    }

    /// Preset for the cart shake animation (500 ms).
    pub fn cart_shake() -> Self {
        Self::new(Duration::from_millis(CART_SHAKE_MS))
    }

    /// Preset for the wishlist pop animation (300 ms).
    pub fn wishlist_pop() -> Self {
        Self::new(Duration::from_millis(WISHLIST_POP_MS))
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Fire the pulse.
    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    /// Fire the pulse, taking the clock sample explicitly.
    ///
    /// An already-active pulse gets a fresh deadline.
    pub fn trigger_at(&mut self, now: Instant) {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "pulse triggered");
        self.state = SignalState::Active {
            expires_at: now + self.delay,
        };
    }

    /// Whether the pulse is active right now.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Instant::now())
    }

    /// Whether the pulse is active at the given instant.
    pub fn is_active_at(&self, now: Instant) -> bool {
        self.state.is_active_at(now)
    }

    /// Force the pulse back to idle.
    pub fn reset(&mut self) {
        self.state = SignalState::Idle;
    }
}
