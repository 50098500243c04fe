//! Transient notification messages.
//!
//! Each page owns its own `NotificationSignal`. At most one message is
//! visible at a time; showing a new message replaces the old one and resets
//! the expiry deadline, so the most recent message always wins.

use crate::SignalState;
use std::time::{Duration, Instant};

/// Default visibility duration for a notification.
pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;

/// Severity of a notification, used by the UI to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

/// A message currently on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text.
    pub message: String,
    /// Severity level.
    pub level: NotificationLevel,
}

/// A transient, auto-hiding message slot.
#[derive(Debug, Default)]
pub struct NotificationSignal {
    current: Option<Notification>,
    state: SignalState,
}

impl NotificationSignal {
    /// Create an empty signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message for the default duration.
    pub fn show(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.show_for(
            message,
            level,
            Duration::from_millis(DEFAULT_NOTIFICATION_MS),
        );
    }

    /// Show a message for a specific duration.
    pub fn show_for(
        &mut self,
        message: impl Into<String>,
        level: NotificationLevel,
        duration: Duration,
    ) {
        self.show_at(message, level, duration, Instant::now());
    }

    /// Show a message, taking the clock sample explicitly.
    ///
    /// Replaces any message already on display and resets the deadline to
    /// `now + duration`.
    pub fn show_at(
        &mut self,
        message: impl Into<String>,
        level: NotificationLevel,
        duration: Duration,
        now: Instant,
    ) {
        let message = message.into();
        tracing::debug!(%message, level = level.as_str(), "notification shown");
        self.current = Some(Notification { message, level });
        self.state = SignalState::Active {
            expires_at: now + duration,
        };
    }

    /// Hide the current message immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
        self.state = SignalState::Idle;
    }

    /// The visible message, if any.
    pub fn current(&self) -> Option<&Notification> {
        self.current_at(Instant::now())
    }

    /// The message visible at the given instant, if any.
    pub fn current_at(&self, now: Instant) -> Option<&Notification> {
        if self.state.is_active_at(now) {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// Whether a message is visible right now.
    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }

    /// Whether a message is visible at the given instant.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.state.is_active_at(now)
    }
}
