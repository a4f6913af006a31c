//! Transient status message shown after an action completes or fails.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use std::time::Duration;

/// How long the UI keeps a notification visible before clearing it.
pub const AUTO_HIDE: Duration = Duration::from_millis(3000);

pub const SIGN_UP_SUCCESS: &str = "Sign up successfully!";
pub const SIGN_IN_SUCCESS: &str = "Sign in successfully!";
pub const UPDATE_SUCCESS: &str = "Update successfully!";

/// Single-slot notification. An empty message means nothing is shown.
///
/// Every `set` bumps a sequence number, so repeating the same text still
/// counts as a new notification for auto-hide timers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    message: String,
    sequence: u64,
}

impl Notification {
    /// Replace the current message. Passing `""` hides the notification.
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.sequence = self.sequence.wrapping_add(1);
    }

    /// Hide the notification.
    pub fn clear(&mut self) {
        self.message.clear();
    }

    /// The visible message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        (!self.message.is_empty()).then_some(self.message.as_str())
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.message.is_empty()
    }

    /// Number of `set` calls so far.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}
