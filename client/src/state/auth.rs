//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate redirects
//! and identity-dependent rendering. The session itself is an
//! `account::SessionStore` persisted to `localStorage`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use account::{SessionStore, User};

use crate::util::storage::BrowserStorage;

/// Session store backed by browser `localStorage`.
pub type SessionState = SessionStore<BrowserStorage>;

/// Authentication state tracking the session and whether it has been
/// restored from storage yet.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub session: SessionState,
    /// True until the persisted session has been read after hydration.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: SessionStore::new(BrowserStorage), loading: true }
    }
}

impl AuthState {
    /// State seeded from `localStorage`.
    pub fn restore() -> Self {
        Self { session: SessionStore::load(BrowserStorage), loading: false }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}
