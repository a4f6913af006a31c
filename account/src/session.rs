//! Authenticated session state and its persistence.
//!
//! DESIGN
//! ======
//! `SessionStore` keeps the in-memory [`Session`] authoritative for the life
//! of the process and mirrors every mutation synchronously into a
//! [`KeyValueStorage`] under two keys, `"user"` and `"token"`. Storage is only
//! read when a store is loaded.
//!
//! Storage failures never reach callers: writes are best-effort and logged,
//! and malformed persisted data loads as an empty session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::storage::{KeyValueStorage, StorageError};
use crate::user::User;

/// Storage key holding the JSON-serialized user.
pub const USER_KEY: &str = "user";
/// Storage key holding the JSON-serialized access token.
pub const TOKEN_KEY: &str = "token";

/// The signed-in identity: user record plus access token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// Read a session from `storage`, treating absent or malformed values as empty.
    pub fn read_from<S: KeyValueStorage + ?Sized>(storage: &S) -> Self {
        Self {
            user: storage.get(USER_KEY).and_then(|raw| parse_user(&raw)),
            token: storage.get(TOKEN_KEY).and_then(|raw| parse_token(&raw)),
        }
    }

    /// Whether a user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

fn parse_user(raw: &str) -> Option<User> {
    match serde_json::from_str::<Option<User>>(raw) {
        Ok(user) => user,
        Err(e) => {
            log::debug!("ignoring malformed persisted user: {e}");
            None
        }
    }
}

/// Tokens are written JSON-encoded but older entries may be raw strings.
fn parse_token(raw: &str) -> Option<String> {
    let token = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Null) => return None,
        _ => raw.to_owned(),
    };
    (!token.is_empty()).then_some(token)
}

/// Session state cached in memory and persisted through `S`.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Create an empty store without reading `storage`.
    pub fn new(storage: S) -> Self {
        Self { storage, session: Session::default() }
    }

    /// Create a store seeded from what `storage` currently holds.
    pub fn load(storage: S) -> Self {
        let session = Session::read_from(&storage);
        Self { storage, session }
    }

    /// Current in-memory session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Replace the user, keeping the token, and persist only the user key.
    ///
    /// The token key is left as-is, so calling this without a prior sign-in
    /// leaves a user persisted with no token.
    pub fn set_user(&mut self, user: User) {
        self.persist_user(&user);
        self.session.user = Some(user);
    }

    /// Replace both user and token and persist both keys.
    pub fn set_user_and_token(&mut self, user: User, token: String) {
        self.persist_user(&user);
        self.persist_token(&token);
        self.session = Session { user: Some(user), token: Some(token) };
    }

    /// Clear the session in memory and delete both persisted keys.
    pub fn log_out(&mut self) {
        self.session = Session::default();
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("failed to remove persisted {key}: {e}");
            }
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist_user(&mut self, user: &User) {
        let result = serde_json::to_string(user)
            .map_err(|e| StorageError::Write(e.to_string()))
            .and_then(|raw| self.storage.set(USER_KEY, &raw));
        if let Err(e) = result {
            log::warn!("failed to persist user: {e}");
        }
    }

    fn persist_token(&mut self, token: &str) {
        let result = serde_json::to_string(token)
            .map_err(|e| StorageError::Write(e.to_string()))
            .and_then(|raw| self.storage.set(TOKEN_KEY, &raw));
        if let Err(e) = result {
            log::warn!("failed to persist token: {e}");
        }
    }
}
