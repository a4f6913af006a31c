//! Shared account model for the profile portal.
//!
//! This crate owns everything both front-ends need and nothing UI-specific:
//! the user/session data model, the session store and its key-value storage
//! seam, the notification slot, form validators, the GraphQL wire schema and
//! the submit flows that tie validation to remote calls.
//!
//! The Leptos `client` and the `cli` binary each plug in their own storage
//! backend and [`AccountApi`] transport.

pub mod api;
pub mod flows;
pub mod graphql;
pub mod notification;
pub mod session;
pub mod storage;
pub mod user;
pub mod validate;

pub use api::{AccountApi, ApiError};
pub use notification::Notification;
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use user::User;
