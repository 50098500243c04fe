//! Durable session state for the Atelier storefront.
//!
//! The three shopping stores are deliberately ephemeral; the only state that
//! survives a reload lives behind the [`KeyValueStore`] boundary defined
//! here: the mock auth token and user snapshot, and the theme/language
//! preferences. Other open views learn about writes through the boundary's
//! external-change observers rather than any UI framework event system.

mod auth;
mod kv;
mod prefs;

pub use auth::{
    Authenticator, Credentials, MockAccount, UserSnapshot, AUTH_TOKEN_KEY, USER_DATA_KEY,
};
pub use kv::{get_json, set_json, KeyValueStore, MemoryStore, StorageError, SubscriptionId};
pub use prefs::{Language, Preferences, Theme, LANGUAGE_KEY, THEME_KEY};

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Credentials did not match the mock account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The persistence boundary failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
