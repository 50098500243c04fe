//! Mock authentication.
//!
//! Verifies a single configured account and persists an opaque token plus a
//! user snapshot under fixed keys. This is the only durable state the
//! storefront keeps: the shopping stores reset on reload, the session does
//! not. A failed login surfaces an error and writes nothing.

use crate::kv::{get_json, set_json, KeyValueStore};
use crate::AuthError;
use atelier_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// Storage key for the session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Storage key for the persisted user snapshot.
pub const USER_DATA_KEY: &str = "user_data";

/// The user data persisted alongside the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    /// User id.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
}

/// Login form input.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// The single account the mock authenticator accepts.
#[derive(Debug, Clone)]
pub struct MockAccount {
    /// Accepted email.
    pub email: String,
    /// Accepted password, in the clear. Mock only.
    pub password: String,
    /// Snapshot persisted on successful login.
    pub user: UserSnapshot,
}

/// Frontend-only authenticator backed by one mock account.
#[derive(Debug, Clone)]
pub struct Authenticator {
    account: MockAccount,
}

impl Authenticator {
    /// Create an authenticator for the given account.
    pub fn new(account: MockAccount) -> Self {
        Self { account }
    }

    /// Verify credentials and persist the session.
    ///
    /// On success, generates a fresh opaque token and writes it together
    /// with the user snapshot. On a credential mismatch, nothing in the
    /// store is touched.
    pub fn login(
        &self,
        store: &mut dyn KeyValueStore,
        credentials: &Credentials,
    ) -> Result<String, AuthError> {
        if credentials.email != self.account.email || credentials.password != self.account.password
        {
            tracing::info!(email = %credentials.email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let token = generate_token_string();
        store.set(AUTH_TOKEN_KEY, &token)?;
        set_json(store, USER_DATA_KEY, &self.account.user)?;
        tracing::info!(user = %self.account.user.id, "login succeeded");
        Ok(token)
    }
}

/// Drop the persisted session.
pub fn logout(store: &mut dyn KeyValueStore) -> Result<(), AuthError> {
    store.remove(AUTH_TOKEN_KEY)?;
    store.remove(USER_DATA_KEY)?;
    tracing::info!("logged out");
    Ok(())
}

/// Read the persisted user snapshot, if a session exists.
pub fn current_user(store: &dyn KeyValueStore) -> Result<Option<UserSnapshot>, AuthError> {
    Ok(get_json(store, USER_DATA_KEY)?)
}

/// Whether a session token is present. Token presence is the login signal
/// other views re-derive on an external change of [`AUTH_TOKEN_KEY`].
pub fn is_logged_in(store: &dyn KeyValueStore) -> Result<bool, AuthError> {
    Ok(store.get(AUTH_TOKEN_KEY)?.is_some())
}

/// Generate an opaque session token.
fn generate_token_string() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 24] = rand::thread_rng().gen();
    URL_SAFE_NO_PAD.encode(bytes)
}
