//! Key-value persistence boundary.
//!
//! Models browser-local durable storage as a trait so the session layer can
//! be driven against an in-memory store in tests. Typed access goes through
//! [`get_json`] / [`set_json`], which layer JSON serialization over the raw
//! string interface.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from the persistence boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store failed.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Stored payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable string-keyed storage.
pub trait KeyValueStore {
    /// Read a value. Missing keys are `None`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any existing one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Deleting a missing key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value.
pub fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON value.
pub fn set_json<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Handle for an external-change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ChangeCallback = Box<dyn Fn(Option<&str>)>;

/// In-memory [`KeyValueStore`] with external-change observers.
///
/// Observers model the cross-view "storage changed" broadcast: they fire
/// when the host calls [`MemoryStore::notify_external_change`], not on local
/// writes, mirroring how a browser delivers storage events only to *other*
/// open views.
#[derive(Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
    watchers: Vec<(SubscriptionId, String, ChangeCallback)>,
    next_id: u64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to external changes of a key.
    ///
    /// The callback receives the key's value at notification time.
    pub fn on_external_change(
        &mut self,
        key: impl Into<String>,
        callback: impl Fn(Option<&str>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.watchers.push((id, key.into(), Box::new(callback)));
        id
    }

    /// Drop a subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.watchers.len();
        self.watchers.retain(|(entry_id, _, _)| *entry_id != id);
        self.watchers.len() < len_before
    }

    /// Tell subscribers that another view changed `key`.
    pub fn notify_external_change(&self, key: &str) {
        let value = self.map.get(key).map(String::as_str);
        for (_, watched_key, callback) in &self.watchers {
            if watched_key == key {
                callback(value);
            }
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.map.remove(key);
        Ok(())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("keys", &self.map.len())
            .field("watchers", &self.watchers.len())
            .finish()
    }
}
