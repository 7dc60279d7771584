//! Key-value persistence behind a single explicit interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session identity, the counter, the editor buffer, and the user form all
//! persist through `KeyValueStore`. The browser build talks to
//! `window.localStorage`; native builds and tests use `MemoryStore`.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, StorageError>`. Callers decide whether a
//! failure is logged or surfaced. No storage failure is fatal to the app.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(feature = "csr")]
mod browser;
mod memory;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
pub use browser::BrowserStore;
pub use memory::MemoryStore;

/// Failure reported by a [`KeyValueStore`] or the JSON helpers on top of it.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("read failed for `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("write failed for `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("remove failed for `{key}`: {reason}")]
    Remove { key: String, reason: String },
    #[error("malformed value under `{key}`: {source}")]
    Malformed { key: String, source: serde_json::Error },
    #[error("failed to serialize value for `{key}`: {source}")]
    Serialize { key: String, source: serde_json::Error },
}

/// Synchronous string key-value storage.
///
/// Each call is a single atomic operation on the underlying store; there are
/// no transactions and no expiry.
pub trait KeyValueStore {
    /// Read the value under `key`, `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Store handle shared by the session and the dashboard widgets.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// The store the running application persists into.
///
/// Browser builds get `localStorage`; everything else gets a fresh in-memory
/// store so components can still be constructed.
pub fn default_store() -> SharedStore {
    #[cfg(feature = "csr")]
    {
        Rc::new(BrowserStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(MemoryStore::default())
    }
}

/// Load and deserialize a JSON value stored under `key`.
///
/// An absent key yields `Ok(None)`. A present value that does not parse is
/// reported as [`StorageError::Malformed`] and left untouched in the store.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Malformed { key: key.to_owned(), source })
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize { key: key.to_owned(), source })?;
    store.set(key, &raw)
}
