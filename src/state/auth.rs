//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware pages to coordinate sign-in
//! redirects and identity-dependent rendering. There is no credential check:
//! every sign-in fabricates an identity and mirrors it into the store under
//! `authUser`.
//!
//! DESIGN
//! ======
//! `AuthState` is plain data with the store passed in explicitly, so every
//! operation is testable against `MemoryStore`. `AuthHandle` wraps it in a
//! signal for the UI. Mutations update memory first and then write through;
//! a failed write is returned to the caller and the new identity stays.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::config::AUTH_USER_KEY;
use crate::storage::{self, KeyValueStore, StorageError};

/// Display name given to email sign-ins, which carry no name of their own.
pub const PLACEHOLDER_NAME: &str = "John Doe";

pub const GOOGLE_USER_ID: &str = "google_1";
pub const GOOGLE_USER_NAME: &str = "Google User";
pub const GOOGLE_USER_EMAIL: &str = "googleuser@example.com";

/// A signed-in user. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Identity {
    /// New identity with a freshly generated id.
    #[must_use]
    pub fn fresh(name: &str, email: &str) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), name: name.to_owned(), email: email.to_owned() }
    }

    /// Fixed identity standing in for a third-party sign-in.
    #[must_use]
    pub fn google() -> Self {
        Self {
            id: GOOGLE_USER_ID.to_owned(),
            name: GOOGLE_USER_NAME.to_owned(),
            email: GOOGLE_USER_EMAIL.to_owned(),
        }
    }
}

/// Authentication state tracking the current user and loading status.
///
/// `loading` is `true` until the startup read from the store has finished and
/// is never set back afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Load the persisted identity. Runs once; later calls are no-ops.
    ///
    /// An unreadable or malformed record leaves the user absent and is
    /// returned as an error. `loading` is cleared either way.
    pub fn initialize(&mut self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        if !self.loading {
            return Ok(());
        }
        let loaded = storage::load_json::<Identity>(store, AUTH_USER_KEY);
        self.loading = false;
        match loaded {
            Ok(user) => {
                self.user = user;
                Ok(())
            }
            Err(e) => {
                self.user = None;
                Err(e)
            }
        }
    }

    /// Sign in as a placeholder user with the given email.
    ///
    /// The password is accepted and ignored.
    pub fn sign_in(&mut self, store: &dyn KeyValueStore, email: &str, _password: &str) -> Result<(), StorageError> {
        self.replace_user(store, Some(Identity::fresh(PLACEHOLDER_NAME, email)))
    }

    /// Register and sign in a new user.
    pub fn sign_up(&mut self, store: &dyn KeyValueStore, name: &str, email: &str) -> Result<(), StorageError> {
        self.replace_user(store, Some(Identity::fresh(name, email)))
    }

    pub fn sign_in_with_google(&mut self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        self.replace_user(store, Some(Identity::google()))
    }

    pub fn sign_out(&mut self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        self.replace_user(store, None)
    }

    fn replace_user(&mut self, store: &dyn KeyValueStore, user: Option<Identity>) -> Result<(), StorageError> {
        self.user = user;
        persist_user(store, self.user.as_ref())
    }
}

/// Mirror `user` into the store: write the record, or remove it when absent.
pub fn persist_user(store: &dyn KeyValueStore, user: Option<&Identity>) -> Result<(), StorageError> {
    match user {
        Some(user) => storage::save_json(store, AUTH_USER_KEY, user),
        None => store.remove(AUTH_USER_KEY),
    }
}
