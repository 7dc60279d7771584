//! Reactive session handle passed explicitly to pages and guards.
//!
//! `App` creates exactly one handle and hands copies down as props, so
//! there is no ambient context lookup for the session.

#[cfg(test)]
#[path = "auth_handle_test.rs"]
mod auth_handle_test;

use leptos::prelude::*;

use super::auth::AuthState;
use crate::storage::{KeyValueStore, SharedStore, StorageError};

/// Copyable handle to the single application session.
#[derive(Clone, Copy)]
pub struct AuthHandle {
    state: RwSignal<AuthState>,
    store: StoredValue<SharedStore, LocalStorage>,
}

impl AuthHandle {
    pub fn new(store: SharedStore) -> Self {
        Self { state: RwSignal::new(AuthState::default()), store: StoredValue::new_local(store) }
    }

    /// Current state, tracked by the surrounding reactive scope.
    pub fn get(&self) -> AuthState {
        self.state.get()
    }

    pub fn get_untracked(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// The store the session writes through to, shared with the widgets.
    pub fn store(&self) -> StoredValue<SharedStore, LocalStorage> {
        self.store
    }

    pub fn initialize(&self) {
        self.mutate("initialize", AuthState::initialize);
    }

    pub fn sign_in(&self, email: &str, password: &str) {
        self.mutate("sign in", |state, store| state.sign_in(store, email, password));
    }

    pub fn sign_up(&self, name: &str, email: &str) {
        self.mutate("sign up", |state, store| state.sign_up(store, name, email));
    }

    pub fn sign_in_with_google(&self) {
        self.mutate("google sign in", AuthState::sign_in_with_google);
    }

    pub fn sign_out(&self) {
        self.mutate("sign out", AuthState::sign_out);
    }

    fn mutate<F>(&self, op: &str, f: F)
    where
        F: FnOnce(&mut AuthState, &dyn KeyValueStore) -> Result<(), StorageError>,
    {
        let store = self.store.get_value();
        let mut outcome = Ok(());
        self.state.update(|state| outcome = f(state, store.as_ref()));
        if let Err(e) = outcome {
            leptos::logging::warn!("{op}: session not persisted: {e}");
        }
    }
}
