//! # dashboard-shell
//!
//! Leptos + WASM single-page app with mock authentication and a dashboard
//! of independent widgets (counter, engagement chart, rich-text editor,
//! user-data form).
//!
//! There is no backend. Signing in fabricates an identity and mirrors it
//! into `localStorage`; widgets persist their own data under their own keys
//! through the `storage::KeyValueStore` interface.
//!
//! Browser glue is gated behind the `csr` feature so the state, storage and
//! routing logic can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;
