//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `counter`, `editor`, `user_form`) so
//! each widget depends on a small focused model. Every model takes the store
//! as an explicit argument and is tested against `MemoryStore`.

pub mod auth;
pub mod auth_handle;
pub mod counter;
pub mod editor;
pub mod user_form;
