//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page receives the session handle and config from `App` as props and
//! delegates widget rendering to `components`.

pub mod dashboard;
pub mod sign_in;
pub mod sign_up;
