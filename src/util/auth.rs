//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the auth pages apply identical redirect rules, so
//! the decision lives here as a pure function of `AuthState`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

pub const SIGN_IN_PATH: &str = "/signin";
pub const SIGN_UP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What a protected route should show for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The startup read has not finished yet.
    Placeholder,
    /// No user; send the visitor to this path.
    Redirect(&'static str),
    /// Render the protected content.
    Render,
}

#[must_use]
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Placeholder
    } else if state.user.is_none() {
        GuardDecision::Redirect(SIGN_IN_PATH)
    } else {
        GuardDecision::Render
    }
}

