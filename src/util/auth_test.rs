use super::*;
use crate::state::auth::Identity;

fn user() -> Identity {
    Identity { id: "u1".to_owned(), name: "Alice".to_owned(), email: "alice@example.com".to_owned() }
}

#[test]
fn guard_shows_placeholder_while_loading_without_user() {
    let state = AuthState { user: None, loading: true };
    assert_eq!(guard_decision(&state), GuardDecision::Placeholder);
}

#[test]
fn guard_shows_placeholder_while_loading_with_user() {
    let state = AuthState { user: Some(user()), loading: true };
    assert_eq!(guard_decision(&state), GuardDecision::Placeholder);
}

#[test]
fn guard_redirects_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(guard_decision(&state), GuardDecision::Redirect("/signin"));
}

#[test]
fn guard_renders_when_user_exists() {
    let state = AuthState { user: Some(user()), loading: false };
    assert_eq!(guard_decision(&state), GuardDecision::Render);
}

