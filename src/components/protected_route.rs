//! Route wrapper that gates its children on the session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth_handle::AuthHandle;
use crate::util::auth::{GuardDecision, guard_decision};

/// Render `children` only for a signed-in user.
///
/// Shows a placeholder while the session is still loading and redirects to
/// the sign-in page once it is known that nobody is signed in.
#[component]
pub fn ProtectedRoute(auth: AuthHandle, children: ChildrenFn) -> impl IntoView {
    move || match guard_decision(&auth.get()) {
        GuardDecision::Placeholder => view! { <div class="route-placeholder">"Loading..."</div> }.into_any(),
        GuardDecision::Redirect(path) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
        GuardDecision::Render => children().into_any(),
    }
}
