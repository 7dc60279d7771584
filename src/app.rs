//! Root application component with routing and the session handle.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::AppConfig;
use crate::pages::{dashboard::DashboardPage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::auth_handle::AuthHandle;
use crate::storage::default_store;
use crate::util::auth::DASHBOARD_PATH;

/// Root application component.
///
/// Owns the single session and passes it to every route explicitly. Unknown
/// paths, including `/`, redirect to the dashboard, which in turn redirects
/// to sign-in when nobody is signed in.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let auth = AuthHandle::new(default_store());

    // Startup read of the persisted session; runs once after mount.
    Effect::new(move || auth.initialize());

    view! {
        <Title text="Dashboard"/>

        <Router>
            <Routes fallback=|| {
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=DASHBOARD_PATH options=options/> }
            }>
                <Route
                    path=StaticSegment("dashboard")
                    view=move || {
                        view! {
                            <ProtectedRoute auth=auth>
                                <DashboardPage auth=auth config=config/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route path=StaticSegment("signin") view=move || view! { <SignInPage auth=auth config=config/> }/>
                <Route path=StaticSegment("signup") view=move || view! { <SignUpPage auth=auth config=config/> }/>
            </Routes>
        </Router>
    }
}
