//! Dashboard page hosting the counter, chart, editor and user form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route; `App` wraps it in `ProtectedRoute`,
//! so the session is always loaded and signed in while it renders.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::counter::Counter;
use crate::components::engagement_chart::EngagementChart;
use crate::components::rich_text_editor::RichTextEditor;
use crate::components::user_form::UserForm;
use crate::config::AppConfig;
use crate::state::auth_handle::AuthHandle;
use crate::util::auth::SIGN_IN_PATH;

#[component]
pub fn DashboardPage(auth: AuthHandle, config: AppConfig) -> impl IntoView {
    let navigate = use_navigate();
    let store = auth.store();

    let display_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();

    let on_sign_out = move |_| {
        auth.sign_out();
        navigate(SIGN_IN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-card">
                <h1 class="dashboard-card__title">"Dashboard"</h1>
                <header class="dashboard-card__header">
                    <span class="dashboard-card__welcome">"Welcome, " {display_name}</span>
                    <button class="btn btn--gradient" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </header>

                <div class="dashboard-card__widgets">
                    <section class="dashboard-card__widget">
                        <h2>"Counter"</h2>
                        <Counter store=store pulse_ms=config.counter_pulse_ms/>
                    </section>
                    <section class="dashboard-card__widget">
                        <h2>"User Profile Trends"</h2>
                        <div class="dashboard-card__chart">
                            <EngagementChart/>
                        </div>
                    </section>
                </div>

                <RichTextEditor store=store/>
                <UserForm store=store/>
            </div>
        </div>
    }
}
