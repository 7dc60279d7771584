//! Sign-up page creating a new account from name and email.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_dots::LoadingDots;
use crate::config::AppConfig;
use crate::state::auth_handle::AuthHandle;
use crate::util::auth::{DASHBOARD_PATH, SIGN_IN_PATH};

/// Trim name and email and require all three fields.
///
/// The password is only checked for presence; it is never stored.
pub(crate) fn validate_sign_up_input(name: &str, email: &str, password: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter name, email and password.");
    }
    Ok((name.to_owned(), email.to_owned()))
}

#[component]
pub fn SignUpPage(auth: AuthHandle, config: AppConfig) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();
    let navigate_sign_in = navigate.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (name_value, email_value) =
            match validate_sign_up_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(msg) => {
                    leptos::logging::warn!("sign up rejected: {msg}");
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::util::latency::simulate(config.submit_delay_ms).await;
                auth.sign_up(&name_value, &email_value);
                navigate(DASHBOARD_PATH, NavigateOptions::default());
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name_value, email_value, &navigate, config, auth);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create Account"</h1>
                <p class="auth-card__subtitle">"Enter your details to get started"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        <Show when=move || busy.get() fallback=|| "Sign Up">
                            <LoadingDots/>
                        </Show>
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a
                        href=SIGN_IN_PATH
                        class="auth-link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate_sign_in(SIGN_IN_PATH, NavigateOptions::default());
                        }
                    >
                        "Sign in"
                    </a>
                </p>
            </div>
        </div>
    }
}
