//! Sign-in page: email + password, or the Google placeholder account.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_dots::LoadingDots;
use crate::config::AppConfig;
use crate::state::auth_handle::AuthHandle;
use crate::util::auth::{DASHBOARD_PATH, SIGN_UP_PATH};

/// Trim the email and require both fields.
pub(crate) fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignInMethod {
    Email,
    Google,
}

#[component]
pub fn SignInPage(auth: AuthHandle, config: AppConfig) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let submit = move |method: SignInMethod| {
        if busy.get_untracked() {
            return;
        }
        let credentials = match method {
            SignInMethod::Email => match validate_sign_in_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => Some(credentials),
                Err(msg) => {
                    leptos::logging::warn!("sign in rejected: {msg}");
                    return;
                }
            },
            SignInMethod::Google => None,
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::util::latency::simulate(config.submit_delay_ms).await;
                match credentials {
                    Some((email_value, password_value)) => auth.sign_in(&email_value, &password_value),
                    None => auth.sign_in_with_google(),
                }
                navigate(DASHBOARD_PATH, NavigateOptions::default());
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, &navigate, config, auth);
            busy.set(false);
        }
    };
    let submit_google = submit.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(SignInMethod::Email);
    };

    let navigate_sign_up = use_navigate();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Enter your credentials to access your account"</p>
                <form class="auth-form" on:submit=on_submit>
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
                        <Show when=move || busy.get() fallback=|| "Sign In">
                            <LoadingDots/>
                        </Show>
                    </button>
                </form>
                <div class="auth-divider"></div>
                <button
                    class="auth-button auth-button--outline"
                    type="button"
                    disabled=move || busy.get()
                    on:click=move |_| submit_google(SignInMethod::Google)
                >
                    "Continue with Google"
                </button>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a
                        href=SIGN_UP_PATH
                        class="auth-link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate_sign_up(SIGN_UP_PATH, NavigateOptions::default());
                        }
                    >
                        "Sign up"
                    </a>
                </p>
            </div>
        </div>
    }
}
