//! User-data form that appends submissions to the `users` log.

use leptos::prelude::*;

use crate::state::user_form::{UserField, UserFormState, append_record};
use crate::storage::SharedStore;

pub const SAVED_MESSAGE: &str = "User data saved successfully!";

#[component]
pub fn UserForm(store: StoredValue<SharedStore, LocalStorage>) -> impl IntoView {
    let form = RwSignal::new(UserFormState::default());

    // Warn before leaving the page with unsaved edits.
    #[cfg(feature = "csr")]
    {
        let listener = window_event_listener(leptos::ev::beforeunload, move |ev| {
            if form.try_get_untracked().is_some_and(|f| f.dirty) {
                ev.prevent_default();
                ev.set_return_value("");
            }
        });
        on_cleanup(move || listener.remove());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        let missing = snapshot.missing_fields();
        if !missing.is_empty() {
            leptos::logging::warn!("user form incomplete: {missing:?}");
            return;
        }
        match append_record(store.get_value().as_ref(), &snapshot.data) {
            Ok(record) => {
                log::info!("saved user record {}", record.id);
                form.update(UserFormState::reset);
                notify(SAVED_MESSAGE);
            }
            Err(e) => leptos::logging::warn!("user record not saved: {e}"),
        }
    };

    let fields = UserField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <label class="form-field">
                    <span class="form-field__label">{field.label()}</span>
                    <input
                        class="form-field__input"
                        type=field.input_type()
                        name=field.name()
                        required=true
                        prop:value=move || form.get().field(field).to_owned()
                        on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <form class="user-form" on:submit=on_submit>
            <h2 class="user-form__title">"User Data Form"</h2>
            {fields}
            <button class="btn btn--primary" type="submit">
                "Submit"
            </button>
        </form>
    }
}

fn notify(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                leptos::logging::warn!("alert failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
