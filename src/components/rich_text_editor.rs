//! Rich-text editor: a formatting toolbar over a `contenteditable` region.
//!
//! The buffer is restored from `richTextData` on mount and written back on
//! every edit. Requires a browser environment for editing commands.

use leptos::prelude::*;

use crate::state::editor::{FormatAction, load_content, save_content};
use crate::storage::SharedStore;

#[component]
pub fn RichTextEditor(store: StoredValue<SharedStore, LocalStorage>) -> impl IntoView {
    let initial = load_content(store.get_value().as_ref()).unwrap_or_else(|e| {
        leptos::logging::warn!("editor load failed: {e}");
        String::new()
    });
    let editor_ref = NodeRef::<leptos::html::Div>::new();

    // Seed the region once it is mounted.
    Effect::new(move || {
        if let Some(el) = editor_ref.get() {
            el.set_inner_html(&initial);
        }
    });

    let persist = move || {
        let Some(el) = editor_ref.get_untracked() else {
            return;
        };
        if let Err(e) = save_content(store.get_value().as_ref(), &el.inner_html()) {
            leptos::logging::warn!("editor content not persisted: {e}");
        }
    };

    let toolbar = FormatAction::ALL
        .into_iter()
        .map(|action| {
            view! {
                <button
                    type="button"
                    class="editor__tool"
                    title=action.title()
                    // Keep the text selection inside the editor.
                    on:mousedown=move |ev| ev.prevent_default()
                    on:click=move |_| {
                        run_command(action);
                        persist();
                    }
                >
                    {action.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="editor">
            <h2 class="editor__title">"Rich Text Editor"</h2>
            <div class="editor__toolbar" role="toolbar">{toolbar}</div>
            <div
                class="editor__content"
                contenteditable="true"
                node_ref=editor_ref
                on:input=move |_| persist()
            ></div>
        </section>
    }
}

fn run_command(action: FormatAction) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(doc) = doc.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        let command = action.command();
        let result = match command.value {
            Some(value) => doc.exec_command_with_show_ui_and_value(command.name, false, value),
            None => doc.exec_command(command.name),
        };
        if let Err(e) = result {
            leptos::logging::warn!("editor command {} failed: {e:?}", command.name);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = action;
    }
}
