//! Three-bar wave shown inside submit buttons while a request is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <span class="loading-dots" aria-label="Loading">
            {(0..3)
                .map(|i| {
                    view! {
                        <span
                            class="loading-dots__bar"
                            style:animation-delay=format!("{}s", f64::from(i) * 0.1)
                        ></span>
                    }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
