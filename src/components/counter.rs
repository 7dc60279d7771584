//! Counter widget with a tinted background that deepens away from zero.

use leptos::prelude::*;

use crate::state::counter::CounterState;
use crate::storage::SharedStore;

#[component]
pub fn Counter(store: StoredValue<SharedStore, LocalStorage>, pulse_ms: u32) -> impl IntoView {
    let initial = CounterState::load(store.get_value().as_ref()).unwrap_or_else(|e| {
        leptos::logging::warn!("counter load failed: {e}");
        CounterState::default()
    });
    let counter = RwSignal::new(initial);

    let apply = move |step: fn(&mut CounterState)| {
        counter.update(step);
        let snapshot = counter.get_untracked();
        if let Err(e) = snapshot.persist(store.get_value().as_ref()) {
            leptos::logging::warn!("counter not persisted: {e}");
        }
        if snapshot.pulsing {
            end_pulse_after(counter, pulse_ms);
        }
    };

    view! {
        <div
            class="counter"
            style:background-color=move || counter.get().background_color()
            style:transform=move || counter.get().transform()
        >
            <div class="counter__value">{move || counter.get().count}</div>
            <div class="counter__actions">
                <button class="btn btn--primary" on:click=move |_| apply(CounterState::increment)>
                    "Increment"
                </button>
                <button class="btn btn--secondary" on:click=move |_| apply(CounterState::decrement)>
                    "Decrement"
                </button>
                <button class="btn" on:click=move |_| apply(CounterState::reset)>
                    "Reset"
                </button>
            </div>
        </div>
    }
}

fn end_pulse_after(counter: RwSignal<CounterState>, pulse_ms: u32) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::util::latency::simulate(pulse_ms).await;
        counter.try_update(|c| c.pulsing = false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = pulse_ms;
        counter.update(|c| c.pulsing = false);
    }
}
