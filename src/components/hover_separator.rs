//! Hover Separator Component
//!
//! Sits between two page buttons. Shows a small dot on hover and grows
//! into an "add page" button after a short delay, so it takes little room
//! but still makes inserting between pages easy.

use gloo_timers::callback::Timeout;
use leptos::ev::PointerEvent;
use leptos::prelude::*;

/// Hover time before the separator turns into a button
const REVEAL_DELAY_MS: u32 = 400;

#[component]
pub fn HoverSeparator(
    /// Insert here
    on_insert: Callback<()>,
) -> impl IntoView {
    let (is_active, set_is_active) = signal(false);
    // Dropping a Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let on_enter = move |_: PointerEvent| {
        let timeout = Timeout::new(REVEAL_DELAY_MS, move || set_is_active.set(true));
        pending.set_value(Some(timeout));
    };

    let on_leave = move |_: PointerEvent| {
        pending.set_value(None);
        set_is_active.set(false);
    };

    on_cleanup(move || pending.set_value(None));

    view! {
        <div
            class=move || if is_active.get() { "HoverSeparator is-active" } else { "HoverSeparator" }
            on:pointerenter=on_enter
            on:pointerleave=on_leave
        >
            <button
                class="HoverSeparator__button"
                aria-label="Add page here"
                tabindex="-1"
                on:click=move |_| {
                    set_is_active.set(false);
                    on_insert.run(());
                }
            >
                <span class="HoverSeparator__icon">"+"</span>
            </button>
        </div>
    }
}
