//! Page Button Component
//!
//! One draggable page in the bar.

use leptos::ev::PointerEvent;
use leptos::prelude::*;
use leptos_dragdrop::dom::rect_of;
use leptos_dragdrop::Rect;
use wasm_bindgen::JsCast;

use crate::components::PageIconView;
use crate::models::Page;

/// A page button: icon, link and a "more" button for the page menu
#[component]
pub fn PageButton(
    page: Page,
    #[prop(into)] is_active: Signal<bool>,
    /// Pointer-down on the button body
    on_press: Callback<PointerEvent>,
    /// "More" button clicked; carries the button's rect to place the menu near
    on_menu: Callback<Rect>,
) -> impl IntoView {
    let class = move || {
        if is_active.get() { "PageButton is-active" } else { "PageButton" }
    };
    let current = move || is_active.get().then_some("page");

    view! {
        <div
            class=class
            data-id=page.id.clone()
            tabindex="0"
            on:pointerdown=move |ev| on_press.run(ev)
        >
            <PageIconView icon=page.icon />
            <a href=page.href.clone() aria-current=current draggable="false">
                {page.label.clone()}
            </a>
            <button
                class="PageButton__menu-button"
                aria-label="Page settings"
                // Never start a drag from the menu button
                on:pointerdown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    ev.stop_propagation();
                    if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                        on_menu.run(rect_of(&el));
                    }
                }
            >
                "︙"
            </button>
        </div>
    }
}
