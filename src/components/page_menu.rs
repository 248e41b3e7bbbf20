//! Page Menu Component
//!
//! Per-page settings menu, opened from a button's "more" control.

use leptos::ev::{FocusEvent, KeyboardEvent};
use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::Rect;
use wasm_bindgen::JsCast;

/// Gap between the menu and the button it opens from
const MENU_GAP_PX: f64 = 8.0;

/// Actions offered for a page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    SetFirst,
    Rename,
    Duplicate,
    Delete,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::SetFirst,
        MenuAction::Rename,
        MenuAction::Duplicate,
        MenuAction::Delete,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::SetFirst => "Set as first page",
            MenuAction::Rename => "Rename",
            MenuAction::Duplicate => "Duplicate",
            MenuAction::Delete => "Delete",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            MenuAction::SetFirst => "⚑",
            MenuAction::Rename => "✎",
            MenuAction::Duplicate => "⧉",
            MenuAction::Delete => "🗑",
        }
    }

    fn class(self) -> &'static str {
        match self {
            MenuAction::SetFirst => "MenuItem is-primary",
            MenuAction::Delete => "MenuItem is-danger",
            _ => "MenuItem",
        }
    }
}

/// Settings menu placed just above `near`.
/// Takes focus when shown and closes once focus leaves it.
#[component]
pub fn PageMenu(
    near: Rect,
    on_action: Callback<MenuAction>,
    on_close: Callback<()>,
) -> impl IntoView {
    let menu_ref = NodeRef::<Div>::new();

    Effect::new(move |_| {
        if let Some(menu) = menu_ref.get() {
            let _ = menu.focus();
        }
    });

    let on_focusout = move |ev: FocusEvent| {
        let Some(menu) = menu_ref.get_untracked() else { return };
        let inside = ev
            .related_target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| menu.contains(Some(&node)));
        if !inside {
            on_close.run(());
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    let style = format!(
        "left: {}px; top: {}px; transform: translateY(-100%);",
        near.x,
        near.y - MENU_GAP_PX
    );

    view! {
        <div
            class="Menu"
            tabindex="-1"
            node_ref=menu_ref
            style=style
            on:focusout=on_focusout
            on:keydown=on_keydown
        >
            <div class="Menu__heading">"Settings"</div>
            <hr />
            <ul class="Menu__list">
                {MenuAction::ALL
                    .into_iter()
                    .map(|action| {
                        view! {
                            <li class=action.class()>
                                {(action == MenuAction::Delete).then(|| view! { <hr class="MenuItem__separator" /> })}
                                <button
                                    class="MenuItem__button"
                                    // Keep focus in the menu so the click lands
                                    on:mousedown=|ev| ev.prevent_default()
                                    on:click=move |_| {
                                        on_action.run(action);
                                        on_close.run(());
                                    }
                                >
                                    <span class="MenuItem__icon">{action.glyph()}</span>
                                    {action.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
