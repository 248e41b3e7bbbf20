//! Page Bar Component
//!
//! Ordered row of page buttons with drag-to-reorder, click-to-activate,
//! hover separators for inserting pages and a per-page menu.
//! Uses leptos-dragdrop for gestures and reorder animation.

use leptos::ev::PointerEvent;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{HoverSeparator, MenuAction, PageButton, PageMenu};
use crate::models::Page;
use crate::pages::{index_of, insert_at, move_to_front, page_ids, remove_page, rename_page, reorder_by_ids};
use crate::prompt::prompt_page_name;
use crate::store::{store_activate, store_set_pages, use_app_store, AppStateStoreFields};

/// Page bar component; reads and writes the [`AppStore`](crate::store::AppStore) in context
#[component]
pub fn PageBar(
    /// Fresh unique id for a page created from the bar
    next_page_id: Callback<(), String>,
    /// Called with the full page list after every committed change
    #[prop(optional)]
    on_pages_change: Option<Callback<Vec<Page>>>,
    /// Called once per click (press and release without dragging)
    #[prop(optional)]
    on_page_click: Option<Callback<String>>,
    #[prop(optional)] config: Option<DragConfig>,
) -> impl IntoView {
    let store = use_app_store();
    let config = config.unwrap_or_default();
    let bar_ref = NodeRef::<Div>::new();
    let (menu_for, set_menu_for) = signal(None::<(String, Rect)>);

    let animator = use_animate_reorder(
        bar_ref,
        &config.item_selector,
        &config.id_attribute,
        config.animation.clone(),
        move || store.pages().track(),
    );
    let config = StoredValue::new(config);

    // Every page list change goes through here
    let commit_pages = move |pages: Vec<Page>| {
        log::debug!("[BAR] commit {:?}", page_ids(&pages));
        store_set_pages(&store, pages.clone());
        if let Some(cb) = on_pages_change {
            cb.run(pages);
        }
    };

    let handlers = GestureHandlers {
        on_reorder: Callback::new(move |ids: Vec<String>| {
            let pages = store.pages().with_untracked(|pages| reorder_by_ids(pages, &ids));
            commit_pages(pages);
        }),
        on_activate: Callback::new(move |id: String| {
            store_activate(&store, &id);
            if let Some(cb) = on_page_click {
                cb.run(id);
            }
        }),
        animator: Some(animator),
    };

    let insert_page = move |index: usize| {
        let Some(label) = prompt_page_name("Name of the new page", "") else { return };
        let page = Page::new(next_page_id.run(()), label);
        let pages = store.pages().with_untracked(|pages| insert_at(pages, index, page));
        commit_pages(pages);
    };

    let insert_before = move |id: &str| {
        let index = store
            .pages()
            .with_untracked(|pages| index_of(pages, id).unwrap_or(pages.len()));
        insert_page(index);
    };

    let run_menu_action = move |id: &str, action: MenuAction| {
        let pages = store.pages().get_untracked();
        let next = match action {
            MenuAction::SetFirst => move_to_front(&pages, id),
            MenuAction::Rename => {
                let current = pages.iter().find(|p| p.id == id).map(|p| p.label.clone()).unwrap_or_default();
                let Some(label) = prompt_page_name("Rename page", &current) else { return };
                rename_page(&pages, id, &label)
            }
            MenuAction::Duplicate => {
                let Some(index) = index_of(&pages, id) else { return };
                let source = &pages[index];
                let copy = Page {
                    id: next_page_id.run(()),
                    label: format!("{} copy", source.label),
                    ..source.clone()
                };
                insert_at(&pages, index + 1, copy)
            }
            MenuAction::Delete => remove_page(&pages, id),
        };
        commit_pages(next);
    };

    view! {
        <div class="PageBar" role="navigation" aria-label="Pages" node_ref=bar_ref>
            <For
                each=move || store.pages().get()
                key=|page| page.id.clone()
                children=move |page| {
                    let id = page.id.clone();

                    let is_active = {
                        let id = id.clone();
                        Signal::derive(move || {
                            store.active_page_id().with(|active| active.as_deref() == Some(id.as_str()))
                        })
                    };
                    let has_previous = {
                        let id = id.clone();
                        move || store.pages().with(|pages| index_of(pages, &id).is_some_and(|i| i > 0))
                    };

                    let on_press = {
                        let id = id.clone();
                        Callback::new(move |ev: PointerEvent| {
                            set_menu_for.set(None);
                            let order = store.pages().with_untracked(|pages| page_ids(pages));
                            config.with_value(|cfg| begin_gesture(&ev, id.clone(), order, cfg, handlers));
                        })
                    };
                    let on_menu = {
                        let id = id.clone();
                        Callback::new(move |rect: Rect| set_menu_for.set(Some((id.clone(), rect))))
                    };
                    let on_insert = Callback::new(move |_| insert_before(&id));

                    view! {
                        <Show when=has_previous>
                            <HoverSeparator on_insert=on_insert />
                        </Show>
                        <PageButton page=page is_active=is_active on_press=on_press on_menu=on_menu />
                    }
                }
            />

            <button
                class="PageBar__add"
                on:click=move |_| {
                    let end = store.pages().with_untracked(|pages| pages.len());
                    insert_page(end);
                }
            >
                <span class="PageBar__add-icon">"+"</span>
                "Add page"
            </button>

            {move || {
                menu_for.get().map(|(id, rect)| {
                    view! {
                        <PageMenu
                            near=rect
                            on_action=Callback::new(move |action| run_menu_action(&id, action))
                            on_close=Callback::new(move |_| set_menu_for.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}
