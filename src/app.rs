//! Page Bar Demo App
//!
//! Host application: owns the page store and the id source, shows the
//! active page above the bar and the recent log lines on demand.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::PageBar;
use crate::ids::SequentialIds;
use crate::models::Page;
use crate::seed::initial_pages;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let pages = initial_pages();
    let ids = StoredValue::new(SequentialIds::after(pages.iter().map(|p| p.id.as_str())));

    let store: AppStore = Store::new(AppState::new(pages));
    provide_context(store);

    let active_page = Memo::new(move |_| {
        let active = store.active_page_id().get();
        store
            .pages()
            .with(|pages| pages.iter().find(|p| Some(&p.id) == active.as_ref()).cloned())
    });

    let next_page_id = Callback::new(move |_: ()| {
        let mut id = String::new();
        ids.update_value(|ids| id = ids.next_id());
        id
    });

    let on_pages_change = Callback::new(move |pages: Vec<Page>| {
        log::info!("[APP] {} pages", pages.len());
    });

    let on_page_click = Callback::new(move |id: String| {
        log::info!("[APP] page {} clicked", id);
    });

    // Filled from the logger's buffer each time the panel is toggled
    let (log_lines, set_log_lines) = signal(Vec::<String>::new());

    view! {
        <main class="App">
            <div class="page-content">
                <div class="wrapper">
                    {move || match active_page.get() {
                        Some(page) => view! {
                            <h1>{page.label.clone()}</h1>
                            <p class="page-href">{page.href.clone()}</p>
                            <p>"Drag the buttons below to reorder pages, hover between them to add one."</p>
                        }.into_any(),
                        None => view! { <p class="empty">"No page selected"</p> }.into_any(),
                    }}
                </div>

                <details class="log-panel" on:toggle=move |_| set_log_lines.set(rolling_logger::recent_lines())>
                    <summary>"Recent log"</summary>
                    <pre class="log-panel__lines">{move || log_lines.get().join("\n")}</pre>
                </details>
            </div>

            <PageBar
                next_page_id=next_page_id
                on_pages_change=on_pages_change
                on_page_click=on_page_click
            />
        </main>
    }
}
