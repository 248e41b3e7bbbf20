//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Page;
use crate::pages::next_active_id;

/// Page bar state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Pages in tab order
    pub pages: Vec<Page>,
    /// Active page; always absent or one of `pages`
    pub active_page_id: Option<String>,
}

impl AppState {
    /// Start with `pages`, the first one active
    pub fn new(pages: Vec<Page>) -> Self {
        let active_page_id = pages.first().map(|p| p.id.clone());
        Self { pages, active_page_id }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the page list, moving the active id per [`next_active_id`]
pub fn store_set_pages(store: &AppStore, pages: Vec<Page>) {
    let old = store.pages().get_untracked();
    let active = store.active_page_id().get_untracked();
    let next = next_active_id(&old, &pages, active.as_deref());

    store.pages().set(pages);
    if next != active {
        log::debug!("[STORE] active page {:?} -> {:?}", active, next);
        store.active_page_id().set(next);
    }
}

/// Activate a page by id; unknown ids are ignored
pub fn store_activate(store: &AppStore, id: &str) {
    let known = store.pages().with_untracked(|pages| pages.iter().any(|p| p.id == id));
    if known {
        store.active_page_id().set(Some(id.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{insert_at, reorder_by_ids};

    fn pages(ids: &[&str]) -> Vec<Page> {
        ids.iter().map(|id| Page::new(*id, format!("Page {}", id))).collect()
    }

    fn ids(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    /// Run `f` against a fresh store inside a reactive owner
    fn with_store(ids: &[&str], f: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(AppState::new(pages(ids)))));
    }

    #[test]
    fn test_external_add_activates_new_page() {
        with_store(&["A", "B"], |store| {
            assert_eq!(store.active_page_id().get_untracked().as_deref(), Some("A"));

            let next = insert_at(&store.pages().get_untracked(), 1, Page::new("X", "X"));
            store_set_pages(&store, next);

            let order: Vec<String> = store.pages().with_untracked(|p| p.iter().map(|p| p.id.clone()).collect());
            assert_eq!(order, ids(&["A", "X", "B"]));
            assert_eq!(store.active_page_id().get_untracked().as_deref(), Some("X"));
        });
    }

    #[test]
    fn test_reorder_keeps_active() {
        with_store(&["A", "B", "C"], |store| {
            store_activate(&store, "B");
            let next = reorder_by_ids(&store.pages().get_untracked(), &ids(&["C", "B", "A"]));
            store_set_pages(&store, next);
            assert_eq!(store.active_page_id().get_untracked().as_deref(), Some("B"));
        });
    }

    #[test]
    fn test_activate_unknown_id_is_ignored() {
        with_store(&["A", "B"], |store| {
            store_activate(&store, "ghost");
            assert_eq!(store.active_page_id().get_untracked().as_deref(), Some("A"));
        });
    }

    #[test]
    fn test_emptied_list_has_no_active_page() {
        with_store(&["A"], |store| {
            store_set_pages(&store, Vec::new());
            assert_eq!(store.active_page_id().get_untracked(), None);
        });
    }
}
