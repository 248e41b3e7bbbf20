//! Page List Utilities
//!
//! Pure helpers behind the bar's state updates.

use std::collections::HashMap;

use crate::models::Page;

/// Rebuild `pages` in the order given by `ids`.
/// Ids with no matching page are skipped; the id-to-page mapping never changes.
pub fn reorder_by_ids(pages: &[Page], ids: &[String]) -> Vec<Page> {
    let by_id: HashMap<&str, &Page> = pages.iter().map(|p| (p.id.as_str(), p)).collect();
    ids.iter()
        .filter_map(|id| by_id.get(id.as_str()).map(|p| (*p).clone()))
        .collect()
}

/// Ids of `pages`, in order
pub fn page_ids(pages: &[Page]) -> Vec<String> {
    pages.iter().map(|p| p.id.clone()).collect()
}

/// Insert `page` so that it ends up at `index` (clamped to the end)
pub fn insert_at(pages: &[Page], index: usize, page: Page) -> Vec<Page> {
    let mut next = pages.to_vec();
    next.insert(index.min(next.len()), page);
    next
}

/// Remove the page with `id`, if present
pub fn remove_page(pages: &[Page], id: &str) -> Vec<Page> {
    pages.iter().filter(|p| p.id != id).cloned().collect()
}

/// Move the page with `id` to the front
pub fn move_to_front(pages: &[Page], id: &str) -> Vec<Page> {
    match pages.iter().position(|p| p.id == id) {
        Some(pos) => {
            let mut next = pages.to_vec();
            let page = next.remove(pos);
            next.insert(0, page);
            next
        }
        None => pages.to_vec(),
    }
}

/// Replace the label of the page with `id`
pub fn rename_page(pages: &[Page], id: &str, label: &str) -> Vec<Page> {
    pages
        .iter()
        .map(|p| {
            if p.id == id {
                Page { label: label.to_string(), ..p.clone() }
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Position of `id` in `pages`
pub fn index_of(pages: &[Page], id: &str) -> Option<usize> {
    pages.iter().position(|p| p.id == id)
}

/// Pick the active id after the page set changes from `old` to `new`.
///
/// - The first id in `new` that was not in `old` wins.
/// - Otherwise the current active id stays if it still exists.
/// - If it vanished, the page now at its old index (clamped to the last
///   page) takes over; an empty list has no active page.
pub fn next_active_id(old: &[Page], new: &[Page], active: Option<&str>) -> Option<String> {
    if let Some(added) = new.iter().find(|p| !old.iter().any(|o| o.id == p.id)) {
        return Some(added.id.clone());
    }

    let active = active?;
    if new.iter().any(|p| p.id == active) {
        return Some(active.to_string());
    }

    let last = new.len().checked_sub(1)?;
    let old_index = index_of(old, active).unwrap_or(0);
    new.get(old_index.min(last)).map(|p| p.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[&str]) -> Vec<Page> {
        ids.iter().map(|id| Page::new(*id, format!("Page {}", id))).collect()
    }

    fn ids_of(pages: &[Page]) -> Vec<&str> {
        pages.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_reorder_by_ids() {
        let list = pages(&["A", "B", "C", "D"]);
        let ids: Vec<String> = ["A", "C", "B", "D"].iter().map(|s| s.to_string()).collect();
        let next = reorder_by_ids(&list, &ids);
        assert_eq!(ids_of(&next), vec!["A", "C", "B", "D"]);
        assert_eq!(next[1], list[2]);
    }

    #[test]
    fn test_reorder_skips_stale_ids() {
        let list = pages(&["A", "B"]);
        let ids: Vec<String> = ["B", "gone", "A"].iter().map(|s| s.to_string()).collect();
        assert_eq!(ids_of(&reorder_by_ids(&list, &ids)), vec!["B", "A"]);
    }

    #[test]
    fn test_insert_at_every_index() {
        let list = pages(&["A", "B", "C"]);
        for k in 0..=list.len() {
            let next = insert_at(&list, k, Page::new("X", "New"));
            assert_eq!(next.len(), list.len() + 1);
            assert_eq!(next[k].id, "X");
            let rest: Vec<&str> = ids_of(&next).into_iter().filter(|id| *id != "X").collect();
            assert_eq!(rest, vec!["A", "B", "C"]);
        }
        // Past the end clamps
        assert_eq!(insert_at(&list, 99, Page::new("X", "New"))[3].id, "X");
    }

    #[test]
    fn test_move_to_front_and_rename() {
        let list = pages(&["A", "B", "C"]);
        assert_eq!(ids_of(&move_to_front(&list, "C")), vec!["C", "A", "B"]);
        assert_eq!(ids_of(&move_to_front(&list, "nope")), vec!["A", "B", "C"]);

        let renamed = rename_page(&list, "B", "Billing");
        assert_eq!(renamed[1].label, "Billing");
        assert_eq!(renamed[1].href, list[1].href);
    }

    #[test]
    fn test_new_page_becomes_active() {
        let old = pages(&["A", "B"]);
        let new = insert_at(&old, 1, Page::new("X", "New"));
        assert_eq!(next_active_id(&old, &new, Some("A")), Some("X".to_string()));
    }

    #[test]
    fn test_first_new_id_in_order_wins() {
        let old = pages(&["A"]);
        let new = pages(&["Y", "A", "X"]);
        assert_eq!(next_active_id(&old, &new, Some("A")), Some("Y".to_string()));
    }

    #[test]
    fn test_reorder_keeps_active() {
        let old = pages(&["A", "B", "C"]);
        let new = pages(&["C", "A", "B"]);
        assert_eq!(next_active_id(&old, &new, Some("B")), Some("B".to_string()));
        assert_eq!(next_active_id(&old, &new, None), None);
    }

    #[test]
    fn test_removed_active_is_replaced() {
        let old = pages(&["A", "B", "C"]);
        assert_eq!(next_active_id(&old, &remove_page(&old, "B"), Some("B")), Some("C".to_string()));
        assert_eq!(next_active_id(&old, &remove_page(&old, "C"), Some("C")), Some("B".to_string()));
        assert_eq!(next_active_id(&pages(&["A"]), &[], Some("A")), None);
    }
}
