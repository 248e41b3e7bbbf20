//! Order Utilities
//!
//! Relocating one id inside an ordered identity log.

/// Move `dragged` so it sits in slot `insert_at` of `measured`.
///
/// `measured` is the order captured when the drop targets were built and
/// `insert_at` one of its `N + 1` slots. The dragged id is removed from
/// `current` and put back before the first id at or after the slot that is
/// still present (the dragged id itself and stale ids are skipped), or at
/// the end when there is none. Because the anchor comes from the measured
/// order, the result depends only on the final slot, not on the path taken
/// to reach it.
pub fn relocate(current: &[String], measured: &[String], dragged: &str, insert_at: usize) -> Vec<String> {
    let mut next: Vec<String> = current.iter().filter(|id| *id != dragged).cloned().collect();

    if !current.iter().any(|id| id == dragged) {
        return next;
    }

    let anchor = measured
        .iter()
        .skip(insert_at)
        .filter(|id| *id != dragged)
        .find_map(|id| next.iter().position(|n| n == id));

    match anchor {
        Some(pos) => next.insert(pos, dragged.to_string()),
        None => next.push(dragged.to_string()),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_move_left() {
        let order = ids(&["A", "B", "C", "D"]);
        assert_eq!(relocate(&order, &order, "C", 1), ids(&["A", "C", "B", "D"]));
        assert_eq!(relocate(&order, &order, "C", 0), ids(&["C", "A", "B", "D"]));
    }

    #[test]
    fn test_move_right() {
        let order = ids(&["A", "B", "C", "D"]);
        assert_eq!(relocate(&order, &order, "A", 2), ids(&["B", "A", "C", "D"]));
        assert_eq!(relocate(&order, &order, "A", 4), ids(&["B", "C", "D", "A"]));
    }

    #[test]
    fn test_own_slots_are_null_moves() {
        let order = ids(&["A", "B", "C", "D"]);
        assert_eq!(relocate(&order, &order, "C", 2), order);
        assert_eq!(relocate(&order, &order, "C", 3), order);
        assert_eq!(relocate(&order, &order, "D", 4), order);
    }

    #[test]
    fn test_anchor_uses_measured_order() {
        let measured = ids(&["A", "B", "C", "D"]);
        // Live order after an earlier step moved C to the front
        let current = ids(&["C", "A", "B", "D"]);
        assert_eq!(relocate(&current, &measured, "C", 3), ids(&["A", "B", "C", "D"]));
        assert_eq!(relocate(&current, &measured, "C", 4), ids(&["A", "B", "D", "C"]));
    }

    #[test]
    fn test_stale_ids_skipped() {
        let measured = ids(&["A", "B", "X", "C"]);
        let current = ids(&["A", "B", "C"]);
        // Anchor X is gone; falls through to C
        assert_eq!(relocate(&current, &measured, "A", 2), ids(&["B", "A", "C"]));
    }

    #[test]
    fn test_unknown_dragged_id() {
        let order = ids(&["A", "B"]);
        assert_eq!(relocate(&order, &order, "Z", 0), order);
    }
}
