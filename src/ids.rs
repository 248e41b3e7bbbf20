//! Page Id Generation
//!
//! Ids for pages created at runtime, owned by the host.

/// Monotonic string ids, starting after the largest numeric seed id
#[derive(Clone, Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let max = existing.into_iter().filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
        Self { next: max + 1 }
    }

    pub fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_after_seed() {
        let mut ids = SequentialIds::after(["1", "4", "custom", "2"]);
        assert_eq!(ids.next_id(), "5");
        assert_eq!(ids.next_id(), "6");
    }

    #[test]
    fn test_empty_seed() {
        let mut ids = SequentialIds::after(std::iter::empty());
        assert_eq!(ids.next_id(), "1");
    }
}
