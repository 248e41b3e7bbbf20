//! Initial Pages
//!
//! The host's starting page set, kept as JSON.

use crate::models::Page;

const SEED_PAGES: &str = r##"[
    { "id": "1", "label": "Info", "href": "#/info", "icon": "info" },
    { "id": "2", "label": "Details", "href": "#/details" },
    { "id": "3", "label": "Other", "href": "#/other" },
    { "id": "4", "label": "Ending", "href": "#/ending", "icon": "check" }
]"##;

pub fn parse_pages(json: &str) -> Result<Vec<Page>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid page seed: {}", e))
}

/// Seed pages; a bad seed logs and yields an empty bar
pub fn initial_pages() -> Vec<Page> {
    parse_pages(SEED_PAGES).unwrap_or_else(|e| {
        log::error!("{}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageIcon;

    #[test]
    fn test_seed_parses() {
        let pages = parse_pages(SEED_PAGES).unwrap();
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0].icon, Some(PageIcon::Info));
        assert_eq!(pages[1].icon, None);
        assert_eq!(pages[3].label, "Ending");
    }

    #[test]
    fn test_bad_seed_is_error() {
        assert!(parse_pages("[{").is_err());
    }
}
