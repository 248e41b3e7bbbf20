//! Frontend Models
//!
//! Data structures shown by the page bar.

use serde::{Deserialize, Serialize};

/// Glyph shown before a page label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageIcon {
    Info,
    Document,
    Check,
}

/// One page button. Identity is `id`; everything else is display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: Option<PageIcon>,
}

impl Page {
    /// A new page with an href derived from its label
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        let slug: String = label
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();
        Self {
            id: id.into(),
            href: format!("#/{}", slug),
            label,
            icon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_href() {
        let page = Page::new("7", "Thank You Page");
        assert_eq!(page.href, "#/thank-you-page");
        assert_eq!(page.icon, None);
    }

    #[test]
    fn test_icon_defaults_to_none() {
        let page: Page = serde_json::from_str(r##"{"id":"1","label":"Info","href":"#/info"}"##).unwrap();
        assert_eq!(page.icon, None);

        let page: Page =
            serde_json::from_str(r##"{"id":"1","label":"Info","href":"#/info","icon":"check"}"##).unwrap();
        assert_eq!(page.icon, Some(PageIcon::Check));
    }
}
