//! Page Icon Component

use leptos::prelude::*;

use crate::models::PageIcon;

/// Glyph for a page; pages without an icon get the document glyph
#[component]
pub fn PageIconView(icon: Option<PageIcon>) -> impl IntoView {
    let (class, glyph) = match icon.unwrap_or(PageIcon::Document) {
        PageIcon::Info => ("PageIcon is-info", "ⓘ"),
        PageIcon::Document => ("PageIcon", "▤"),
        PageIcon::Check => ("PageIcon is-check", "✓"),
    };
    view! { <span class=class aria-hidden="true">{glyph}</span> }
}
