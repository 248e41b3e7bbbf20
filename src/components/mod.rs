//! UI Components
//!
//! Reusable Leptos components.

mod hover_separator;
mod page_bar;
mod page_button;
mod page_icon;
mod page_menu;

pub use hover_separator::HoverSeparator;
pub use page_bar::PageBar;
pub use page_button::PageButton;
pub use page_icon::PageIconView;
pub use page_menu::{MenuAction, PageMenu};
