//! Window Prompt
//!
//! Naming new or renamed pages through the browser's modal prompt.

/// Ask for a page name. `None` when cancelled, blank, or no window.
pub fn prompt_page_name(message: &str, default: &str) -> Option<String> {
    let window = web_sys::window()?;
    let answer = window.prompt_with_message_and_default(message, default).ok()??;
    let name = answer.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
