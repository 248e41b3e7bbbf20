//! DOM Helpers
//!
//! Thin web-sys wrappers used by the controller and the animator.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

use crate::geometry::{Point, Rect};

/// Snapshot an element's bounding box
pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.x(), r.y(), r.width(), r.height())
}

/// All elements under `container` matching `selector`, in DOM order
pub fn query_all(container: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = container.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Measure `(id, rect)` for every matching element that carries `id_attribute`
pub fn measure_items(container: &Element, selector: &str, id_attribute: &str) -> Vec<(String, Rect)> {
    query_all(container, selector)
        .iter()
        .filter_map(|el| el.get_attribute(id_attribute).map(|id| (id, rect_of(el))))
        .collect()
}

/// Deep clone `original` into a floating avatar.
///
/// Every `id` in the copy is stripped so it can live next to the original,
/// and the copy is taken out of layout and hit testing.
pub fn clone_for_drag_avatar(original: &HtmlElement, class: &str) -> Result<HtmlElement, JsValue> {
    let clone: HtmlElement = original.clone_node_with_deep(true)?.dyn_into()?;

    clone.remove_attribute("id")?;
    let nested = clone.query_selector_all("[id]")?;
    for i in 0..nested.length() {
        if let Some(el) = nested.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            el.remove_attribute("id")?;
        }
    }

    clone.class_list().add_1(class)?;

    // Keep the grabbed size; the original may be sized by its flex parent
    let size = rect_of(original);
    let style = clone.style();
    style.set_property("position", "fixed")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("margin", "0")?;
    style.set_property("z-index", "1000")?;
    style.set_property("width", &format!("{}px", size.width))?;
    style.set_property("height", &format!("{}px", size.height))?;
    style.remove_property("visibility")?;

    Ok(clone)
}

/// Move a fixed-position element's top-left corner to `at`
pub fn show_at(el: &HtmlElement, at: Point) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", at.x));
    let _ = style.set_property("top", &format!("{}px", at.y));
}

/// Hide in place; the element keeps its layout slot
pub fn set_hidden(el: &HtmlElement, hidden: bool) {
    let style = el.style();
    let _ = if hidden {
        style.set_property("visibility", "hidden")
    } else {
        style.remove_property("visibility").map(|_| ())
    };
}
