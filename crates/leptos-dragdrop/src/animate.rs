//! Reorder Animator
//!
//! FLIP-style reorder animation. Records where a container's keyed
//! children sit, and after each render slides any child whose position
//! changed from its old spot back to its new one with a transform.
//! Added and removed children are not animated here.

use std::collections::HashMap;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Animation, Element};

use crate::config::AnimationConfig;
use crate::dom::{query_all, rect_of};
use crate::geometry::Rect;

/// Offset of one child between two snapshots
#[derive(Clone, Debug, PartialEq)]
pub struct Delta {
    pub key: String,
    pub dx: f64,
    pub dy: f64,
}

/// Children present in both snapshots whose top-left corner moved
pub fn position_deltas(before: &HashMap<String, Rect>, after: &[(String, Rect)]) -> Vec<Delta> {
    after
        .iter()
        .filter_map(|(key, new)| {
            let old = before.get(key)?;
            let dx = old.x - new.x;
            let dy = old.y - new.y;
            (dx != 0.0 || dy != 0.0).then(|| Delta { key: key.clone(), dx, dy })
        })
        .collect()
}

struct AnimatorState {
    selector: String,
    key_attribute: String,
    timing: AnimationConfig,
    previous: HashMap<String, Rect>,
    running: Vec<Animation>,
}

impl AnimatorState {
    /// Keyed elements with a fresh measurement
    fn measure(&self, container: &Element) -> Vec<(String, web_sys::HtmlElement, Rect)> {
        query_all(container, &self.selector)
            .into_iter()
            .filter_map(|el| {
                let key = el.get_attribute(&self.key_attribute)?;
                let rect = rect_of(&el);
                Some((key, el, rect))
            })
            .collect()
    }

    /// Jump every in-flight animation to its end state
    fn finish_running(&mut self) {
        for anim in self.running.drain(..) {
            let _ = anim.finish();
        }
    }

    fn snapshot(&mut self, container: &Element) {
        self.finish_running();
        self.previous = self
            .measure(container)
            .into_iter()
            .map(|(key, _, rect)| (key, rect))
            .collect();
    }

    fn play(&mut self, container: &Element) {
        self.finish_running();

        let current = self.measure(container);
        let rects: Vec<(String, Rect)> = current.iter().map(|(k, _, r)| (k.clone(), *r)).collect();
        let deltas = position_deltas(&self.previous, &rects);

        for delta in &deltas {
            if let Some((_, el, _)) = current.iter().find(|(k, _, _)| *k == delta.key) {
                match slide(el, delta, &self.timing) {
                    Ok(anim) => self.running.push(anim),
                    Err(e) => log::warn!("[ANIM] animate failed: {:?}", e),
                }
            }
        }
        if !deltas.is_empty() {
            log::debug!("[ANIM] sliding {} of {} children", deltas.len(), current.len());
        }

        self.previous = rects.into_iter().collect();
    }
}

/// Play `translate(delta) -> translate(0, 0)` on `el` via `Element.animate`.
/// Only the transform changes, so the animation never affects layout.
fn slide(el: &Element, delta: &Delta, timing: &AnimationConfig) -> Result<Animation, JsValue> {
    let keyframe = |transform: String| {
        let frame = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&frame, &"transform".into(), &transform.into());
        frame
    };
    let keyframes = js_sys::Array::of2(
        &keyframe(format!("translate({}px, {}px)", delta.dx, delta.dy)),
        &keyframe("translate(0, 0)".to_string()),
    );

    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"duration".into(), &timing.duration_ms.into());
    let _ = js_sys::Reflect::set(&options, &"easing".into(), &timing.easing.as_str().into());

    let animate: js_sys::Function = js_sys::Reflect::get(el, &"animate".into())?.dyn_into()?;
    animate.call2(el, &keyframes, &options)?.dyn_into()
}

/// Handle to a container's reorder animator
#[derive(Clone, Copy)]
pub struct ReorderAnimator {
    container: NodeRef<Div>,
    state: StoredValue<AnimatorState, LocalStorage>,
}

impl ReorderAnimator {
    /// Re-measure right now. Call before mutating the container outside the
    /// normal render cycle, or the next animation diffs against stale rects.
    pub fn invalidate(&self) {
        if let Some(container) = self.container.get_untracked() {
            self.state.update_value(|s| s.snapshot(&container));
        }
    }

    /// Measure and animate anything that moved since the last snapshot
    pub fn play(&self) {
        if let Some(container) = self.container.get_untracked() {
            self.state.update_value(|s| s.play(&container));
        }
    }

    pub fn finish_running(&self) {
        self.state.update_value(|s| s.finish_running());
    }
}

/// Animate reorders of `selector` children of `container`, keyed by
/// `key_attribute`. `watch` is tracked; each time it changes the children
/// are re-measured after the DOM update and moved ones slide into place.
pub fn use_animate_reorder<W>(
    container: NodeRef<Div>,
    selector: &str,
    key_attribute: &str,
    timing: AnimationConfig,
    watch: W,
) -> ReorderAnimator
where
    W: Fn() + 'static,
{
    let state = StoredValue::new_local(AnimatorState {
        selector: selector.to_string(),
        key_attribute: key_attribute.to_string(),
        timing,
        previous: HashMap::new(),
        running: Vec::new(),
    });
    let animator = ReorderAnimator { container, state };

    Effect::new(move |_| {
        watch();
        // The container mounts after the first run; track it too
        if container.get().is_some() {
            animator.play();
        }
    });

    on_cleanup(move || animator.finish_running());

    animator
}
