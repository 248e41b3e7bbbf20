//! Drag Controller
//!
//! Binds one [`GestureSession`] to the DOM for the lifetime of a pointer
//! gesture: pointer capture, the drag avatar, the hidden original and the
//! gesture-scoped listeners. Everything it touches is put back on release.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, PointerEvent};

use crate::animate::ReorderAnimator;
use crate::config::DragConfig;
use crate::dom::{clone_for_drag_avatar, measure_items, rect_of, set_hidden, show_at};
use crate::geometry::{avatar_origin, Point};
use crate::gesture::{GestureOutcome, GestureSession};

/// Where a gesture reports back to
#[derive(Clone, Copy)]
pub struct GestureHandlers {
    /// Called with the full new id order each time the drop slot changes
    pub on_reorder: Callback<Vec<String>>,
    /// Called once when the gesture ends without crossing the threshold
    pub on_activate: Callback<String>,
    /// Refreshed before each reorder commit
    pub animator: Option<ReorderAnimator>,
}

/// DOM state owned by a live gesture
struct LiveGesture {
    session: GestureSession,
    container: HtmlElement,
    item: HtmlElement,
    avatar: Option<HtmlElement>,
    config: DragConfig,
}

impl LiveGesture {
    fn start_avatar(&mut self) {
        match clone_for_drag_avatar(&self.item, &self.config.avatar_class) {
            Ok(avatar) => {
                if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    let _ = body.append_child(&avatar);
                    self.avatar = Some(avatar);
                }
            }
            Err(e) => log::warn!("[DND] could not create drag avatar: {:?}", e),
        }
        set_hidden(&self.item, true);
    }

    fn teardown(&mut self) {
        if let Some(avatar) = self.avatar.take() {
            avatar.remove();
        }
        set_hidden(&self.item, false);
    }
}

/// Gesture-scoped listeners on the container
struct GestureListeners {
    target: HtmlElement,
    on_move: Closure<dyn FnMut(PointerEvent)>,
    on_up: Closure<dyn FnMut(PointerEvent)>,
    on_cancel: Closure<dyn FnMut(PointerEvent)>,
}

impl GestureListeners {
    fn attach(&self) {
        let _ = self.target.add_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        let _ = self.target.add_event_listener_with_callback("pointerup", self.on_up.as_ref().unchecked_ref());
        let _ = self.target.add_event_listener_with_callback("pointercancel", self.on_cancel.as_ref().unchecked_ref());
    }

    fn detach(&self) {
        let _ = self.target.remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        let _ = self.target.remove_event_listener_with_callback("pointerup", self.on_up.as_ref().unchecked_ref());
        let _ = self.target.remove_event_listener_with_callback("pointercancel", self.on_cancel.as_ref().unchecked_ref());
    }
}

type Shared<T> = Rc<RefCell<Option<T>>>;

/// Resolve the pressed item and its container from the event target
fn resolve_target(ev: &PointerEvent, config: &DragConfig) -> Option<(HtmlElement, HtmlElement)> {
    let target: Element = ev.target()?.dyn_into().ok()?;
    let container = target.closest(&config.container_selector).ok()??.dyn_into().ok()?;
    let item = target.closest(&config.item_selector).ok()??.dyn_into().ok()?;
    Some((container, item))
}

/// Drop `value` on the next tick, outside the listener that owns it.
/// The one-shot closure frees itself once the timer fires.
fn drop_next_tick<T: 'static>(value: T) {
    let release = Closure::once_into_js(move || drop(value));
    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(release.unchecked_ref(), 0);
    }
}

fn client_point(ev: &PointerEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Start a gesture from a pointer-down on the item `item_id`.
///
/// `order` is the current id order of the container's items. Moves are
/// tracked on the container (which captures the pointer) until pointer-up,
/// when all listeners are removed whatever the outcome.
pub fn begin_gesture(ev: &PointerEvent, item_id: String, order: Vec<String>, config: &DragConfig, handlers: GestureHandlers) {
    if ev.button() != 0 {
        return;
    }
    ev.prevent_default();

    let Some((container, item)) = resolve_target(ev, config) else {
        log::debug!("[DND] pointerdown outside a draggable item, ignoring");
        return;
    };

    let press = client_point(ev);
    let item_rect = rect_of(&item);
    let grab_offset = Point::new(press.x - item_rect.x, press.y - item_rect.y);

    let _ = container.set_pointer_capture(ev.pointer_id());
    let _ = item.focus();

    log::debug!("[DND] press on {}", item_id);
    let session = GestureSession::press(item_id, press, grab_offset, order, config.threshold_px).with_pointer(ev.pointer_id());

    let live: Shared<LiveGesture> = Rc::new(RefCell::new(Some(LiveGesture {
        session,
        container: container.clone(),
        item,
        avatar: None,
        config: config.clone(),
    })));
    let listeners: Shared<GestureListeners> = Rc::new(RefCell::new(None));

    let on_move = {
        let live = live.clone();
        Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
            let at = client_point(&ev);
            let reordered = {
                let mut guard = live.borrow_mut();
                let Some(g) = guard.as_mut() else { return };
                if !g.session.owns_pointer(ev.pointer_id()) {
                    return;
                }

                let (container, config) = (&g.container, &g.config);
                let effect = g.session.pointer_move(at, || {
                    // Measure settled positions, not mid-slide ones
                    if let Some(animator) = handlers.animator {
                        animator.finish_running();
                    }
                    measure_items(container, &config.item_selector, &config.id_attribute)
                });

                if effect.drag_started {
                    log::debug!("[DND] drag start on {}", g.session.item_id());
                    g.start_avatar();
                }
                if let Some(avatar) = &g.avatar {
                    show_at(avatar, avatar_origin(at, g.session.grab_offset()));
                }
                effect.reordered
            };

            // Commit outside the borrow; the handler updates state and re-renders
            if let Some(order) = reordered {
                log::debug!("[DND] commit order {:?}", order);
                if let Some(animator) = handlers.animator {
                    animator.invalidate();
                }
                handlers.on_reorder.run(order);
            }
        })
    };

    let finish = {
        let live = live.clone();
        let listeners = listeners.clone();
        move |ev: PointerEvent, cancelled: bool| {
            let owned = live.borrow().as_ref().is_some_and(|g| g.session.owns_pointer(ev.pointer_id()));
            if !owned {
                return;
            }
            let Some(mut g) = live.borrow_mut().take() else { return };

            let _ = g.container.release_pointer_capture(ev.pointer_id());
            g.teardown();
            if let Some(l) = listeners.borrow_mut().take() {
                l.detach();
                drop_next_tick(l);
            }

            let outcome = if cancelled { g.session.cancel() } else { g.session.release() };
            match outcome {
                GestureOutcome::Activate(id) => {
                    log::debug!("[DND] click on {}", id);
                    handlers.on_activate.run(id);
                }
                GestureOutcome::Dropped(order) => log::debug!("[DND] drop, final order {:?}", order),
                GestureOutcome::Cancelled => log::debug!("[DND] gesture cancelled"),
            }
        }
    };

    let on_up = {
        let finish = finish.clone();
        Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| finish(ev, false))
    };
    let on_cancel = Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| finish(ev, true));

    let l = GestureListeners {
        target: container,
        on_move,
        on_up,
        on_cancel,
    };
    l.attach();
    *listeners.borrow_mut() = Some(l);
}
