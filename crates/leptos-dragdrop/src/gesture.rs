//! Gesture State Machine
//!
//! Decides click vs drag for one press-to-release gesture and keeps the
//! live identity order while dragging. Holds no DOM handles, so the whole
//! decision logic runs (and is tested) off the browser.

use crate::geometry::{build_drop_targets, target_at, DropTarget, Point, Rect};
use crate::order::relocate;

/// Where a gesture is between press and release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pointer is down, movement still below threshold
    Pressed,
    /// Threshold crossed; moves now reorder
    Dragging,
}

/// What a single pointer move asks the caller to do
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveEffect {
    /// This move crossed the threshold: show the avatar, hide the original
    pub drag_started: bool,
    /// A new order to commit right away
    pub reordered: Option<Vec<String>>,
}

/// How a gesture ended
#[derive(Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Never crossed the threshold
    Activate(String),
    /// Was a drag; carries the last committed order
    Dropped(Vec<String>),
    /// Interrupted (pointercancel); nothing to report
    Cancelled,
}

/// State for one gesture
#[derive(Clone, Debug)]
pub struct GestureSession {
    item_id: String,
    origin: Point,
    grab_offset: Point,
    threshold: f64,
    /// Pointer that pressed; other pointers are ignored
    pointer_id: Option<i32>,
    phase: GesturePhase,
    /// Built once, on the move that starts the drag
    targets: Option<Vec<DropTarget>>,
    /// Order at measurement time; drop slots refer to it
    measured: Vec<String>,
    current: Option<usize>,
    /// Identity log, updated on every commit
    order: Vec<String>,
}

impl GestureSession {
    /// Start a gesture on `item_id`.
    /// `grab_offset` is the press point relative to the item's top-left corner.
    pub fn press(item_id: impl Into<String>, origin: Point, grab_offset: Point, order: Vec<String>, threshold: f64) -> Self {
        Self {
            item_id: item_id.into(),
            origin,
            grab_offset,
            threshold,
            pointer_id: None,
            phase: GesturePhase::Pressed,
            targets: None,
            measured: Vec::new(),
            current: None,
            order,
        }
    }

    /// Bind the gesture to one pointer
    pub fn with_pointer(mut self, pointer_id: i32) -> Self {
        self.pointer_id = Some(pointer_id);
        self
    }

    /// Whether an event from `pointer_id` belongs to this gesture
    pub fn owns_pointer(&self, pointer_id: i32) -> bool {
        self.pointer_id.map_or(true, |own| own == pointer_id)
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub fn grab_offset(&self) -> Point {
        self.grab_offset
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn drop_targets(&self) -> &[DropTarget] {
        self.targets.as_deref().unwrap_or(&[])
    }

    /// Feed a pointer move.
    ///
    /// `measure` returns `(id, rect)` for every item in display order; it is
    /// called at most once per gesture, on the move that starts the drag.
    pub fn pointer_move<F>(&mut self, at: Point, measure: F) -> MoveEffect
    where
        F: FnOnce() -> Vec<(String, Rect)>,
    {
        let mut effect = MoveEffect::default();

        if self.phase == GesturePhase::Pressed {
            if (at.x - self.origin.x).abs() <= self.threshold {
                return effect;
            }
            self.phase = GesturePhase::Dragging;
            effect.drag_started = true;
        }

        if self.targets.is_none() {
            let measured = measure();
            let rects: Vec<Rect> = measured.iter().map(|(_, r)| *r).collect();
            self.targets = Some(build_drop_targets(&rects));
            self.measured = measured.into_iter().map(|(id, _)| id).collect();
        }

        let hit = target_at(self.drop_targets(), at.x).map(|t| t.insert_at);
        match hit {
            Some(slot) if self.current != Some(slot) => {
                self.current = Some(slot);
                let next = relocate(&self.order, &self.measured, &self.item_id, slot);
                if next != self.order {
                    self.order = next.clone();
                    effect.reordered = Some(next);
                }
            }
            Some(_) => {}
            None => self.current = None,
        }

        effect
    }

    /// Pointer released. Click and drag are mutually exclusive outcomes.
    pub fn release(self) -> GestureOutcome {
        match self.phase {
            GesturePhase::Pressed => GestureOutcome::Activate(self.item_id),
            GesturePhase::Dragging => GestureOutcome::Dropped(self.order),
        }
    }

    /// Pointer cancelled by the browser
    pub fn cancel(self) -> GestureOutcome {
        GestureOutcome::Cancelled
    }
}
