//! Leptos DragDrop Utilities
//!
//! Pointer-driven drag-to-reorder for a single row of items.
//! Uses a movement threshold to distinguish click from drag, reorders the
//! identity order live while dragging and slides items into their new
//! slots with FLIP animations.
//!
//! - [`geometry`]: rects, points and the drop-target partition
//! - [`order`]: moving an id inside an ordered log
//! - [`gesture`]: the DOM-free click/drag state machine
//! - [`controller`]: [`begin_gesture`], binding a gesture to the DOM
//! - [`animate`]: [`use_animate_reorder`]

pub mod animate;
pub mod config;
pub mod controller;
pub mod dom;
pub mod geometry;
pub mod gesture;
pub mod order;

pub use animate::{use_animate_reorder, ReorderAnimator};
pub use config::{AnimationConfig, DragConfig, DRAG_THRESHOLD_PX};
pub use controller::{begin_gesture, GestureHandlers};
pub use geometry::{DropTarget, Point, Rect};
pub use gesture::{GestureOutcome, GesturePhase, GestureSession, MoveEffect};
pub use order::relocate;
