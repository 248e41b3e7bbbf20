//! Drag Configuration

use serde::Deserialize;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Settings for a reorderable container
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Horizontal movement (exclusive) before a press becomes a drag
    pub threshold_px: f64,
    /// Selector of the container that captures the pointer
    pub container_selector: String,
    /// Selector of the draggable items inside the container
    pub item_selector: String,
    /// Attribute carrying each item's id
    pub id_attribute: String,
    /// Class added to the drag avatar
    pub avatar_class: String,
    pub animation: AnimationConfig,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold_px: DRAG_THRESHOLD_PX,
            container_selector: ".PageBar".to_string(),
            item_selector: ".PageButton".to_string(),
            id_attribute: "data-id".to_string(),
            avatar_class: "drag-avatar".to_string(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Timing of the reorder slide
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: f64,
    pub easing: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 200.0,
            easing: "ease-in-out".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DragConfig::default();
        assert_eq!(config.threshold_px, 5.0);
        assert_eq!(config.animation.duration_ms, 200.0);
        assert_eq!(config.animation.easing, "ease-in-out");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DragConfig =
            serde_json::from_str(r#"{ "threshold_px": 8.0, "animation": { "duration_ms": 120.0 } }"#).unwrap();
        assert_eq!(config.threshold_px, 8.0);
        assert_eq!(config.item_selector, ".PageButton");
        assert_eq!(config.animation.duration_ms, 120.0);
        assert_eq!(config.animation.easing, "ease-in-out");
    }
}
