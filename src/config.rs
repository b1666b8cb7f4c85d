use crate::constants::{
    DEFAULT_BORDER_THICKNESS, DEFAULT_DOCK_SLOT_HEIGHT, DEFAULT_DOCK_SLOT_WIDTH,
    DEFAULT_TOP_BAR_HEIGHT,
};

/// Fixed chrome and dock metrics for a window manager instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig {
    pub top_bar_height: i32,
    pub border_thickness: i32,
    pub dock_slot_width: i32,
    pub dock_slot_height: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            top_bar_height: DEFAULT_TOP_BAR_HEIGHT,
            border_thickness: DEFAULT_BORDER_THICKNESS,
            dock_slot_width: DEFAULT_DOCK_SLOT_WIDTH,
            dock_slot_height: DEFAULT_DOCK_SLOT_HEIGHT,
        }
    }
}

impl UiConfig {
    /// Negative metrics make no sense; clamp them to zero.
    pub fn sanitized(self) -> Self {
        Self {
            top_bar_height: self.top_bar_height.max(0),
            border_thickness: self.border_thickness.max(0),
            dock_slot_width: self.dock_slot_width.max(0),
            dock_slot_height: self.dock_slot_height.max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_negatives() {
        let cfg = UiConfig {
            top_bar_height: -1,
            border_thickness: 2,
            dock_slot_width: -3,
            dock_slot_height: 4,
        }
        .sanitized();
        assert_eq!(cfg.top_bar_height, 0);
        assert_eq!(cfg.border_thickness, 2);
        assert_eq!(cfg.dock_slot_width, 0);
        assert_eq!(cfg.dock_slot_height, 4);
    }
}
