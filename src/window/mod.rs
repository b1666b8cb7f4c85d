pub mod decorator;

mod window_manager;

use std::fmt;

use crate::geometry::{Color, Rect};
use crate::layout::Dock;

pub use window_manager::WindowManager;

/// Stable handle for a registered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interaction state of a window.
///
/// Dragging and docked are separate variants, so a window can never be
/// both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Free,
    /// Following the cursor; the offset is cursor minus rect origin at grab.
    Dragging { offset_x: i32, offset_y: i32 },
    /// Laid out from its parent; the stored rect is ignored.
    Docked(Dock),
}

#[derive(Debug, Clone)]
pub struct Window {
    /// Authoritative only while not docked.
    rect: Rect,
    color: Color,
    state: WindowState,
}

impl Window {
    fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            state: WindowState::Free,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_dragged(&self) -> bool {
        matches!(self.state, WindowState::Dragging { .. })
    }

    pub fn is_docked(&self) -> bool {
        matches!(self.state, WindowState::Docked(_))
    }

    pub fn dock(&self) -> Option<Dock> {
        match self.state {
            WindowState::Docked(dock) => Some(dock),
            _ => None,
        }
    }

    /// Zero unless dragging.
    pub fn drag_offset(&self) -> (i32, i32) {
        match self.state {
            WindowState::Dragging { offset_x, offset_y } => (offset_x, offset_y),
            _ => (0, 0),
        }
    }
}
