//! Draw primitives produced by a frame and consumed by an output driver.

use crate::geometry::{Color, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
}

/// Ordered draw commands; later commands paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-sized rectangles are dropped.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}
