//! Dock positions, the drop targets that select them, and the layout rule
//! each one applies to its parent rectangle.

use crate::geometry::{Rect, centered_rect};
use crate::window::WindowId;

/// Where a docked window sits inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DockPos {
    /// Fill the whole parent.
    Center,
}

impl DockPos {
    pub const COUNT: usize = 1;
    pub const ALL: [DockPos; Self::COUNT] = [DockPos::Center];

    /// Rectangle a window docked at this position occupies inside `parent`.
    pub fn resolve(self, parent: Rect) -> Rect {
        match self {
            DockPos::Center => parent,
        }
    }

    /// Drop-target rectangle advertising this position on `parent`.
    pub fn slot_rect(self, parent: Rect, slot_width: i32, slot_height: i32) -> Rect {
        match self {
            DockPos::Center => centered_rect(
                parent.x + parent.width / 2,
                parent.y + parent.height / 2,
                slot_width,
                slot_height,
            ),
        }
    }
}

/// What a docked window is laid out against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockParent {
    /// The whole viewport.
    Root,
    Window(WindowId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dock {
    pub pos: DockPos,
    pub parent: DockParent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockSlot {
    pub pos: DockPos,
    pub rect: Rect,
}

/// Drop targets on the viewport, one per dock position.
pub fn root_dock_slots(
    viewport: Rect,
    slot_width: i32,
    slot_height: i32,
) -> [DockSlot; DockPos::COUNT] {
    DockPos::ALL.map(|pos| DockSlot {
        pos,
        rect: pos.slot_rect(viewport, slot_width, slot_height),
    })
}

/// First slot under the point, if any.
pub fn slot_at(slots: &[DockSlot], x: i32, y: i32) -> Option<DockSlot> {
    slots.iter().find(|slot| slot.rect.contains(x, y)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_slot_is_centered_in_viewport() {
        let slots = root_dock_slots(Rect::new(0, 0, 1000, 1000), 100, 100);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].pos, DockPos::Center);
        assert_eq!(slots[0].rect, Rect::new(450, 450, 100, 100));
    }

    #[test]
    fn center_slot_follows_parent_origin() {
        let rect = DockPos::Center.slot_rect(Rect::new(20, 10, 40, 20), 10, 4);
        assert_eq!(rect, Rect::new(35, 18, 10, 4));
    }

    #[test]
    fn center_dock_fills_parent() {
        let parent = Rect::new(3, 4, 50, 60);
        assert_eq!(DockPos::Center.resolve(parent), parent);
    }

    #[test]
    fn slot_at_hits_only_inside() {
        let slots = root_dock_slots(Rect::new(0, 0, 80, 24), 10, 4);
        let slot = slots[0].rect;
        assert!(slot_at(&slots, slot.x, slot.y).is_some());
        assert!(slot_at(&slots, slot.right(), slot.y).is_none());
        assert!(slot_at(&slots, 0, 0).is_none());
    }
}
