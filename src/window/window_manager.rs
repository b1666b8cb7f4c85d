use super::{Window, WindowId, WindowState};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::decorator::{SolidDecorator, WindowChrome, WindowDecorator};
use crate::config::UiConfig;
use crate::error::InvariantError;
use crate::geometry::{Color, Rect, shrink};
use crate::input::{InputSnapshot, KeyId};
use crate::layout::{Dock, DockParent, DockPos, DockSlot, root_dock_slots, slot_at};
use crate::render::DrawList;
use crate::theme;

/// Owns every window, their stacking order and the viewport they live in.
///
/// `window_order` doubles as interaction priority (index 0 is tested
/// first) and paint priority (index 0 is drawn last, on top).
pub struct WindowManager {
    width: i32,
    height: i32,
    config: UiConfig,
    windows: BTreeMap<WindowId, Window>,
    window_order: Vec<WindowId>,
    decorator: Arc<dyn WindowDecorator>,
    next_window_seq: u32,
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("window_order", &self.window_order)
            .finish_non_exhaustive()
    }
}

impl WindowManager {
    pub fn new(config: UiConfig) -> Self {
        Self {
            width: 0,
            height: 0,
            config: config.sanitized(),
            windows: BTreeMap::new(),
            window_order: Vec::new(),
            decorator: Arc::new(SolidDecorator::default()),
            next_window_seq: 0,
        }
    }

    pub fn set_decorator(&mut self, decorator: Arc<dyn WindowDecorator>) {
        self.decorator = decorator;
    }

    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
    }

    pub fn viewport(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Register a free window behind every existing one.
    pub fn add_window(&mut self, rect: Rect, color: Color) -> WindowId {
        let id = WindowId(self.next_window_seq);
        self.next_window_seq = self.next_window_seq.wrapping_add(1);
        tracing::debug!(window_id = %id, ?rect, "opened window");
        self.windows.insert(id, Window::new(rect, color));
        self.window_order.push(id);
        id
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    pub fn window_order(&self) -> &[WindowId] {
        &self.window_order
    }

    pub fn front(&self) -> Option<WindowId> {
        self.window_order.first().copied()
    }

    /// Move `id` to index 0, shifting the entries in front of it back by
    /// one. Everything else keeps its relative order.
    pub fn move_to_front(&mut self, id: WindowId) {
        match self.window_order.iter().position(|&x| x == id) {
            Some(0) | None => {}
            Some(pos) => {
                let item = self.window_order.remove(pos);
                self.window_order.insert(0, item);
                tracing::trace!(window_id = %id, from = pos, "moved window to front");
            }
        }
    }

    pub fn root_dock_slots(&self) -> [DockSlot; DockPos::COUNT] {
        root_dock_slots(
            self.viewport(),
            self.config.dock_slot_width,
            self.config.dock_slot_height,
        )
    }

    /// Dock `id` at `pos` inside `parent`. Refuses links that would make
    /// the parent chain loop back to `id`.
    pub fn dock_to(
        &mut self,
        id: WindowId,
        pos: DockPos,
        parent: DockParent,
    ) -> Result<(), InvariantError> {
        if !self.windows.contains_key(&id) {
            return Err(InvariantError::UnknownWindow(id));
        }
        if let DockParent::Window(mut current) = parent {
            let mut steps = 0;
            loop {
                if current == id || steps > self.windows.len() {
                    return Err(InvariantError::DockCycle(id));
                }
                let window = self
                    .windows
                    .get(&current)
                    .ok_or(InvariantError::UnknownDockParent {
                        window: id,
                        parent: current,
                    })?;
                match window.dock() {
                    Some(Dock {
                        parent: DockParent::Window(next),
                        ..
                    }) => current = next,
                    _ => break,
                }
                steps += 1;
            }
        }
        if let Some(window) = self.windows.get_mut(&id) {
            window.state = WindowState::Docked(Dock { pos, parent });
            tracing::debug!(window_id = %id, ?pos, ?parent, "docked window");
        }
        Ok(())
    }

    /// Rectangle used for hit-testing and drawing.
    ///
    /// Follows dock parents with a bounded walk; a chain longer than the
    /// number of registered windows must contain a cycle.
    pub fn try_effective_rect(&self, id: WindowId) -> Result<Rect, InvariantError> {
        let mut chain: Vec<DockPos> = Vec::new();
        let mut current = id;
        let base = loop {
            let window = self
                .windows
                .get(&current)
                .ok_or(InvariantError::UnknownWindow(current))?;
            let Some(dock) = window.dock() else {
                break window.rect;
            };
            chain.push(dock.pos);
            if chain.len() > self.windows.len() {
                return Err(InvariantError::DockCycle(id));
            }
            match dock.parent {
                DockParent::Root => break self.viewport(),
                DockParent::Window(parent) => {
                    if !self.windows.contains_key(&parent) {
                        return Err(InvariantError::UnknownDockParent {
                            window: current,
                            parent,
                        });
                    }
                    current = parent;
                }
            }
        };
        Ok(chain.iter().rev().fold(base, |rect, pos| pos.resolve(rect)))
    }

    /// # Panics
    ///
    /// On an unregistered id or a dock cycle. Neither can be produced
    /// through this type's public API.
    pub fn effective_rect(&self, id: WindowId) -> Rect {
        match self.try_effective_rect(id) {
            Ok(rect) => rect,
            Err(err) => unreachable!("{err}"),
        }
    }

    fn inner_rect(&self, id: WindowId) -> Rect {
        shrink(self.effective_rect(id), self.config.border_thickness)
    }

    pub fn top_bar_rect(&self, id: WindowId) -> Rect {
        let inner = self.inner_rect(id);
        Rect::new(
            inner.x,
            inner.y,
            inner.width,
            inner.height.min(self.config.top_bar_height),
        )
    }

    pub fn content_rect(&self, id: WindowId) -> Rect {
        let inner = self.inner_rect(id);
        let bar = inner.height.min(self.config.top_bar_height);
        Rect::new(inner.x, inner.y.saturating_add(bar), inner.width, inner.height - bar)
    }

    /// Run one frame of interaction for every window, topmost first.
    pub fn update(&mut self, input: &mut InputSnapshot) {
        let order = self.window_order.clone();
        for id in order {
            self.update_window(id, input);
        }
        debug_assert_eq!(self.check_invariants(), Ok(()));
    }

    /// Press-to-grab, drag-follow and release-to-drop for one window.
    pub fn update_window(&mut self, id: WindowId, input: &mut InputSnapshot) {
        if !self.windows.contains_key(&id) {
            return;
        }
        let (cx, cy) = input.cursor();

        if input.was_pressed(KeyId::Primary) {
            let hit_window = self.effective_rect(id).contains(cx, cy);
            let hit_bar = self.top_bar_rect(id).contains(cx, cy);
            if hit_window {
                self.move_to_front(id);
                input.consume(KeyId::Primary);
            }
            if hit_bar {
                self.begin_drag(id, cx, cy);
            }
        }

        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        let WindowState::Dragging { offset_x, offset_y } = window.state else {
            return;
        };
        window.rect = window.rect.with_origin(cx.saturating_sub(offset_x), cy.saturating_sub(offset_y));

        if input.was_unpressed(KeyId::Primary) {
            self.end_drag(id, cx, cy);
        }
    }

    fn begin_drag(&mut self, id: WindowId, cx: i32, cy: i32) {
        let docked_rect = self.effective_rect(id);
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        if window.is_docked() {
            let (ox, oy) = undock_anchor(docked_rect, window.rect, cx, cy);
            window.rect = window.rect.with_origin(cx.saturating_sub(ox), cy.saturating_sub(oy));
            tracing::debug!(window_id = %id, rect = ?window.rect, "undocked window");
        }
        window.state = WindowState::Dragging {
            offset_x: cx - window.rect.x,
            offset_y: cy - window.rect.y,
        };
        tracing::debug!(window_id = %id, cursor = ?(cx, cy), "started drag");
    }

    fn end_drag(&mut self, id: WindowId, cx: i32, cy: i32) {
        let slots = self.root_dock_slots();
        let target = slot_at(&slots, cx, cy);
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        match target {
            Some(slot) => {
                window.state = WindowState::Docked(Dock {
                    pos: slot.pos,
                    parent: DockParent::Root,
                });
                tracing::debug!(window_id = %id, pos = ?slot.pos, "docked window");
            }
            None => {
                window.state = WindowState::Free;
                tracing::debug!(window_id = %id, rect = ?window.rect, "dropped window");
            }
        }
    }

    /// Append chrome for every window back to front, then the dock
    /// targets on top.
    pub fn paint(&self, out: &mut DrawList) {
        let front = self.front();
        for &id in self.window_order.iter().rev() {
            let Some(window) = self.windows.get(&id) else {
                continue;
            };
            let chrome = WindowChrome {
                outer: self.effective_rect(id),
                top_bar: self.top_bar_rect(id),
                content: self.content_rect(id),
                border_thickness: self.config.border_thickness,
                body: window.color,
                focused: front == Some(id),
            };
            self.decorator.decorate(&chrome, out);
        }
        for slot in self.root_dock_slots() {
            out.fill_rect(slot.rect, theme::DOCK_SLOT);
        }
    }

    /// Verify that the order is a permutation of the registered windows and
    /// that every dock chain terminates.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut seen = BTreeSet::new();
        for &id in &self.window_order {
            if !self.windows.contains_key(&id) {
                return Err(InvariantError::UnknownInOrder(id));
            }
            if !seen.insert(id) {
                return Err(InvariantError::DuplicateInOrder(id));
            }
        }
        for &id in self.windows.keys() {
            if !seen.contains(&id) {
                return Err(InvariantError::MissingFromOrder(id));
            }
            self.try_effective_rect(id)?;
        }
        Ok(())
    }
}

/// Cursor offset to keep when a docked window turns free under the cursor.
///
/// The horizontal offset is scaled from the docked width to the free width
/// so the cursor lands at the same fraction along the top bar; the vertical
/// offset is kept as is, clamped to the free height.
fn undock_anchor(docked: Rect, free: Rect, cx: i32, cy: i32) -> (i32, i32) {
    let rel_x = cx - docked.x;
    let rel_y = cy - docked.y;
    let ox = if docked.width > 0 {
        (rel_x as i64 * free.width as i64 / docked.width as i64) as i32
    } else {
        0
    };
    let oy = rel_y.min(free.height - 1).max(0);
    (ox, oy)
}
