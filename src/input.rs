//! Per-frame input latch.
//!
//! Raw button notifications are folded into a half-transition count per
//! tracked key so that a press and release landing inside the same frame
//! still registers as an edge.

/// Logical buttons tracked by the latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyId {
    Primary,
    Secondary,
    Middle,
}

impl KeyId {
    pub const COUNT: usize = 3;
    pub const ALL: [KeyId; Self::COUNT] = [KeyId::Primary, KeyId::Secondary, KeyId::Middle];

    fn index(self) -> usize {
        match self {
            KeyId::Primary => 0,
            KeyId::Secondary => 1,
            KeyId::Middle => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputKey {
    half_transition_count: u32,
    ended_down: bool,
}

impl InputKey {
    pub fn half_transition_count(&self) -> u32 {
        self.half_transition_count
    }

    pub fn ended_down(&self) -> bool {
        self.ended_down
    }

    /// Down at frame end after any transition, or more than one transition.
    ///
    /// A count above one is treated as a press regardless of the final
    /// state, so a down-up-down-up burst reports both a press and a release.
    pub fn was_pressed(&self) -> bool {
        self.half_transition_count > 1 || (self.half_transition_count == 1 && self.ended_down)
    }

    pub fn was_unpressed(&self) -> bool {
        self.half_transition_count > 1 || (self.half_transition_count == 1 && !self.ended_down)
    }

    fn record(&mut self, is_down: bool) {
        self.half_transition_count = self.half_transition_count.saturating_add(1);
        self.ended_down = is_down;
    }

    fn clear_transitions(&mut self) {
        self.half_transition_count = 0;
    }
}

/// Button state plus last known cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSnapshot {
    keys: [InputKey; KeyId::COUNT],
    cursor_x: i32,
    cursor_y: i32,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSnapshot {
    /// The cursor starts off-screen so nothing is hit before the first
    /// motion event.
    pub fn new() -> Self {
        Self {
            keys: [InputKey::default(); KeyId::COUNT],
            cursor_x: -1,
            cursor_y: -1,
        }
    }

    /// Zero every transition count; `ended_down` carries over.
    pub fn reset_frame(&mut self) {
        for key in &mut self.keys {
            key.clear_transitions();
        }
    }

    pub fn record_button_event(&mut self, key: KeyId, is_down: bool) {
        self.keys[key.index()].record(is_down);
    }

    /// Last write wins.
    pub fn record_motion(&mut self, x: i32, y: i32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn key(&self, key: KeyId) -> &InputKey {
        &self.keys[key.index()]
    }

    pub fn was_pressed(&self, key: KeyId) -> bool {
        self.key(key).was_pressed()
    }

    pub fn was_unpressed(&self, key: KeyId) -> bool {
        self.key(key).was_unpressed()
    }

    /// Swallow this frame's transitions for `key` so later consumers in the
    /// same frame see neither edge.
    pub fn consume(&mut self, key: KeyId) {
        self.keys[key.index()].clear_transitions();
    }

    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor_x, self.cursor_y)
    }
}
