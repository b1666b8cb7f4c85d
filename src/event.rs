//! Host-independent input notifications and their translation from
//! terminal events.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

use crate::input::KeyId;

/// Identifier of a native surface that can ask to be closed.
pub type HostWindowId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

impl PointerButton {
    /// Tracked key for this button; unmapped buttons are ignored.
    pub fn key(self) -> Option<KeyId> {
        match self {
            PointerButton::Left => Some(KeyId::Primary),
            PointerButton::Right => Some(KeyId::Secondary),
            PointerButton::Middle => Some(KeyId::Middle),
            PointerButton::Other(_) => None,
        }
    }
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    WindowClose(HostWindowId),
    PointerMove { x: i32, y: i32 },
    PointerButtonDown(PointerButton),
    PointerButtonUp(PointerButton),
}

/// Translate one terminal event, appending zero or more notifications.
///
/// Terminals report the pointer position together with a button change,
/// so presses and releases are preceded by a move to that cell.
pub fn translate(event: &Event, out: &mut Vec<InputEvent>) {
    match event {
        Event::Mouse(mouse) => {
            let moved = InputEvent::PointerMove {
                x: mouse.column as i32,
                y: mouse.row as i32,
            };
            match mouse.kind {
                MouseEventKind::Down(button) => {
                    out.push(moved);
                    out.push(InputEvent::PointerButtonDown(button.into()));
                }
                MouseEventKind::Up(button) => {
                    out.push(moved);
                    out.push(InputEvent::PointerButtonUp(button.into()));
                }
                MouseEventKind::Drag(_) | MouseEventKind::Moved => out.push(moved),
                _ => {}
            }
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let quit = key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'));
            if quit {
                out.push(InputEvent::Quit);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn translated(event: Event) -> Vec<InputEvent> {
        let mut out = Vec::new();
        translate(&event, &mut out);
        out
    }

    #[test]
    fn button_down_carries_position_first() {
        let out = translated(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7));
        assert_eq!(
            out,
            vec![
                InputEvent::PointerMove { x: 4, y: 7 },
                InputEvent::PointerButtonDown(PointerButton::Left),
            ]
        );
    }

    #[test]
    fn drag_and_move_are_plain_motion() {
        let out = translated(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 2));
        assert_eq!(out, vec![InputEvent::PointerMove { x: 1, y: 2 }]);
        let out = translated(mouse(MouseEventKind::Moved, 3, 3));
        assert_eq!(out, vec![InputEvent::PointerMove { x: 3, y: 3 }]);
    }

    #[test]
    fn scroll_is_ignored() {
        assert!(translated(mouse(MouseEventKind::ScrollUp, 0, 0)).is_empty());
    }

    #[test]
    fn ctrl_q_quits_and_plain_q_does_not() {
        let ctrl_q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(translated(ctrl_q), vec![InputEvent::Quit]);
        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(translated(q).is_empty());
    }

    #[test]
    fn unmapped_buttons_have_no_key() {
        assert_eq!(PointerButton::Left.key(), Some(KeyId::Primary));
        assert_eq!(PointerButton::Other(9).key(), None);
    }
}
