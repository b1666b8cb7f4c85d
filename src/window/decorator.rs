use crate::geometry::{Color, Rect, outline_rects};
use crate::render::DrawList;
use crate::theme;

/// Resolved geometry of one window for a single paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowChrome {
    pub outer: Rect,
    pub top_bar: Rect,
    pub content: Rect,
    pub border_thickness: i32,
    pub body: Color,
    pub focused: bool,
}

pub trait WindowDecorator: std::fmt::Debug {
    fn decorate(&self, chrome: &WindowChrome, out: &mut DrawList);
}

/// Flat border, flat top bar, body filled with the window's own color.
#[derive(Debug, Clone, Copy)]
pub struct SolidDecorator {
    pub border: Color,
    pub top_bar: Color,
    pub top_bar_focused: Color,
}

impl Default for SolidDecorator {
    fn default() -> Self {
        Self {
            border: theme::BORDER,
            top_bar: theme::top_bar(false),
            top_bar_focused: theme::top_bar(true),
        }
    }
}

impl WindowDecorator for SolidDecorator {
    fn decorate(&self, chrome: &WindowChrome, out: &mut DrawList) {
        for edge in outline_rects(chrome.outer, chrome.border_thickness) {
            out.fill_rect(edge, self.border);
        }
        let bar = if chrome.focused {
            self.top_bar_focused
        } else {
            self.top_bar
        };
        out.fill_rect(chrome.top_bar, bar);
        out.fill_rect(chrome.content, chrome.body);
    }
}
