//! Rasterization of draw lists into the terminal.
//!
//! A frame is first composited into a [`Canvas`], one RGBA value per
//! terminal cell, so translucent fills can blend with whatever lies
//! beneath them. [`UiFrame`] then copies the canvas into a ratatui buffer
//! as blank cells whose background carries the color.
//!
//! Every fill is clipped to the canvas, so windows dragged partially off
//! screen never write outside the buffer.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as TermRect;

use crate::geometry::{Color, Rect};
use crate::render::{DrawCommand, DrawList};
use crate::term_color::{ColorMode, to_terminal};

/// Opaque RGBA framebuffer addressed in cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    cells: Vec<Color>,
}

impl Canvas {
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let background = background.over(Color::rgb(0, 0, 0));
        Self {
            width,
            height,
            cells: vec![background; (width as usize) * (height as usize)],
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        self.cells.get((y * self.width + x) as usize).copied()
    }

    /// Source-over fill, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let clipped = rect.intersection(self.bounds());
        if clipped.is_empty() || color.a == 0 {
            return;
        }
        for y in clipped.y..clipped.bottom() {
            let row = (y * self.width) as usize;
            for x in clipped.x..clipped.right() {
                let cell = &mut self.cells[row + x as usize];
                *cell = if color.is_opaque() {
                    color
                } else {
                    color.over(*cell)
                };
            }
        }
    }

    pub fn rasterize(&mut self, commands: &DrawList) {
        for command in commands.iter() {
            match *command {
                DrawCommand::FillRect { rect, color } => self.fill_rect(rect, color),
            }
        }
    }
}

/// Wrapper around a ratatui buffer that the canvas is presented into.
pub struct UiFrame<'a> {
    area: TermRect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer, for
    /// offscreen presentation.
    pub fn from_parts(area: TermRect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    /// Copy the overlap of the canvas and this frame into the buffer.
    pub fn blit(&mut self, canvas: &Canvas, mode: ColorMode) {
        let area = Rect::new(
            self.area.x as i32,
            self.area.y as i32,
            self.area.width as i32,
            self.area.height as i32,
        );
        let overlap = area.intersection(canvas.bounds());
        for y in overlap.y..overlap.bottom() {
            for x in overlap.x..overlap.right() {
                let Some(color) = canvas.pixel(x, y) else {
                    continue;
                };
                if let Some(cell) = self.buffer.cell_mut((x as u16, y as u16)) {
                    cell.set_symbol(" ");
                    cell.set_bg(to_terminal(color, mode));
                }
            }
        }
    }

    /// Rasterize `commands` over `background` and blit the result.
    pub fn present(&mut self, commands: &DrawList, background: Color, mode: ColorMode) {
        let mut canvas = Canvas::new(
            self.area.x as i32 + self.area.width as i32,
            self.area.y as i32 + self.area.height as i32,
            background,
        );
        canvas.rasterize(commands);
        self.blit(&canvas, mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color as TermColor;

    const BG: Color = Color::rgb(10, 10, 10);

    #[test]
    fn fill_is_clipped_to_canvas() {
        let mut canvas = Canvas::new(4, 3, BG);
        canvas.fill_rect(Rect::new(-2, -1, 4, 3), Color::rgb(200, 0, 0));
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(200, 0, 0)));
        assert_eq!(canvas.pixel(1, 1), Some(Color::rgb(200, 0, 0)));
        assert_eq!(canvas.pixel(2, 0), Some(BG));
        assert_eq!(canvas.pixel(0, 2), Some(BG));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn later_commands_paint_over_earlier() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0, 0, 3, 3), Color::rgb(255, 0, 0));
        list.fill_rect(Rect::new(1, 1, 3, 3), Color::rgb(0, 255, 0));
        let mut canvas = Canvas::new(4, 4, BG);
        canvas.rasterize(&list);
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(canvas.pixel(1, 1), Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn translucent_fill_blends() {
        let mut canvas = Canvas::new(1, 1, Color::rgb(0, 0, 0));
        canvas.fill_rect(Rect::new(0, 0, 1, 1), Color::rgba(255, 255, 255, 128));
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(128, 128, 128)));
    }

    #[test]
    fn present_writes_cell_backgrounds() {
        let area = TermRect::new(0, 0, 5, 2);
        let mut buffer = Buffer::empty(area);
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(3, 0, 10, 10), Color::rgb(1, 2, 3));
        {
            let mut frame = UiFrame::from_parts(area, &mut buffer);
            frame.present(&list, BG, ColorMode::TrueColor);
        }
        assert_eq!(buffer[(0, 0)].bg, TermColor::Rgb(10, 10, 10));
        assert_eq!(buffer[(3, 1)].bg, TermColor::Rgb(1, 2, 3));
        assert_eq!(buffer[(4, 0)].symbol(), " ");
    }
}
