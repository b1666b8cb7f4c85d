use crate::geometry::Color;

// Centralized palette. The presenter maps these to whatever the terminal
// supports via `crate::term_color`.

pub const BACKGROUND: Color = Color::rgb(20, 20, 20);
pub const BORDER: Color = Color::rgb(90, 90, 90);
pub const TOP_BAR: Color = Color::rgb(60, 60, 70);
pub const TOP_BAR_FOCUSED: Color = Color::rgb(40, 80, 160);
pub const DOCK_SLOT: Color = Color::rgba(200, 100, 0, 140);

// Demo window bodies
pub const RED: Color = Color::rgb(170, 40, 40);
pub const GREEN: Color = Color::rgb(40, 150, 60);
pub const BLUE: Color = Color::rgb(40, 80, 170);

pub fn top_bar(focused: bool) -> Color {
    if focused { TOP_BAR_FOCUSED } else { TOP_BAR }
}
