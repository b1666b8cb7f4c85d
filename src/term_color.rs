use ratatui::style::Color as TermColor;

use crate::geometry::Color;

/// How many colors the terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    TrueColor,
    /// xterm 256-color palette.
    Indexed,
}

impl ColorMode {
    /// Truecolor when `COLORTERM` advertises `truecolor` or `24bit`.
    pub fn detect() -> Self {
        Self::from_colorterm(std::env::var("COLORTERM").ok().as_deref())
    }

    pub fn from_colorterm(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase) {
            Some(v) if v.contains("truecolor") || v.contains("24bit") => ColorMode::TrueColor,
            _ => ColorMode::Indexed,
        }
    }
}

/// Terminal color for an opaque RGBA value. Alpha is ignored; blend first.
pub fn to_terminal(color: Color, mode: ColorMode) -> TermColor {
    match mode {
        ColorMode::TrueColor => TermColor::Rgb(color.r, color.g, color.b),
        ColorMode::Indexed => TermColor::Indexed(xterm_index(color.r, color.g, color.b)),
    }
}

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn nearest_cube_level(v: u8) -> usize {
    CUBE_LEVELS
        .iter()
        .enumerate()
        .min_by_key(|(_, level)| (**level as i32 - v as i32).abs())
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

fn gray_level(step: u8) -> u8 {
    8 + step * 10
}

fn distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| {
        let v = x as i32 - y as i32;
        (v * v) as u32
    };
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

/// Closest entry among the 6x6x6 cube (16..=231) and the gray ramp
/// (232..=255).
fn xterm_index(r: u8, g: u8, b: u8) -> u8 {
    let (ri, gi, bi) = (
        nearest_cube_level(r),
        nearest_cube_level(g),
        nearest_cube_level(b),
    );
    let cube_rgb = (CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);
    let cube_index = 16 + 36 * ri + 6 * gi + bi;

    let avg = (r as u16 + g as u16 + b as u16) / 3;
    let step = (avg.saturating_sub(3) / 10).min(23) as u8;
    let gray = gray_level(step);

    let target = (r, g, b);
    if distance_sq(target, (gray, gray, gray)) < distance_sq(target, cube_rgb) {
        232 + step
    } else {
        cube_index as u8
    }
}
