//! Rectangle and color primitives shared by layout, interaction and paint.
//!
//! Rectangles carry a signed origin so windows can be dragged partially off
//! the viewport; sizes never go negative.

/// Axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Build a rectangle, clamping negative sizes to zero.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn with_origin(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        point_in_rect(*self, x, y)
    }

    /// Overlap of two rectangles, or an empty rectangle at `self`'s origin.
    pub fn intersection(&self, other: Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return Rect::new(self.x, self.y, 0, 0);
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Composite `self` over an opaque `dst`. The result is opaque.
    pub fn over(self, dst: Color) -> Color {
        let a = self.a as u32;
        let inv = 255 - a;
        let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
        Color::rgb(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
    }
}

/// Half-open containment: the top-left corner is inside, the right and
/// bottom edges are not.
pub fn point_in_rect(rect: Rect, x: i32, y: i32) -> bool {
    if rect.is_empty() {
        return false;
    }
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// Rectangle of the given size whose midpoint is `(cx, cy)`.
pub fn centered_rect(cx: i32, cy: i32, width: i32, height: i32) -> Rect {
    Rect::new(cx - width / 2, cy - height / 2, width, height)
}

/// Move every edge inward by `by`. Collapses to zero size instead of
/// inverting.
pub fn shrink(rect: Rect, by: i32) -> Rect {
    Rect::new(
        rect.x.saturating_add(by),
        rect.y.saturating_add(by),
        rect.width.saturating_sub(by.saturating_mul(2)),
        rect.height.saturating_sub(by.saturating_mul(2)),
    )
}

/// Decompose the frame of `rect` into top, bottom, left and right bars of
/// the given thickness. The side bars span only the rows between the top
/// and bottom bars so no cell is covered twice. When the frame is thicker
/// than half the rect, the bottom and right bars get what is left.
pub fn outline_rects(rect: Rect, thickness: i32) -> [Rect; 4] {
    let t = thickness.max(0);
    let top = t.min(rect.height);
    let bottom = t.min(rect.height - top);
    let left = t.min(rect.width);
    let right = t.min(rect.width - left);
    let y = rect.y.saturating_add(top);
    let inner_height = rect.height - top - bottom;
    [
        Rect::new(rect.x, rect.y, rect.width, top),
        Rect::new(rect.x, rect.bottom() - bottom, rect.width, bottom),
        Rect::new(rect.x, y, left, inner_height),
        Rect::new(rect.right() - right, y, right, inner_height),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(point_in_rect(r, 0, 0));
        assert!(point_in_rect(r, 9, 9));
        assert!(!point_in_rect(r, 10, 0));
        assert!(!point_in_rect(r, 0, 10));
        assert!(!point_in_rect(r, -1, 5));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!point_in_rect(Rect::new(3, 3, 0, 4), 3, 3));
        assert!(!point_in_rect(Rect::new(3, 3, 4, 0), 3, 3));
    }

    #[test]
    fn new_clamps_negative_sizes() {
        let r = Rect::new(1, 2, -5, -1);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
    }

    #[test]
    fn centered_rect_straddles_midpoint() {
        let r = centered_rect(500, 400, 100, 100);
        assert_eq!(r, Rect::new(450, 350, 100, 100));
    }

    #[test]
    fn shrink_moves_edges_inward_and_collapses() {
        assert_eq!(shrink(Rect::new(10, 10, 50, 30), 2), Rect::new(12, 12, 46, 26));
        let collapsed = shrink(Rect::new(0, 0, 3, 3), 2);
        assert_eq!(collapsed.width, 0);
        assert_eq!(collapsed.height, 0);
    }

    #[test]
    fn outline_covers_frame_without_overlap() {
        let r = Rect::new(0, 0, 6, 4);
        let [top, bottom, left, right] = outline_rects(r, 1);
        assert_eq!(top, Rect::new(0, 0, 6, 1));
        assert_eq!(bottom, Rect::new(0, 3, 6, 1));
        assert_eq!(left, Rect::new(0, 1, 1, 2));
        assert_eq!(right, Rect::new(5, 1, 1, 2));

        let area: i32 = [top, bottom, left, right]
            .iter()
            .map(|r| r.width * r.height)
            .sum();
        // 6*4 frame minus the 4*2 interior
        assert_eq!(area, 16);
    }

    #[test]
    fn outline_thickness_clamped_to_rect() {
        let [top, bottom, left, right] = outline_rects(Rect::new(0, 0, 2, 8), 5);
        assert_eq!(top, Rect::new(0, 0, 2, 5));
        assert_eq!(bottom, Rect::new(0, 5, 2, 3));
        assert!(left.is_empty());
        assert!(right.is_empty());
    }

    #[test]
    fn thick_outline_never_covers_a_cell_twice() {
        for (w, h, t) in [(2, 8, 5), (3, 3, 2), (5, 2, 1), (7, 9, 4), (1, 1, 3)] {
            let r = Rect::new(4, -2, w, h);
            let bars = outline_rects(r, t);
            for y in r.y..r.bottom() {
                for x in r.x..r.right() {
                    let hits = bars.iter().filter(|b| b.contains(x, y)).count();
                    assert!(hits <= 1, "cell ({x},{y}) covered {hits} times for {w}x{h} t={t}");
                }
            }
        }
    }

    #[test]
    fn shrink_saturates_at_extreme_origins() {
        let r = shrink(Rect::new(i32::MAX - 1, i32::MAX - 1, 10, 10), 3);
        assert_eq!(r.x, i32::MAX);
        assert_eq!(r.y, i32::MAX);
        assert_eq!(r.width, 4);
    }

    #[test]
    fn intersection_clips_and_handles_disjoint() {
        let a = Rect::new(-5, 3, 20, 6);
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(a.intersection(bounds), Rect::new(0, 3, 15, 6));
        assert!(Rect::new(100, 100, 1, 1).intersection(bounds).is_empty());
    }

    #[test]
    fn alpha_over_blends_toward_source() {
        let dst = Color::rgb(0, 0, 0);
        assert_eq!(Color::rgb(200, 100, 0).over(dst), Color::rgb(200, 100, 0));
        assert_eq!(Color::rgba(255, 255, 255, 0).over(dst), dst);
        let half = Color::rgba(255, 0, 0, 128).over(dst);
        assert_eq!(half.r, 128);
        assert!(half.is_opaque());
    }
}
