use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// The rasterizer uses it for shape bounds and clips those bounds against the
/// target image.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Smallest rect containing both points, grown by `pad` on every side.
    pub fn spanning(a: Vec2, b: Vec2, pad: f32) -> Self {
        let min_x = a.x.min(b.x) - pad;
        let min_y = a.y.min(b.y) - pad;
        let max_x = a.x.max(b.x) + pad;
        let max_y = a.y.max(b.y) + pad;
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Overlapping region, or `None` when the rects only touch or are disjoint.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let min_x = self.origin.x.max(other.origin.x);
        let min_y = self.origin.y.max(other.origin.y);
        let max_x = self.max().x.min(other.max().x);
        let max_y = self.max().y.min(other.max().y);

        if max_x <= min_x || max_y <= min_y {
            return None;
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}
