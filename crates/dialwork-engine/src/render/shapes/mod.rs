//! Per-shape coverage rasterizers.
//!
//! Each rasterizer returns `false` when the command was skipped (zero size,
//! non-finite geometry, or entirely off-target).

pub mod circle;
pub mod line;

use crate::coords::{Rect, Vec2};

use super::RasterTarget;

/// Coverage for a pixel whose center lies `d` px outside the shape edge
/// (negative = inside).
#[inline]
pub(super) fn coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

/// Calls `f` with every pixel (and its center) whose center falls in `bounds`
/// clipped to the target. Returns `false` when nothing overlaps.
pub(super) fn for_each_pixel<F>(target: &RasterTarget, bounds: Rect, mut f: F) -> bool
where
    F: FnMut(u32, u32, Vec2),
{
    let Some(clip) = bounds.intersect(target.bounds()) else { return false };

    let x0 = clip.min().x.floor() as u32;
    let y0 = clip.min().y.floor() as u32;
    let x1 = (clip.max().x.ceil() as u32).min(target.width());
    let y1 = (clip.max().y.ceil() as u32).min(target.height());

    for y in y0..y1 {
        for x in x0..x1 {
            f(x, y, Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
        }
    }
    true
}
