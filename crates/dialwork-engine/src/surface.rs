//! Immediate-mode drawing contract handed to widgets.
//!
//! Any 2D canvas-like backend can implement [`Surface`]. The engine ships one
//! implementation: [`DrawList`] records the calls so they can be inspected or
//! rasterized later.

use crate::coords::Vec2;
use crate::scene::{CircleStyle, DrawList, Stroke, ZIndex};

/// Minimal 2D drawing surface.
pub trait Surface {
    /// Draws a filled or outlined circle.
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: CircleStyle);

    /// Draws a stroked line segment from `from` to `to`.
    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
}

/// Records every call on the base layer, so paint order equals call order.
impl Surface for DrawList {
    #[inline]
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: CircleStyle) {
        self.push_circle(ZIndex::BASE, center, radius, style);
    }

    #[inline]
    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push_line(ZIndex::BASE, from, to, stroke);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: CircleStyle) {
        (**self).draw_circle(center, radius, style);
    }

    #[inline]
    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        (**self).draw_line(from, to, stroke);
    }
}
