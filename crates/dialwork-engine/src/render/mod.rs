//! CPU rendering subsystem.
//!
//! The [`Rasterizer`] consumes a `scene` draw stream and writes anti-aliased
//! coverage into a [`RasterTarget`] backed by an `image::RgbaImage`.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down), one logical px per image px
//! - coverage is evaluated at pixel centers from a signed distance, with a one pixel ramp

mod error;
mod target;
pub mod shapes;

pub use error::RenderError;
pub use target::RasterTarget;

use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Draws a `DrawList` into a raster target in paint order.
#[derive(Debug, Default)]
pub struct Rasterizer {
    skipped: u64,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands dropped so far: degenerate or non-finite geometry or color, or
    /// shapes lying entirely off the target.
    #[inline]
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Clears `target` to `clear`, then draws every item back-to-front.
    pub fn render(&mut self, target: &mut RasterTarget, draw_list: &mut DrawList, clear: Color) {
        target.clear(clear);

        for item in draw_list.iter_in_paint_order() {
            let drawn = match &item.cmd {
                DrawCmd::Circle(cmd) => shapes::circle::rasterize(target, cmd),
                DrawCmd::Line(cmd) => shapes::line::rasterize(target, cmd),
            };
            if !drawn {
                self.skipped += 1;
                log::trace!("rasterizer skipped degenerate command {:?}", item.key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::{Stroke, ZIndex};

    #[test]
    fn later_items_paint_over_earlier_ones() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::BASE, Vec2::new(10.0, 10.0), 6.0, Color::RED);
        list.push_line(
            ZIndex::BASE,
            Vec2::new(0.0, 10.5),
            Vec2::new(20.0, 10.5),
            Stroke::new(3.0, Color::BLUE),
        );

        let mut target = RasterTarget::new(20, 20);
        let mut rasterizer = Rasterizer::new();
        rasterizer.render(&mut target, &mut list, Color::WHITE);

        assert_eq!(target.pixel(10, 10), [0, 0, 255, 255]);
        assert_eq!(target.pixel(10, 6), [255, 0, 0, 255]);
        assert_eq!(target.pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(rasterizer.skipped(), 0);
    }

    #[test]
    fn degenerate_commands_are_counted() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::BASE, Vec2::new(5.0, 5.0), 0.0, Color::RED);
        list.push_line(ZIndex::BASE, Vec2::new(f32::NAN, 0.0), Vec2::zero(), Stroke::new(1.0, Color::RED));
        let nan_red = Color::from_premul(f32::NAN, 0.0, 0.0, 1.0);
        list.push_line(ZIndex::BASE, Vec2::zero(), Vec2::new(9.0, 9.0), Stroke::new(1.0, nan_red));
        list.push_solid_circle(ZIndex::BASE, Vec2::new(-50.0, -50.0), 4.0, Color::RED);

        let mut target = RasterTarget::new(10, 10);
        let mut rasterizer = Rasterizer::new();
        rasterizer.render(&mut target, &mut list, Color::BLACK);
        assert_eq!(rasterizer.skipped(), 4);
        assert_eq!(target.pixel(4, 4), [0, 0, 0, 255]);
    }
}
