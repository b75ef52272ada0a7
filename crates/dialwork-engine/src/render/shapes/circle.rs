use crate::coords::Rect;
use crate::scene::{CircleCmd, CircleStyle};

use super::{coverage, for_each_pixel};
use crate::render::RasterTarget;

/// Rasterizes a filled disc or a stroke ring centered on the radius.
pub fn rasterize(target: &mut RasterTarget, cmd: &CircleCmd) -> bool {
    if cmd.radius <= 0.0 || !cmd.radius.is_finite() || !cmd.center.is_finite() {
        return false;
    }

    let (color, half_width) = match cmd.style {
        CircleStyle::Fill(color) => (color, None),
        CircleStyle::Stroke(stroke) => {
            if stroke.width <= 0.0 || !stroke.width.is_finite() {
                return false;
            }
            (stroke.color, Some(stroke.width * 0.5))
        }
    };

    if !color.is_finite() {
        return false;
    }

    let reach = cmd.radius + half_width.unwrap_or(0.0) + 1.0;
    let bounds = Rect::new(
        cmd.center.x - reach,
        cmd.center.y - reach,
        reach * 2.0,
        reach * 2.0,
    );

    let mut hits = Vec::new();
    let touched = for_each_pixel(target, bounds, |x, y, p| {
        let dist = p.distance(cmd.center);
        let d = match half_width {
            None => dist - cmd.radius,
            Some(hw) => (dist - cmd.radius).abs() - hw,
        };
        let c = coverage(d);
        if c > 0.0 {
            hits.push((x, y, c));
        }
    });

    for (x, y, c) in hits {
        target.blend(x, y, color, c);
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Stroke;

    fn fresh() -> RasterTarget {
        let mut t = RasterTarget::new(40, 40);
        t.clear(Color::WHITE);
        t
    }

    #[test]
    fn filled_disc_covers_center_only() {
        let mut t = fresh();
        let cmd = CircleCmd::new(Vec2::new(20.0, 20.0), 5.0, CircleStyle::Fill(Color::BLACK));
        assert!(rasterize(&mut t, &cmd));
        assert_eq!(t.pixel(20, 20), [0, 0, 0, 255]);
        assert_eq!(t.pixel(30, 20), [255, 255, 255, 255]);
    }

    #[test]
    fn stroke_ring_leaves_center_untouched() {
        let mut t = fresh();
        let style = CircleStyle::Stroke(Stroke::new(2.0, Color::BLACK));
        let cmd = CircleCmd::new(Vec2::new(20.0, 20.0), 10.0, style);
        assert!(rasterize(&mut t, &cmd));
        assert_eq!(t.pixel(20, 20), [255, 255, 255, 255]);
        // Pixel (29, 19) has its center at (29.5, 19.5): ~9.5 px from center.
        assert_eq!(t.pixel(29, 19), [0, 0, 0, 255]);
    }

    #[test]
    fn zero_radius_is_skipped() {
        let mut t = fresh();
        let cmd = CircleCmd::new(Vec2::new(20.0, 20.0), 0.0, CircleStyle::Fill(Color::BLACK));
        assert!(!rasterize(&mut t, &cmd));
    }
}
