use crate::coords::Rect;
use crate::scene::{LineCap, LineCmd};

use super::{coverage, for_each_pixel};
use crate::render::RasterTarget;

/// Rasterizes a stroked segment with butt or round caps.
///
/// A zero-length segment draws nothing with butt caps and a dot with round caps.
pub fn rasterize(target: &mut RasterTarget, cmd: &LineCmd) -> bool {
    let stroke = cmd.stroke;
    if !cmd.from.is_finite() || !cmd.to.is_finite() || stroke.width <= 0.0 || !stroke.width.is_finite() {
        return false;
    }
    if !stroke.color.is_finite() {
        return false;
    }

    let half = stroke.width * 0.5;
    let len = cmd.length();
    if len <= f32::EPSILON && stroke.cap == LineCap::Butt {
        return false;
    }

    let axis = if len > f32::EPSILON { (cmd.to - cmd.from) * (1.0 / len) } else { Default::default() };
    let bounds = Rect::spanning(cmd.from, cmd.to, half + 1.0);

    let mut hits = Vec::new();
    let touched = for_each_pixel(target, bounds, |x, y, p| {
        let rel = p - cmd.from;
        let along = rel.dot(axis);
        let d = match stroke.cap {
            LineCap::Butt => {
                let across = (rel.x * axis.y - rel.y * axis.x).abs();
                (across - half).max((-along).max(along - len))
            }
            LineCap::Round => {
                let nearest = cmd.from + axis * along.clamp(0.0, len);
                p.distance(nearest) - half
            }
        };
        let c = coverage(d);
        if c > 0.0 {
            hits.push((x, y, c));
        }
    });

    for (x, y, c) in hits {
        target.blend(x, y, stroke.color, c);
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
        let mut t = RasterTarget::new(20, 20);
        t.clear(Color::WHITE);
        t
    }

    #[test]
    fn butt_cap_stops_at_endpoint() {
        let mut t = fresh();
        let cmd = LineCmd::new(Vec2::new(2.0, 10.0), Vec2::new(12.0, 10.0), Stroke::new(4.0, Color::BLACK));
        assert!(rasterize(&mut t, &cmd));
        assert_eq!(t.pixel(6, 9), [0, 0, 0, 255]);
        assert_eq!(t.pixel(14, 9), [255, 255, 255, 255]);
    }

    #[test]
    fn round_cap_extends_past_endpoint() {
        let mut t = fresh();
        let stroke = Stroke::new(4.0, Color::BLACK).with_cap(LineCap::Round);
        let cmd = LineCmd::new(Vec2::new(2.0, 10.0), Vec2::new(12.0, 10.0), stroke);
        assert!(rasterize(&mut t, &cmd));
        // Pixel 12 has its center at 12.5, inside the 2 px cap.
        assert_eq!(t.pixel(12, 9), [0, 0, 0, 255]);
    }

    #[test]
    fn diagonal_line_covers_its_midpoint() {
        let mut t = fresh();
        let cmd = LineCmd::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0), Stroke::new(3.0, Color::RED));
        assert!(rasterize(&mut t, &cmd));
        assert_eq!(t.pixel(10, 10), [255, 0, 0, 255]);
        assert_eq!(t.pixel(15, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn zero_length_butt_line_is_skipped() {
        let mut t = fresh();
        let p = Vec2::new(5.0, 5.0);
        assert!(!rasterize(&mut t, &LineCmd::new(p, p, Stroke::new(2.0, Color::BLACK))));
    }
}
