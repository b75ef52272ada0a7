use dialwork_engine::paint::Color;
use dialwork_engine::scene::{CircleStyle, Stroke};

use crate::geometry::HandKind;

/// Stroke widths and colors of the dial and hands.
///
/// Immutable once handed to a renderer. The dial, tick and center colors
/// default to black.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleConfig {
    pub dial_stroke_width: f32,
    pub tick_stroke_width: f32,
    pub hand_stroke_width: f32,
    pub second_color: Color,
    pub minute_color: Color,
    pub hour_color: Color,
    pub dial_color: Color,
    pub tick_color: Color,
    pub center_color: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            dial_stroke_width: 6.0,
            tick_stroke_width: 13.0,
            hand_stroke_width: 12.0,
            second_color: Color::RED,
            minute_color: Color::BLUE,
            hour_color: Color::GREEN,
            dial_color: Color::BLACK,
            tick_color: Color::BLACK,
            center_color: Color::BLACK,
        }
    }
}

impl StyleConfig {
    #[inline]
    pub fn hand_color(&self, kind: HandKind) -> Color {
        match kind {
            HandKind::Second => self.second_color,
            HandKind::Minute => self.minute_color,
            HandKind::Hour => self.hour_color,
        }
    }

    #[inline]
    pub fn set_hand_color(&mut self, kind: HandKind, color: Color) {
        match kind {
            HandKind::Second => self.second_color = color,
            HandKind::Minute => self.minute_color = color,
            HandKind::Hour => self.hour_color = color,
        }
    }

    pub fn hand_stroke(&self, kind: HandKind) -> Stroke {
        Stroke::new(self.hand_stroke_width, self.hand_color(kind))
    }

    pub fn tick_stroke(&self) -> Stroke {
        Stroke::new(self.tick_stroke_width, self.tick_color)
    }

    pub fn dial_style(&self) -> CircleStyle {
        CircleStyle::Stroke(Stroke::new(self.dial_stroke_width, self.dial_color))
    }

    pub fn center_style(&self) -> CircleStyle {
        CircleStyle::Fill(self.center_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hand_colors() {
        let style = StyleConfig::default();
        assert_eq!(style.hand_color(HandKind::Second), Color::RED);
        assert_eq!(style.hand_color(HandKind::Minute), Color::BLUE);
        assert_eq!(style.hand_color(HandKind::Hour), Color::GREEN);
    }

    #[test]
    fn hand_strokes_share_width() {
        let style = StyleConfig::default();
        for kind in HandKind::ALL {
            assert_eq!(style.hand_stroke(kind).width, 12.0);
        }
        assert_eq!(style.tick_stroke().width, 13.0);
        assert_eq!(style.dial_style(), CircleStyle::Stroke(Stroke::new(6.0, Color::BLACK)));
    }
}
