use dialwork_engine::coords::Vec2;
use dialwork_engine::scene::{CircleStyle, Stroke};
use dialwork_engine::Surface;

use crate::angles::HandAngles;
use crate::geometry::{HandKind, LayoutGeometry, Segment};
use crate::style::StyleConfig;
use crate::time::ClockState;

/// One hand, resolved for a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSegment {
    pub kind: HandKind,
    pub angle: f32,
    pub segment: Segment,
    pub stroke: Stroke,
}

/// Fully resolved drawing data for one clock frame.
///
/// Built from the current layout, style and time; painting it issues
/// `2 + 12 + 3` surface calls: dial, center dot, ticks, then the second,
/// minute and hour hands.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFrame {
    pub state: ClockState,
    pub angles: HandAngles,
    pub center: Vec2,
    pub radius: f32,
    pub center_dot_radius: f32,
    pub dial_style: CircleStyle,
    pub center_style: CircleStyle,
    pub ticks: [Segment; 12],
    pub tick_stroke: Stroke,
    pub hands: [HandSegment; 3],
}

impl ClockFrame {
    pub fn build(geometry: &LayoutGeometry, style: &StyleConfig, state: ClockState) -> Self {
        let angles = HandAngles::from_state(state);
        let hand = |kind: HandKind, angle: f32| HandSegment {
            kind,
            angle,
            segment: geometry.hand(kind, angle),
            stroke: style.hand_stroke(kind),
        };

        Self {
            state,
            angles,
            center: geometry.center,
            radius: geometry.radius,
            center_dot_radius: geometry.center_dot_radius,
            dial_style: style.dial_style(),
            center_style: style.center_style(),
            ticks: geometry.tick_marks(),
            tick_stroke: style.tick_stroke(),
            hands: [
                hand(HandKind::Second, angles.second),
                hand(HandKind::Minute, angles.minute),
                hand(HandKind::Hour, angles.hour),
            ],
        }
    }

    pub fn hand(&self, kind: HandKind) -> &HandSegment {
        match kind {
            HandKind::Second => &self.hands[0],
            HandKind::Minute => &self.hands[1],
            HandKind::Hour => &self.hands[2],
        }
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.draw_circle(self.center, self.radius, self.dial_style);
        surface.draw_circle(self.center, self.center_dot_radius, self.center_style);

        for tick in &self.ticks {
            surface.draw_line(tick.from, tick.to, self.tick_stroke);
        }

        for hand in &self.hands {
            surface.draw_line(hand.segment.from, hand.segment.to, hand.stroke);
        }
    }
}
