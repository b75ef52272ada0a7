//! Dial layout.
//!
//! Two angle conventions coexist here:
//! - hands use the clock convention: 0 rad points at 12 o'clock, clockwise,
//!   `x = cx + len * sin(a)`, `y = cy - len * cos(a)`
//! - tick marks use the math convention: 0 rad points along +x,
//!   `x = cx + r * cos(a)`, `y = cy + r * sin(a)`
//!
//! With twelve evenly spaced ticks both conventions hit the same set of dial
//! positions, so the dial looks the same either way.

use dialwork_engine::coords::{Vec2, Viewport};

use crate::angles::TWELFTH;

/// Share of the shorter surface side used as the dial radius.
pub const RADIUS_FRACTION: f32 = 0.45;
pub const DEFAULT_SECOND_FRACTION: f32 = 0.85;
pub const DEFAULT_MINUTE_FRACTION: f32 = 0.7;
pub const DEFAULT_HOUR_FRACTION: f32 = 0.55;
pub const DEFAULT_TICK_MARK_LENGTH: f32 = 30.0;
pub const DEFAULT_CENTER_DOT_RADIUS: f32 = 8.0;

/// Which hand a value belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandKind {
    Second,
    Minute,
    Hour,
}

impl HandKind {
    /// Drawing order: the hour hand ends up on top.
    pub const ALL: [HandKind; 3] = [HandKind::Second, HandKind::Minute, HandKind::Hour];

    /// Fraction of the radius used when no length is configured.
    pub const fn default_fraction(self) -> f32 {
        match self {
            HandKind::Second => DEFAULT_SECOND_FRACTION,
            HandKind::Minute => DEFAULT_MINUTE_FRACTION,
            HandKind::Hour => DEFAULT_HOUR_FRACTION,
        }
    }
}

/// Configured hand length.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum HandLength {
    /// Use the hand's default fraction of the radius.
    #[default]
    Unset,
    /// Fraction of the dial radius.
    Fraction(f32),
    /// Length in logical pixels, independent of the radius.
    Absolute(f32),
}

impl HandLength {
    pub fn resolve(self, kind: HandKind, radius: f32) -> f32 {
        match self {
            HandLength::Unset => radius * kind.default_fraction(),
            HandLength::Fraction(f) => radius * f,
            HandLength::Absolute(px) => px,
        }
    }
}

/// Configured lengths of all three hands.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HandLengths {
    pub second: HandLength,
    pub minute: HandLength,
    pub hour: HandLength,
}

impl HandLengths {
    #[inline]
    pub fn get(&self, kind: HandKind) -> HandLength {
        match kind {
            HandKind::Second => self.second,
            HandKind::Minute => self.minute,
            HandKind::Hour => self.hour,
        }
    }

    #[inline]
    pub fn set(&mut self, kind: HandKind, length: HandLength) {
        match kind {
            HandKind::Second => self.second = length,
            HandKind::Minute => self.minute = length,
            HandKind::Hour => self.hour = length,
        }
    }
}

/// Straight segment in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Point at `length` from `center` along a clock-convention angle.
#[inline]
pub fn hand_endpoint(center: Vec2, length: f32, angle: f32) -> Vec2 {
    Vec2::new(center.x + length * angle.sin(), center.y - length * angle.cos())
}

/// Point at `radius` from `center` along a math-convention angle.
#[inline]
pub fn dial_point(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    Vec2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Everything that depends on surface size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LayoutGeometry {
    pub center: Vec2,
    pub radius: f32,
    pub second_hand_length: f32,
    pub minute_hand_length: f32,
    pub hour_hand_length: f32,
    pub tick_mark_length: f32,
    pub center_dot_radius: f32,
}

impl LayoutGeometry {
    /// Lays the dial out in `viewport`.
    ///
    /// Returns `None` for a zero-area or non-finite viewport so callers can
    /// keep their previous geometry.
    pub fn compute(
        viewport: Viewport,
        lengths: &HandLengths,
        tick_mark_length: f32,
        center_dot_radius: f32,
    ) -> Option<Self> {
        if !viewport.is_valid() {
            return None;
        }

        let radius = viewport.min_side() * RADIUS_FRACTION;
        Some(Self {
            center: Vec2::new(viewport.width / 2.0, viewport.height / 2.0),
            radius,
            second_hand_length: lengths.second.resolve(HandKind::Second, radius),
            minute_hand_length: lengths.minute.resolve(HandKind::Minute, radius),
            hour_hand_length: lengths.hour.resolve(HandKind::Hour, radius),
            tick_mark_length,
            center_dot_radius,
        })
    }

    #[inline]
    pub fn hand_length(&self, kind: HandKind) -> f32 {
        match kind {
            HandKind::Second => self.second_hand_length,
            HandKind::Minute => self.minute_hand_length,
            HandKind::Hour => self.hour_hand_length,
        }
    }

    /// Hand segment from the center at a clock-convention angle.
    pub fn hand(&self, kind: HandKind, angle: f32) -> Segment {
        Segment::new(self.center, hand_endpoint(self.center, self.hand_length(kind), angle))
    }

    /// The twelve tick marks, `k = 1..=12`, each running from the dial
    /// inward by `tick_mark_length`.
    pub fn tick_marks(&self) -> [Segment; 12] {
        std::array::from_fn(|i| {
            let angle = (i + 1) as f32 * TWELFTH;
            Segment::new(
                dial_point(self.center, self.radius, angle),
                dial_point(self.center, self.radius - self.tick_mark_length, angle),
            )
        })
    }
}
