//! Time-to-angle mapping.
//!
//! Angles are radians measured clockwise from 12 o'clock. Slower hands creep
//! with the fractional progress of faster units, so the hour hand moves
//! smoothly instead of jumping once an hour.

use std::f32::consts::PI;

use crate::time::ClockState;

/// One second (or minute) step around the dial.
pub const SIXTIETH: f32 = PI / 30.0;
/// One hour step around the dial.
pub const TWELFTH: f32 = PI / 6.0;

#[inline]
pub fn second_angle(second: u32) -> f32 {
    second as f32 * SIXTIETH
}

#[inline]
pub fn minute_angle(minute: u32) -> f32 {
    minute as f32 * SIXTIETH
}

#[inline]
pub fn hour_angle(hour: u32) -> f32 {
    hour as f32 * TWELFTH
}

/// Minute hand including the seconds creep.
#[inline]
pub fn minute_hand_angle(minute: u32, second: u32) -> f32 {
    minute_angle(minute) + second_angle(second) / 60.0
}

/// Hour hand including the minute and seconds creep.
#[inline]
pub fn hour_hand_angle(hour: u32, minute: u32, second: u32) -> f32 {
    hour_angle(hour) + minute_angle(minute) / 12.0 + second_angle(second) / 720.0
}

/// Final angles of all three hands for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub second: f32,
    pub minute: f32,
    pub hour: f32,
}

impl HandAngles {
    pub fn from_state(state: ClockState) -> Self {
        Self {
            second: second_angle(state.second),
            minute: minute_hand_angle(state.minute, state.second),
            hour: hour_hand_angle(state.hour, state.minute, state.second),
        }
    }
}
