//! Time sampling.
//!
//! The renderer asks a [`TimeSource`] for the local wall time once per frame
//! and folds it onto the 12-hour dial as a [`ClockState`].

use std::cell::Cell;

use chrono::{Local, Timelike};

/// Local wall-clock reading, 24-hour.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct WallTime {
    pub hour24: u32,
    pub minute: u32,
    pub second: u32,
}

impl WallTime {
    #[inline]
    pub const fn new(hour24: u32, minute: u32, second: u32) -> Self {
        Self { hour24, minute, second }
    }

    /// Reads hour, minute and second from any chrono time value.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self::new(t.hour(), t.minute(), t.second())
    }
}

/// Provider of the current local time.
pub trait TimeSource {
    fn now(&self) -> WallTime;
}

/// Local time from the operating system clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> WallTime {
        WallTime::from_timelike(&Local::now())
    }
}

/// Time source that returns whatever it was last set to.
#[derive(Debug, Default)]
pub struct FixedClock {
    time: Cell<WallTime>,
}

impl FixedClock {
    pub fn new(time: WallTime) -> Self {
        Self { time: Cell::new(time) }
    }

    pub fn set(&self, time: WallTime) {
        self.time.set(time);
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> WallTime {
        self.time.get()
    }
}

impl<F> TimeSource for F
where
    F: Fn() -> WallTime,
{
    fn now(&self) -> WallTime {
        self()
    }
}

/// Time of day folded onto the 12-hour dial.
///
/// `hour` is in `1..=12`: midnight and noon both read 12.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ClockState {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockState {
    /// Builds a state from 24-hour components. Out-of-range minutes and
    /// seconds wrap rather than spill into the next unit.
    pub fn new(hour24: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: normalize_hour(hour24),
            minute: minute % 60,
            second: second % 60,
        }
    }

    #[inline]
    pub fn from_wall(time: WallTime) -> Self {
        Self::new(time.hour24, time.minute, time.second)
    }
}

impl From<WallTime> for ClockState {
    fn from(time: WallTime) -> Self {
        Self::from_wall(time)
    }
}

/// Maps a 24-hour value onto `1..=12`.
#[inline]
pub fn normalize_hour(hour24: u32) -> u32 {
    match hour24 % 12 {
        0 => 12,
        h => h,
    }
}
