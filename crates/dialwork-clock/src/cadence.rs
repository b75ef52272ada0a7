//! Redraw cadence.
//!
//! Every render ends by asking the host for the next frame. By default two
//! requests are issued: an immediate one, which a host coalesces into its
//! natural frame rate, and a delayed one, which keeps the clock ticking if the
//! immediate path is throttled. Either alone is sufficient; the immediate
//! trigger gives smooth motion, the delayed one alone gives a visibly coarser
//! but still correct clock.

use std::time::Duration;

use dialwork_engine::schedule::RedrawHost;

/// Delay used for the delayed redraw request.
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(500);

/// Which redraw requests a render issues.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RedrawMode {
    /// Immediate request plus a delayed one.
    #[default]
    Both,
    /// Only the immediate request.
    Immediate,
    /// Only the delayed request.
    Periodic,
}

impl RedrawMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" => Some(RedrawMode::Both),
            "immediate" => Some(RedrawMode::Immediate),
            "periodic" => Some(RedrawMode::Periodic),
            _ => None,
        }
    }
}

/// Redraw mode plus the delay used by the delayed request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RedrawPolicy {
    pub mode: RedrawMode,
    pub interval: Duration,
}

impl Default for RedrawPolicy {
    fn default() -> Self {
        Self { mode: RedrawMode::Both, interval: REDRAW_INTERVAL }
    }
}

impl RedrawPolicy {
    pub fn immediate() -> Self {
        Self { mode: RedrawMode::Immediate, ..Self::default() }
    }

    pub fn periodic(interval: Duration) -> Self {
        Self { mode: RedrawMode::Periodic, interval }
    }

    /// Sends this policy's requests to `host`.
    pub fn issue(&self, host: &mut dyn RedrawHost) {
        match self.mode {
            RedrawMode::Both => {
                host.request_redraw_after(self.interval);
                host.request_redraw();
            }
            RedrawMode::Immediate => host.request_redraw(),
            RedrawMode::Periodic => host.request_redraw_after(self.interval),
        }
    }
}
