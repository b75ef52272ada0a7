use std::time::{Duration, Instant};

use super::RedrawHost;

/// Counters describing how requests were folded together.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RedrawStats {
    pub immediate_requests: u64,
    pub delayed_requests: u64,
    /// Requests absorbed by one already pending (an immediate request while
    /// one is queued, or a deadline later than the queued one).
    pub coalesced: u64,
    /// Redraws handed out by `take_due`.
    pub fired: u64,
}

/// Host-side redraw queue.
///
/// Holds at most one immediate request and one deadline (the earliest one
/// seen). Immediate requests are not serviced instantly: they become due at
/// the host's next frame tick, which is how a platform view coalesces
/// repeated invalidations into one redraw per frame.
#[derive(Debug, Default)]
pub struct RedrawQueue {
    immediate: bool,
    deadline: Option<Instant>,
    stats: RedrawStats,
}

impl RedrawQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a deadline. Only the earliest pending deadline is kept.
    pub fn schedule_at(&mut self, at: Instant) {
        self.stats.delayed_requests += 1;
        match self.deadline {
            Some(existing) if existing <= at => self.stats.coalesced += 1,
            Some(_) => {
                self.stats.coalesced += 1;
                self.deadline = Some(at);
            }
            None => self.deadline = Some(at),
        }
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[inline]
    pub fn stats(&self) -> RedrawStats {
        self.stats
    }

    /// When the loop should wake next, given the host's next frame tick.
    ///
    /// `None` means nothing is pending and the loop may sleep indefinitely.
    pub fn next_wake(&self, frame_tick: Instant) -> Option<Instant> {
        let immediate = self.immediate.then_some(frame_tick);
        match (immediate, self.deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Consumes whatever is due at `now` and reports whether to redraw.
    ///
    /// One redraw satisfies the immediate request; a deadline is cleared only
    /// once it has passed.
    pub fn take_due(&mut self, now: Instant, frame_tick: Instant) -> bool {
        let immediate_due = self.immediate && frame_tick <= now;
        let deadline_due = self.deadline.is_some_and(|d| d <= now);

        if !immediate_due && !deadline_due {
            return false;
        }

        self.immediate = false;
        if deadline_due {
            self.deadline = None;
        }
        self.stats.fired += 1;
        true
    }
}

impl RedrawHost for RedrawQueue {
    fn request_redraw(&mut self) {
        self.stats.immediate_requests += 1;
        if self.immediate {
            self.stats.coalesced += 1;
        }
        self.immediate = true;
    }

    fn request_redraw_after(&mut self, delay: Duration) {
        self.schedule_at(Instant::now() + delay);
    }
}
