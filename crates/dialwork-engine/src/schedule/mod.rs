//! Redraw scheduling.
//!
//! Widgets never own a timer. They signal the host through [`RedrawHost`]:
//! - `request_redraw()` asks for a frame as soon as the host can offer one
//! - `request_redraw_after(delay)` asks for a frame no later than `delay` from now
//!
//! [`RedrawQueue`] is a host-side implementation that coalesces both kinds of
//! request into a single "next wake" instant for a render loop.

mod queue;

pub use queue::{RedrawQueue, RedrawStats};

use std::time::Duration;

/// Fire-and-forget redraw signals sent from a widget to its host.
pub trait RedrawHost {
    /// Redraw at the host's next frame opportunity.
    fn request_redraw(&mut self);

    /// Redraw once `delay` has elapsed.
    fn request_redraw_after(&mut self, delay: Duration);
}

impl<H: RedrawHost + ?Sized> RedrawHost for &mut H {
    #[inline]
    fn request_redraw(&mut self) {
        (**self).request_redraw();
    }

    #[inline]
    fn request_redraw_after(&mut self, delay: Duration) {
        (**self).request_redraw_after(delay);
    }
}
