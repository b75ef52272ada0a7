//! dialwork clock: an analog clock widget on top of `dialwork-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dialwork_clock::prelude::*;
//!
//! let mut clock = ClockRenderer::new(ClockConfig::default());
//! let mut queue = RedrawQueue::new();
//!
//! // Whenever the host surface changes size:
//! clock.on_resize(480.0, 480.0);
//!
//! // In the host's redraw callback:
//! let mut draw_list = DrawList::new();
//! clock.render(Some(&mut draw_list), &mut queue);
//! // Hand draw_list to a renderer; wait on queue for the next frame.
//! ```
//!
//! Hosts with their own canvas implement [`Surface`](dialwork_engine::Surface)
//! and [`RedrawHost`](dialwork_engine::schedule::RedrawHost) directly.

pub mod angles;
pub mod cadence;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod renderer;
pub mod style;
pub mod time;

pub use config::ClockConfig;
pub use error::ConfigError;
pub use renderer::ClockRenderer;

/// Everything a host needs to embed the clock.
pub mod prelude {
    pub use crate::cadence::{RedrawMode, RedrawPolicy, REDRAW_INTERVAL};
    pub use crate::config::ClockConfig;
    pub use crate::error::ConfigError;
    pub use crate::frame::ClockFrame;
    pub use crate::geometry::{HandKind, HandLength, LayoutGeometry};
    pub use crate::renderer::ClockRenderer;
    pub use crate::style::StyleConfig;
    pub use crate::time::{ClockState, FixedClock, SystemClock, TimeSource, WallTime};

    // Engine primitives every host touches.
    pub use dialwork_engine::coords::{Vec2, Viewport};
    pub use dialwork_engine::paint::Color;
    pub use dialwork_engine::scene::DrawList;
    pub use dialwork_engine::schedule::{RedrawHost, RedrawQueue};
    pub use dialwork_engine::Surface;
}
