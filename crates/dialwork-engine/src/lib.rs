//! dialwork engine crate.
//!
//! Renderer-agnostic pieces shared by widgets and hosts: geometry, paint,
//! recorded draw streams, the `Surface` drawing contract, redraw scheduling
//! and a CPU rasterizer.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod schedule;
pub mod surface;

pub use surface::Surface;
