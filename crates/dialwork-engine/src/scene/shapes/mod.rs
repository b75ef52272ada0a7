mod circle;
mod line;

pub use circle::{CircleCmd, CircleStyle};
pub use line::LineCmd;

use crate::paint::Color;

/// How the ends of a stroked line are finished.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    /// Square end flush with the endpoint.
    #[default]
    Butt,
    /// Semicircle of half the stroke width past the endpoint.
    Round,
}

/// Stroke parameters for lines and circle outlines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color, cap: LineCap::Butt }
    }

    #[inline]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}
