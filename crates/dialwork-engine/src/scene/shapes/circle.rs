use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Whether a circle is filled or outlined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CircleStyle {
    Fill(Color),
    /// Outline centered on the circle's radius.
    Stroke(Stroke),
}

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub style: CircleStyle,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, style: CircleStyle) -> Self {
        Self { center, radius, style }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, style: CircleStyle) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, style)));
    }

    /// Records a solid circle.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, center, radius, CircleStyle::Fill(color));
    }
}
