use crate::scene::shapes::{CircleCmd, LineCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::Rasterizer` to cover it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Line(LineCmd),
}

impl DrawCmd {
    #[inline]
    pub fn as_circle(&self) -> Option<&CircleCmd> {
        match self {
            DrawCmd::Circle(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_line(&self) -> Option<&LineCmd> {
        match self {
            DrawCmd::Line(l) => Some(l),
            _ => None,
        }
    }
}
