//! Paint model shared between the scene and the rasterizer.
//!
//! Colors are stored as linear premultiplied RGBA. Parsing accepts the string
//! forms hosts use for styling (`#RRGGBB`, `#AARRGGBB`, named colors).

pub mod color;

pub use color::{Color, ColorParseError};
