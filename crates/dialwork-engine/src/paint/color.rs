use std::str::FromStr;

use thiserror::Error;

/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

/// Malformed color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("hex color `{0}` must have 3, 6 or 8 digits after `#`")]
    HexLength(String),
    #[error("hex color `{0}` contains a non-hex digit")]
    HexDigit(String),
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_premul(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::from_premul(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::from_premul(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::from_premul(0.0, 0.0, 1.0, 1.0);

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates a premultiplied color from straight RGBA bytes.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight RGBA bytes, rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// Scales every channel (alpha included) by `coverage`.
    #[inline]
    pub fn scaled(self, coverage: f32) -> Self {
        let k = coverage.clamp(0.0, 1.0);
        Self::from_premul(self.r * k, self.g * k, self.b * k, self.a * k)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Parses `#RGB`, `#RRGGBB`, `#AARRGGBB` (alpha first) or a color name.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let Some(hex) = s.strip_prefix('#') else {
            return Self::named(s).ok_or_else(|| ColorParseError::UnknownName(s.to_string()));
        };

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::HexDigit(s.to_string()));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);

        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0) * 17;
                Ok(Self::from_rgba8(nib(0), nib(1), nib(2), 255))
            }
            6 => Ok(Self::from_rgba8(byte(0), byte(2), byte(4), 255)),
            8 => Ok(Self::from_rgba8(byte(2), byte(4), byte(6), byte(0))),
            _ => Err(ColorParseError::HexLength(s.to_string())),
        }
    }

    fn named(name: &str) -> Option<Self> {
        let c = match name.to_ascii_lowercase().as_str() {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "gray" | "grey" => Self::from_rgba8(0x88, 0x88, 0x88, 0xff),
            "darkgray" | "darkgrey" => Self::from_rgba8(0x44, 0x44, 0x44, 0xff),
            "lightgray" | "lightgrey" => Self::from_rgba8(0xcc, 0xcc, 0xcc, 0xff),
            "yellow" => Self::from_rgba8(0xff, 0xff, 0x00, 0xff),
            "cyan" => Self::from_rgba8(0x00, 0xff, 0xff, 0xff),
            "magenta" => Self::from_rgba8(0xff, 0x00, 0xff, 0xff),
            _ => return None,
        };
        Some(c)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}
