use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::coords::Rect;
use crate::paint::Color;

use super::RenderError;

/// Pixel buffer the rasterizer draws into.
///
/// Pixels are stored as straight-alpha RGBA8; blending happens in premultiplied
/// space (source-over).
#[derive(Debug, Clone)]
pub struct RasterTarget {
    image: RgbaImage,
}

impl RasterTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whole image as a rect in logical pixels.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32)
    }

    pub fn clear(&mut self, color: Color) {
        let px = Rgba(color.to_rgba8());
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Straight RGBA bytes at `(x, y)`. Out-of-range reads return transparent.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| p.0)
            .unwrap_or([0; 4])
    }

    /// Composites `color` scaled by `coverage` over the pixel at `(x, y)`.
    pub fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        let Some(dst) = self.image.get_pixel_mut_checked(x, y) else { return };

        let src = color.scaled(coverage);
        let [dr, dg, db, da] = dst.0;
        let d = Color::from_rgba8(dr, dg, db, da);
        let inv = 1.0 - src.a;
        let out = Color::from_premul(
            src.r + d.r * inv,
            src.g + d.g * inv,
            src.b + d.b * inv,
            src.a + d.a * inv,
        );
        dst.0 = out.to_rgba8();
    }

    /// Encodes the buffer as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| RenderError::Encode { path: path.to_path_buf(), source })
    }
}
