//! RGBA pixel surface.
//!
//! The surface starts fully transparent and stays transparent wherever
//! nothing has painted — transparency is load-bearing: erased regions must
//! read as "no pixel here", not as opaque white, so they remain erased when
//! the surface is composited over anything else.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::io::Cursor;

use events::BlendMode;
use image::{ImageFormat, Rgba, RgbaImage};

/// The untouched pixel value.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Failure while serializing a surface to an image format.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// An RGBA pixel buffer with pixel-exact equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Create a fully transparent surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, TRANSPARENT) }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = TRANSPARENT;
        }
    }

    /// Whether `(x, y)` falls inside the buffer.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }

    /// Read a pixel. `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba<u8>> {
        if !self.contains(x, y) {
            return None;
        }
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        Some(*self.image.get_pixel(x, y))
    }

    /// Overwrite a pixel with a raw value. No-op outside the buffer.
    pub(crate) fn set(&mut self, x: i64, y: i64, value: Rgba<u8>) {
        if !self.contains(x, y) {
            return;
        }
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        self.image.put_pixel(x, y, value);
    }

    /// Composite one painted pixel. Source-over writes the color at full
    /// opacity; destination-out writes transparency. No-op outside the
    /// buffer.
    pub fn paint(&mut self, x: i64, y: i64, rgb: [u8; 3], mode: BlendMode) {
        let value = match mode {
            BlendMode::SourceOver => Rgba([rgb[0], rgb[1], rgb[2], 255]),
            BlendMode::DestinationOut => TRANSPARENT,
        };
        self.set(x, y, value);
    }

    /// Serialize the surface as a PNG.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the PNG encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut out = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
        Ok(out)
    }

    /// Borrow the underlying image buffer.
    #[must_use]
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}
