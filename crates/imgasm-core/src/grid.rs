//! Pixel and pixel-grid types shared by the loader and the encoder.

use thiserror::Error;

/// Errors raised when a pixel grid does not describe a valid image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel count doesn't match the declared dimensions.
    #[error("Invalid grid: {width}x{height} needs {expected} pixels, got {actual}")]
    InvalidGrid {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// A single RGB pixel with 8 bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<image::Rgb<u8>> for Pixel {
    fn from(rgb: image::Rgb<u8>) -> Self {
        Self::from(rgb.0)
    }
}

/// Number of pixels a `width x height` image holds.
pub(crate) fn pixel_count(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize)
}

/// Reject zero-sized dimensions.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Reject a pixel slice whose length doesn't match `width * height`.
pub(crate) fn check_grid(pixels: &[Pixel], width: u32, height: u32) -> Result<(), GridError> {
    check_dimensions(width, height)?;

    let expected = pixel_count(width, height);
    if pixels.len() != expected {
        return Err(GridError::InvalidGrid {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// A dense RGB image in row-major order.
///
/// The pixel at column `col` of row `row` lives at `row * width + col`.
/// A grid always has non-zero dimensions and exactly `width * height` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a grid, validating dimensions and pixel count.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either dimension is zero and
    /// `GridError::InvalidGrid` if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, GridError> {
        check_grid(&pixels, width, height)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid from an `image::RgbImage`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` for an empty image.
    pub fn from_rgb_image(img: &image::RgbImage) -> Result<Self, GridError> {
        let (width, height) = img.dimensions();
        check_dimensions(width, height)?;

        let pixels = img.pixels().map(|p| Pixel::from(*p)).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the pixel at (`col`, `row`), or `None` when out of bounds.
    pub fn get(&self, col: u32, row: u32) -> Option<Pixel> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let index = (row as usize) * (self.width as usize) + col as usize;
        self.pixels.get(index).copied()
    }

    /// Iterate over image rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}
