//! Loading a source image into a fixed-size pixel grid.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};

use super::orientation::{apply_orientation, read_orientation};
use super::resize::resample;
use super::{LoadError, LoadOptions};
use crate::grid::PixelGrid;

const MEMORY_ORIGIN: &str = "<memory>";

/// Load an image file and resample it to `width x height` with default options.
///
/// # Errors
///
/// See [`load_with`].
pub fn load<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<PixelGrid, LoadError> {
    load_with(path, width, height, &LoadOptions::default())
}

/// Load an image file and resample it to `width x height`.
///
/// Dimensions are validated before the file is opened. The file contents
/// only live for the duration of this call.
///
/// # Errors
///
/// Returns `LoadError::InvalidDimensions` if either dimension is zero.
/// Returns `LoadError::ImageRead` if the file cannot be read or decoded.
pub fn load_with<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    options: &LoadOptions,
) -> Result<PixelGrid, LoadError> {
    if width == 0 || height == 0 {
        return Err(LoadError::InvalidDimensions { width, height });
    }

    let path = path.as_ref();
    let origin = path.display().to_string();
    tracing::debug!(path = %origin, width, height, "loading image");

    let bytes = std::fs::read(path).map_err(|e| LoadError::ImageRead {
        origin: origin.clone(),
        source: ImageError::IoError(e),
    })?;

    decode_and_resample(&bytes, origin, width, height, options)
}

/// Decode an in-memory encoded image and resample it to `width x height`.
///
/// # Errors
///
/// Returns `LoadError::InvalidDimensions` if either dimension is zero.
/// Returns `LoadError::ImageRead` if the bytes are not a supported image.
pub fn load_from_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
    options: &LoadOptions,
) -> Result<PixelGrid, LoadError> {
    if width == 0 || height == 0 {
        return Err(LoadError::InvalidDimensions { width, height });
    }

    decode_and_resample(bytes, MEMORY_ORIGIN.to_string(), width, height, options)
}

fn decode_and_resample(
    bytes: &[u8],
    origin: String,
    width: u32,
    height: u32,
    options: &LoadOptions,
) -> Result<PixelGrid, LoadError> {
    let img = decode(bytes).map_err(|source| LoadError::ImageRead { origin, source })?;

    let img = if options.apply_orientation {
        let orientation = read_orientation(bytes);
        tracing::debug!(?orientation, "applying EXIF orientation");
        apply_orientation(img, orientation)
    } else {
        img
    };

    resample(&img, width, height, options.filter)
}

fn decode(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let img = reader.decode()?;
    tracing::debug!(
        source_width = img.width(),
        source_height = img.height(),
        color = ?img.color(),
        "decoded image"
    );
    Ok(img)
}
