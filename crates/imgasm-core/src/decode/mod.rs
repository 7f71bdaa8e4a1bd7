//! Image loading and resampling.
//!
//! This module turns a source image into a [`PixelGrid`](crate::PixelGrid)
//! of an exact target size:
//! - Decoding PNG, JPEG, BMP and GIF through the `image` crate
//! - Optional EXIF orientation correction
//! - Conversion to 8-bit RGB (alpha dropped)
//! - Resampling to the requested width and height
//!
//! All operations are synchronous. Nothing is cached between calls.
//!
//! # Examples
//!
//! ```ignore
//! use imgasm_core::decode::load;
//!
//! let grid = load("sprite.png", 32, 32).unwrap();
//! assert_eq!(grid.len(), 32 * 32);
//! ```

mod load;
mod orientation;
mod resize;
mod types;

#[cfg(test)]
mod test_utils;

pub use load::{load, load_from_bytes, load_with};
pub use orientation::{apply_orientation, read_orientation};
pub use resize::resample;
pub use types::{FilterType, LoadError, LoadOptions, Orientation};
