//! imgasm core - image to assembly data conversion
//!
//! This crate turns a raster image into a MIPS-style `.word` data
//! declaration so a bitmap can live in a program's static data segment.
//!
//! The work is split in two steps:
//! - [`decode`] loads a source image and resamples it into a [`PixelGrid`]
//! - [`encode`] serializes a grid as `0x00RRGGBB` literals, one line per row
//!
//! [`convert`] runs both.

pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grid;

pub use convert::{convert, convert_with};
pub use decode::{load, load_with, FilterType, LoadError, LoadOptions};
pub use encode::{encode, encode_pixels, Document, PackedColorWord};
pub use error::{Error, Result};
pub use grid::{GridError, Pixel, PixelGrid};
