//! Row-major pixel encoding into assembly data declarations.
//!
//! This module provides functionality for:
//! - Packing RGB pixels into `0x00RRGGBB` words
//! - Serializing a pixel grid as a `.word` declaration, one output line per image row
//!
//! Encoding is a pure function: the same grid always yields byte-identical text.
//!
//! # Examples
//!
//! ```ignore
//! use imgasm_core::encode::encode_pixels;
//! use imgasm_core::Pixel;
//!
//! let pixels = vec![Pixel::new(255, 0, 0), Pixel::new(0, 255, 0)];
//! let doc = encode_pixels(&pixels, 2, 1).unwrap();
//! print!("{doc}");
//! ```

mod asm;
mod word;

pub use asm::{encode, encode_pixels, Document, DATA_LABEL, HEIGHT_SYMBOL, WIDTH_SYMBOL};
pub use word::PackedColorWord;
