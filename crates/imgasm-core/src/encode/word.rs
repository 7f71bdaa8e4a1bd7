//! Packed 32-bit color words.

use std::fmt;

use crate::grid::Pixel;

/// A pixel packed as `0x00RRGGBB`.
///
/// The top byte is always zero; red, green and blue follow in descending
/// byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedColorWord(u32);

impl PackedColorWord {
    pub fn value(self) -> u32 {
        self.0
    }

    /// Unpack into `(r, g, b)`.
    pub fn channels(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.0.to_be_bytes();
        (r, g, b)
    }
}

impl From<Pixel> for PackedColorWord {
    fn from(pixel: Pixel) -> Self {
        Self(u32::from_be_bytes([0, pixel.r, pixel.g, pixel.b]))
    }
}

impl From<PackedColorWord> for u32 {
    fn from(word: PackedColorWord) -> Self {
        word.0
    }
}

/// Renders as `0x00RRGGBB` with uppercase hex digits.
impl fmt::Display for PackedColorWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}
