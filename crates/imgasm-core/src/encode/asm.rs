//! Assembly `.word` data declaration output.
//!
//! The document layout is a fixed external format consumed by MIPS
//! assemblers (MARS/SPIM):
//!
//! ```text
//! .eqv IMG_W 2
//! .eqv IMG_H 2
//! image_data: .word
//!
//!     0x00FF0000, 0x0000FF00,
//!     0x000000FF, 0x00FFFFFF
//! ```
//!
//! Every literal except the last is followed by `", "`, so all rows but the
//! last end with a trailing separator.

use std::fmt;
use std::io;

use super::PackedColorWord;
use crate::grid::{check_grid, GridError, Pixel, PixelGrid};

/// Name of the width constant.
pub const WIDTH_SYMBOL: &str = "IMG_W";
/// Name of the height constant.
pub const HEIGHT_SYMBOL: &str = "IMG_H";
/// Label of the data section.
pub const DATA_LABEL: &str = "image_data";

const ROW_INDENT: &str = "    ";
const SEPARATOR: &str = ", ";

/// An encoded assembly data declaration.
///
/// Produced once per conversion and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    width: u32,
    height: u32,
    word_count: usize,
    text: String,
}

impl Document {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of `.word` literals in the body.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Write the document verbatim to `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.text.as_bytes())?;
        writer.flush()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Encode a validated pixel grid.
///
/// # Example
///
/// ```
/// use imgasm_core::{encode, Pixel, PixelGrid};
///
/// let grid = PixelGrid::new(2, 1, vec![Pixel::new(255, 0, 0), Pixel::new(0, 255, 0)]).unwrap();
/// let doc = encode(&grid);
/// assert!(doc.as_str().contains("0x00FF0000, 0x0000FF00"));
/// ```
pub fn encode(grid: &PixelGrid) -> Document {
    render(grid.pixels(), grid.width(), grid.height())
}

/// Encode raw row-major pixels with explicit dimensions.
///
/// # Errors
///
/// Returns `GridError::InvalidDimensions` if either dimension is zero and
/// `GridError::InvalidGrid` if `pixels.len() != width * height`. No document
/// is produced in either case.
pub fn encode_pixels(pixels: &[Pixel], width: u32, height: u32) -> Result<Document, GridError> {
    check_grid(pixels, width, height)?;
    Ok(render(pixels, width, height))
}

fn render(pixels: &[Pixel], width: u32, height: u32) -> Document {
    let text = Declaration {
        pixels,
        width,
        height,
    }
    .to_string();

    tracing::trace!(width, height, words = pixels.len(), bytes = text.len(), "encoded document");

    Document {
        width,
        height,
        word_count: pixels.len(),
        text,
    }
}

/// Text layout of a `.word` declaration over row-major pixels.
struct Declaration<'a> {
    pixels: &'a [Pixel],
    width: u32,
    height: u32,
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".eqv {WIDTH_SYMBOL} {}", self.width)?;
        writeln!(f, ".eqv {HEIGHT_SYMBOL} {}", self.height)?;
        writeln!(f, "{DATA_LABEL}: .word")?;

        let row_len = self.width as usize;
        let last = self.pixels.len().saturating_sub(1);
        for (i, pixel) in self.pixels.iter().enumerate() {
            if i.checked_rem(row_len) == Some(0) {
                write!(f, "\n{ROW_INDENT}")?;
            }

            write!(f, "{}", PackedColorWord::from(*pixel))?;

            if i != last {
                f.write_str(SEPARATOR)?;
            }
        }
        writeln!(f)
    }
}
