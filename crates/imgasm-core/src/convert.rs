//! Load-then-encode composition.

use std::path::Path;

use crate::decode::{load_with, LoadOptions};
use crate::encode::{encode, Document};
use crate::error::Result;

/// Convert an image file into a `.word` declaration with default options.
///
/// # Errors
///
/// See [`convert_with`].
pub fn convert<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<Document> {
    convert_with(path, width, height, &LoadOptions::default())
}

/// Convert an image file into a `.word` declaration.
///
/// Either the whole document is produced or an error is returned; there is
/// no partial output.
///
/// # Errors
///
/// Returns `Error::Load` when the dimensions are zero or the image cannot be
/// read or decoded.
pub fn convert_with<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    options: &LoadOptions,
) -> Result<Document> {
    let grid = load_with(path, width, height, options)?;
    let doc = encode(&grid);
    tracing::debug!(words = doc.word_count(), "conversion finished");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{FilterType, LoadError};
    use crate::error::Error;

    #[test]
    fn test_convert_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.png");
        let img = image::RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
        img.save(&path).unwrap();

        let doc = convert(&path, 2, 1).unwrap();
        assert_eq!(
            doc.as_str(),
            ".eqv IMG_W 2\n.eqv IMG_H 1\nimage_data: .word\n\n    0x00FF0000, 0x0000FF00\n"
        );
    }

    #[test]
    fn test_convert_with_resample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solid.png");
        image::RgbImage::from_pixel(10, 10, image::Rgb([0, 0, 0]))
            .save(&path)
            .unwrap();

        let opts = LoadOptions::new().with_filter(FilterType::Nearest);
        let doc = convert_with(&path, 3, 2, &opts).unwrap();

        assert_eq!(doc.word_count(), 6);
        assert_eq!(doc.as_str().matches("0x00000000").count(), 6);
    }

    #[test]
    fn test_convert_zero_dimensions() {
        let err = convert("whatever.png", 0, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::Load(LoadError::InvalidDimensions { .. })
        ));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_convert_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert(dir.path().join("nope.png"), 4, 4).unwrap_err();
        assert!(matches!(err, Error::Load(LoadError::ImageRead { .. })));
    }
}
