//! Fixtures shared by the decode tests.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

/// Encode `img` as a JPEG carrying an EXIF Orientation tag with `orientation`.
///
/// The APP1 segment holds a big-endian TIFF header and a single IFD entry
/// (tag 0x0112, SHORT, count 1) and is placed right after SOI.
pub(crate) fn jpeg_with_orientation(img: &RgbImage, orientation: u16) -> Vec<u8> {
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, 95)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .unwrap();
    assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

    let [hi, lo] = orientation.to_be_bytes();
    let mut tiff = vec![
        b'M', b'M', 0x00, 0x2A, // big-endian TIFF magic
        0x00, 0x00, 0x00, 0x08, // offset of IFD0
        0x00, 0x01, // one entry
        0x01, 0x12, // Orientation
        0x00, 0x03, // SHORT
        0x00, 0x00, 0x00, 0x01, // count
        hi, lo, 0x00, 0x00, // value, left-justified
    ];
    tiff.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // no IFD1

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);
    let segment_len = u16::try_from(payload.len() + 2).unwrap();

    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// A `width x height` image whose left half is red and right half is blue.
pub(crate) fn red_left_blue_right(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([0, 0, 255])
        }
    })
}
