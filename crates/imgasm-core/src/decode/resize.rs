//! Resampling a decoded image onto the target grid.

use image::DynamicImage;

use super::{FilterType, LoadError};
use crate::grid::PixelGrid;

/// Convert an image to RGB8 and resample it to exactly `width x height`.
///
/// Alpha is dropped and other color spaces are converted before resampling.
/// Resizing is skipped when the source already has the target dimensions.
///
/// # Errors
///
/// Returns `LoadError::InvalidDimensions` if either target dimension is zero.
pub fn resample(
    img: &DynamicImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<PixelGrid, LoadError> {
    if width == 0 || height == 0 {
        return Err(LoadError::InvalidDimensions { width, height });
    }

    let rgb = img.to_rgb8();

    let rgb = if rgb.dimensions() == (width, height) {
        rgb
    } else {
        tracing::debug!(
            from_width = rgb.width(),
            from_height = rgb.height(),
            width,
            height,
            ?filter,
            "resampling image"
        );
        image::imageops::resize(&rgb, width, height, filter.to_image_filter())
    };

    PixelGrid::from_rgb_image(&rgb).map_err(|_| LoadError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Pixel;

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        DynamicImage::ImageRgb8(image::RgbImage::from_raw(width, height, pixels).unwrap())
    }

    #[test]
    fn test_resample_downscale() {
        let grid = resample(&create_test_image(100, 50), 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(grid.width(), 50);
        assert_eq!(grid.height(), 25);
        assert_eq!(grid.len(), 50 * 25);
    }

    #[test]
    fn test_resample_upscale() {
        let grid = resample(&create_test_image(5, 5), 20, 10, FilterType::Lanczos3).unwrap();

        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.len(), 200);
    }

    #[test]
    fn test_resample_same_dimensions_is_lossless() {
        let img = create_test_image(4, 3);
        let grid = resample(&img, 4, 3, FilterType::CatmullRom).unwrap();
        let source = img.to_rgb8();

        for (pixel, expected) in grid.pixels().iter().zip(source.pixels()) {
            assert_eq!(*pixel, Pixel::from(*expected));
        }
    }

    #[test]
    fn test_resample_zero_dimensions_error() {
        let img = create_test_image(10, 10);

        assert!(matches!(
            resample(&img, 0, 5, FilterType::Bilinear),
            Err(LoadError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(resample(&img, 5, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resample_drops_alpha() {
        let rgba = image::RgbaImage::from_raw(1, 1, vec![10, 20, 30, 0]).unwrap();
        let grid = resample(&DynamicImage::ImageRgba8(rgba), 1, 1, FilterType::Nearest).unwrap();

        assert_eq!(grid.pixels(), &[Pixel::new(10, 20, 30)]);
    }

    #[test]
    fn test_resample_converts_grayscale() {
        let luma = image::GrayImage::from_raw(2, 1, vec![0, 200]).unwrap();
        let grid = resample(&DynamicImage::ImageLuma8(luma), 2, 1, FilterType::Nearest).unwrap();

        assert_eq!(
            grid.pixels(),
            &[Pixel::new(0, 0, 0), Pixel::new(200, 200, 200)]
        );
    }

    #[test]
    fn test_resample_uniform_color_survives_every_filter() {
        let solid = image::RgbImage::from_pixel(8, 8, image::Rgb([12, 34, 56]));
        let img = DynamicImage::ImageRgb8(solid);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::CatmullRom,
            FilterType::Lanczos3,
        ] {
            let grid = resample(&img, 3, 5, filter).unwrap();
            assert_eq!(grid.len(), 15);
            assert!(grid.pixels().iter().all(|p| *p == Pixel::new(12, 34, 56)));
        }
    }
}
