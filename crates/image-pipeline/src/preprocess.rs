//! Fixed resize/normalize pipeline producing model input tensors

use crate::PreprocessError;
use image::{imageops::FilterType, DynamicImage, GenericImageView};
use ndarray::Array4;
use std::path::Path;
use tracing::debug;

/// Default model input resolution (pixels per side)
pub const DEFAULT_INPUT_SIZE: u32 = 256;

/// Resize/normalize pipeline for classifier input
///
/// Decodes an image, resizes it to the target resolution with bilinear
/// interpolation, and scales pixel intensities into [0, 1].
pub struct Preprocessor {
    width: u32,
    height: u32,
}

impl Preprocessor {
    /// Create a preprocessor targeting the given resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Target input width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Target input height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Decode and preprocess the image at `path`
    pub fn preprocess(&self, path: &Path) -> Result<Array4<f32>, PreprocessError> {
        let img = image::open(path).map_err(|source| PreprocessError::Decode {
            path: path.display().to_string(),
            source,
        })?;
        let (orig_w, orig_h) = img.dimensions();
        debug!("Decoded {} ({}x{})", path.display(), orig_w, orig_h);
        Ok(self.preprocess_image(&img))
    }

    /// Preprocess an already-decoded image
    ///
    /// Output shape is `[1, height, width, 3]` (NHWC), values in [0, 1].
    pub fn preprocess_image(&self, img: &DynamicImage) -> Array4<f32> {
        let resized = img.resize_exact(self.width, self.height, FilterType::Triangle);
        let rgb = resized.to_rgb8();

        let (w, h) = (self.width as usize, self.height as usize);
        let mut tensor = Array4::<f32>::zeros((1, h, w, 3));
        for (x, y, pixel) in rgb.enumerate_pixels() {
            for c in 0..3 {
                tensor[[0, y as usize, x as usize, c]] = pixel[c] as f32 / 255.0;
            }
        }
        tensor
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_SIZE, DEFAULT_INPUT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use proptest::prelude::*;
    use std::io::Write;

    fn uniform_image(w: u32, h: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb([value, value, value])))
    }

    #[test]
    fn test_output_shape() {
        let pre = Preprocessor::new(256, 256);
        let tensor = pre.preprocess_image(&uniform_image(64, 48, 100));
        assert_eq!(tensor.shape(), &[1, 256, 256, 3]);
    }

    #[test]
    fn test_white_image_normalizes_to_one() {
        let pre = Preprocessor::new(32, 32);
        let tensor = pre.preprocess_image(&uniform_image(64, 64, 255));
        assert!(tensor.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_black_image_normalizes_to_zero() {
        let pre = Preprocessor::new(32, 32);
        let tensor = pre.preprocess_image(&uniform_image(64, 64, 0));
        assert!(tensor.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let pre = Preprocessor::default();
        let err = pre.preprocess(Path::new("no_such_image.png")).unwrap_err();
        assert!(matches!(err, PreprocessError::Decode { .. }));
    }

    #[test]
    fn test_non_image_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"definitely not a png").unwrap();

        let pre = Preprocessor::default();
        let err = pre.preprocess(&path).unwrap_err();
        assert!(matches!(err, PreprocessError::Decode { .. }));
    }

    #[test]
    fn test_preprocess_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("white.png");
        RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();

        let pre = Preprocessor::new(16, 16);
        let tensor = pre.preprocess(&path).unwrap();
        assert_eq!(tensor.shape(), &[1, 16, 16, 3]);
        assert!(tensor.iter().all(|&v| v == 1.0));
    }

    proptest! {
        #[test]
        fn prop_values_always_in_unit_range(
            pixels in prop::collection::vec(0u8..=255, 48),
            target in 1u32..=8,
        ) {
            let img = RgbImage::from_raw(4, 4, pixels).unwrap();
            let pre = Preprocessor::new(target, target);
            let tensor = pre.preprocess_image(&DynamicImage::ImageRgb8(img));

            prop_assert_eq!(
                tensor.shape(),
                &[1, target as usize, target as usize, 3]
            );
            prop_assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
        }
    }
}
