//! Image decoding and preprocessing.

use std::path::Path;

use image::{
    imageops::{self, FilterType},
    DynamicImage,
};
use ndarray::Array4;

use crate::error::{Error, Result};

use super::{ImageTensor, MODEL_HEIGHT, MODEL_WIDTH, RGB_CHANNELS};

/// Open an image file and decode it.
///
/// Any color mode the `image` crate can decode is accepted; conversion to
/// RGB happens in [`to_tensor`].
///
/// # Errors
///
/// Returns an error naming the offending path if the file is missing or is
/// not a valid image.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    image::open(path).map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert an image to a normalized NCHW tensor.
///
/// The image is:
/// 1. Converted to RGB if necessary
/// 2. Resized to 192x256 (the model's fixed input resolution)
/// 3. Scaled to the [0, 1] range
/// 4. Returned as an NCHW tensor (1, 3, 256, 192)
///
/// Every tensor produced here has the same spatial dimensions regardless of
/// the source image size; this is the single place that owns that contract.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_tensor(img: &DynamicImage) -> ImageTensor {
    // Bilinear resize, matching the model's training-time preprocessing
    let rgb = imageops::resize(
        &img.to_rgb8(),
        MODEL_WIDTH,
        MODEL_HEIGHT,
        FilterType::Triangle,
    );

    let (height, width) = (MODEL_HEIGHT as usize, MODEL_WIDTH as usize);

    let mut tensor = Array4::<f32>::zeros((1, RGB_CHANNELS, height, width));

    for y in 0..height {
        for x in 0..width {
            // Safe: x and y are bounded by the fixed working resolution
            let pixel = rgb.get_pixel(x as u32, y as u32);
            tensor[[0, 0, y, x]] = f32::from(pixel[0]) / 255.0;
            tensor[[0, 1, y, x]] = f32::from(pixel[1]) / 255.0;
            tensor[[0, 2, y, x]] = f32::from(pixel[2]) / 255.0;
        }
    }

    tensor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tensor_shape_is_fixed_regardless_of_input_size() {
        for (w, h) in [(100, 100), (192, 256), (1920, 1080)] {
            let img = DynamicImage::new_rgb8(w, h);
            let tensor = to_tensor(&img);

            assert_eq!(tensor.shape(), &[1, 3, 256, 192]);
        }
    }

    #[test]
    fn black_image_encodes_to_zeros() {
        let img = DynamicImage::new_rgb8(64, 64);
        let tensor = to_tensor(&img);

        let max = tensor.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!(max.abs() < f32::EPSILON);
    }

    #[test]
    fn white_image_encodes_to_ones() {
        let buf = image::RgbImage::from_pixel(50, 80, image::Rgb([255, 255, 255]));
        let tensor = to_tensor(&DynamicImage::ImageRgb8(buf));

        let min = tensor.iter().copied().fold(f32::INFINITY, f32::min);
        assert!((min - 1.0).abs() < 1e-6);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_rgb("definitely/not/here.png").unwrap_err();

        assert!(matches!(err, Error::ImageDecode { .. }));
        assert!(err.to_string().contains("definitely/not/here.png"));
    }
}
