//! Postprocessing and image saving.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{Error, Result};

use super::ImageTensor;

/// Convert a normalized NCHW tensor back to an RGB image.
///
/// Inverse of the encode-side scaling: the batch dimension is dropped and
/// values are rescaled from [0, 1] to [0, 255] with clamping.
///
/// # Panics
///
/// Panics if the tensor's batch dimension is not exactly 1. A multi-batch
/// tensor here is a programming error, not a recoverable condition.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_image(tensor: &ImageTensor) -> RgbImage {
    assert_eq!(tensor.shape()[0], 1, "expected a single-batch tensor");

    let height = tensor.shape()[2];
    let width = tensor.shape()[3];

    let mut img = ImageBuffer::new(width as u32, height as u32);

    for y in 0..height {
        for x in 0..width {
            let r = denormalize(tensor[[0, 0, y, x]]);
            let g = denormalize(tensor[[0, 1, y, x]]);
            let b = denormalize(tensor[[0, 2, y, x]]);

            // Safe: x and y are bounded by the tensor's spatial dims
            img.put_pixel(x as u32, y as u32, Rgb([r, g, b]));
        }
    }

    img
}

/// Save an image to disk, with the format inferred from the extension.
///
/// JPEG output honors the quality knob; every other format uses the `image`
/// crate's defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoded.
pub fn save_image<P: AsRef<Path>>(img: &RgbImage, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();

    let final_img = image::DynamicImage::ImageRgb8(img.clone());

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => {
            let mut output = std::fs::File::create(path)?;
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut output, quality);
            final_img
                .write_with_encoder(encoder)
                .map_err(|source| Error::ImageSave {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        _ => {
            final_img.save(path).map_err(|source| Error::ImageSave {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

/// Rescale a value from [0, 1] to [0, 255] with clamping.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn denormalize(value: f32) -> u8 {
    // Safe: clamped to [0, 255] range before casting
    (value * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    #[test]
    fn test_denormalize() {
        assert_eq!(denormalize(0.0), 0);
        assert_eq!(denormalize(0.5), 127);
        assert_eq!(denormalize(1.0), 255);
    }

    #[test]
    fn test_denormalize_clamp() {
        assert_eq!(denormalize(-1.0), 0);
        assert_eq!(denormalize(2.0), 255);
    }

    #[test]
    fn constant_tensor_decodes_to_constant_pixels() {
        let tensor = Array4::from_elem((1, 3, 256, 192), 0.25_f32);
        let img = to_image(&tensor);

        assert_eq!(img.dimensions(), (192, 256));
        // 0.25 * 255 = 63.75, truncated to 63
        assert!(img.pixels().all(|p| p.0 == [63, 63, 63]));
    }

    #[test]
    #[should_panic(expected = "single-batch tensor")]
    fn multi_batch_tensor_fails_fast() {
        let tensor = Array4::from_elem((2, 3, 256, 192), 0.5_f32);
        let _ = to_image(&tensor);
    }
}
