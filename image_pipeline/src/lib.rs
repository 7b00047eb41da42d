//! Raster asset preparation for the site: decode, downscale to a size tier,
//! and re-encode as lossless WebP.

use std::io::Cursor;

use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("image decode failed: {0}")]
    Decode(String),
    #[error("image encode failed: {0}")]
    Encode(String),
    #[error("invalid image dimensions")]
    Dimensions,
}

#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

/// Dimensions after scaling the longer axis down to `max_dim`; images that
/// already fit are left alone.
pub fn target_dimensions(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let max_axis = width.max(height).max(1);
    let limit = max_dim.max(1);
    if max_axis <= limit {
        return (width.max(1), height.max(1));
    }
    let scale = limit as f64 / max_axis as f64;
    let target_w = ((width as f64) * scale).round().max(1.0) as u32;
    let target_h = ((height as f64) * scale).round().max(1.0) as u32;
    (target_w, target_h)
}

pub fn process_image(bytes: &[u8], max_dim: u32) -> Result<EncodedImage, PipelineError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|err| PipelineError::Decode(err.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(PipelineError::Dimensions);
    }
    let (target_w, target_h) = target_dimensions(width, height, max_dim);
    let resized = if (target_w, target_h) == (width, height) {
        decoded
    } else {
        decoded.resize_exact(target_w, target_h, FilterType::Lanczos3)
    };
    encode_webp(&resized)
}

fn encode_webp(image: &DynamicImage) -> Result<EncodedImage, PipelineError> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut bytes = Vec::new();
    WebPEncoder::new_lossless(Cursor::new(&mut bytes))
        .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|err| PipelineError::Encode(err.to_string()))?;
    Ok(EncodedImage {
        width,
        height,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};

    #[test]
    fn target_dimensions_scales_longest_axis() {
        assert_eq!(target_dimensions(4000, 2000, 1000), (1000, 500));
        assert_eq!(target_dimensions(2000, 4000, 1000), (500, 1000));
        assert_eq!(target_dimensions(800, 600, 1000), (800, 600));
        assert_eq!(target_dimensions(3000, 1, 1000), (1000, 1));
    }

    #[test]
    fn process_resizes_and_encodes() {
        let source = RgbaImage::from_pixel(64, 32, image::Rgba([120, 40, 200, 255]));
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(source)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let encoded = process_image(&png, 16).unwrap();
        assert_eq!((encoded.width, encoded.height), (16, 8));
        assert!(!encoded.bytes.is_empty());

        // Round-trips through the decoder as a sanity check.
        let reread = image::load_from_memory(&encoded.bytes).unwrap();
        assert_eq!((reread.width(), reread.height()), (16, 8));
    }

    #[test]
    fn garbage_input_is_a_decode_error() {
        let err = process_image(b"not an image", 512).unwrap_err();
        assert!(matches!(err, PipelineError::Decode(_)));
    }
}
