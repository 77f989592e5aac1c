use image::codecs::jpeg::JpegEncoder;
use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{BoothError, Result};

/// Encode packed RGB pixel data to JPEG at the given quality (1-100).
pub fn encode_jpeg(data: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>> {
    let img: ImageBuffer<Rgb<u8>, _> = ImageBuffer::from_raw(width, height, data)
        .ok_or_else(|| {
            BoothError::Encode(format!("buffer does not match {width}x{height} RGB"))
        })?;

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    img.write_with_encoder(encoder)
        .map_err(|e| BoothError::Encode(e.to_string()))?;
    Ok(buf)
}

/// Decode an encoded still back into an RGB image.
pub fn decode_jpeg(bytes: &[u8]) -> Result<RgbImage> {
    let img =
        image::load_from_memory(bytes).map_err(|e| BoothError::Decode(e.to_string()))?;
    Ok(img.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a synthetic RGB test image (gradient pattern).
    fn make_test_rgb(width: u32, height: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push((x % 256) as u8);
                data.push((y % 256) as u8);
                data.push(128);
            }
        }
        data
    }

    #[test]
    fn encode_jpeg_produces_valid_jpeg_bytes() {
        let rgb = make_test_rgb(64, 48);
        let jpeg = encode_jpeg(&rgb, 64, 48, 85).unwrap();
        // JPEG files start with FF D8 and end with FF D9
        assert_eq!(jpeg[0], 0xFF);
        assert_eq!(jpeg[1], 0xD8);
        assert_eq!(jpeg[jpeg.len() - 2], 0xFF);
        assert_eq!(jpeg[jpeg.len() - 1], 0xD9);
    }

    #[test]
    fn encode_jpeg_lower_quality_produces_smaller_output() {
        let rgb = make_test_rgb(320, 240);
        let high = encode_jpeg(&rgb, 320, 240, 85).unwrap();
        let low = encode_jpeg(&rgb, 320, 240, 50).unwrap();
        assert!(
            low.len() < high.len(),
            "quality 50 ({}) should be smaller than quality 85 ({})",
            low.len(),
            high.len()
        );
    }

    #[test]
    fn encode_jpeg_rejects_mismatched_buffer() {
        let result = encode_jpeg(&[0u8; 10], 64, 48, 85);
        assert!(matches!(result, Err(BoothError::Encode(_))));
    }

    #[test]
    fn decode_jpeg_recovers_dimensions() {
        let rgb = make_test_rgb(32, 16);
        let jpeg = encode_jpeg(&rgb, 32, 16, 90).unwrap();
        let decoded = decode_jpeg(&jpeg).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 16);
    }

    #[test]
    fn decode_jpeg_rejects_garbage() {
        let result = decode_jpeg(&[0x00, 0x01, 0x02]);
        assert!(matches!(result, Err(BoothError::Decode(_))));
    }
}
