use crate::error::{BoothError, Result};

/// A single live frame from the video source, as packed RGB24.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    /// Create a frame, validating that the buffer matches `width * height * 3`.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| BoothError::InvalidFrame("frame size overflow".to_string()))?;
        if data.len() != expected {
            return Err(BoothError::InvalidFrame(format!(
                "expected {expected} bytes for {width}x{height} RGB, got {}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Raw RGB pixel data, row-major, 3 bytes per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the frame and return the pixel buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}
