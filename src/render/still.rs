use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::camera::source::VideoSource;
use crate::error::{BoothError, Result};
use crate::filter::apply::apply_spec;
use crate::filter::{FilterName, FilterSpec};
use crate::render::encode::encode_jpeg;

/// JPEG quality used for captured stills.
pub const CAPTURE_JPEG_QUALITY: u8 = 85;

/// One captured still: the encoded image plus the filter it was shot with.
///
/// The filter name is fixed at capture time; changing the selected filter
/// later never alters an existing photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPhoto {
    jpeg: Vec<u8>,
    filter: FilterName,
    width: u32,
    height: u32,
}

impl CapturedPhoto {
    /// Encoded JPEG bytes.
    pub fn jpeg(&self) -> &[u8] {
        &self.jpeg
    }

    /// The filter that was selected when this photo's capture step ran.
    pub fn filter(&self) -> FilterName {
        self.filter
    }

    /// Native capture width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Native capture height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The photo as a `data:image/jpeg;base64,…` URL, ready for an `<img>`
    /// tag or any embed that takes data URLs.
    pub fn to_data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", STANDARD.encode(&self.jpeg))
    }
}

/// Produce one still image from the current live frame and a filter.
///
/// Fails with [`BoothError::SourceNotReady`] when the source has no frame
/// buffered; callers treat that as an expected transient, not a fault.
/// Stateless per call; each invocation samples the live source afresh.
pub fn render_still(source: &dyn VideoSource, filter: FilterName) -> Result<CapturedPhoto> {
    if !source.is_ready() {
        return Err(BoothError::SourceNotReady);
    }

    let frame = source.current_frame()?;
    let (width, height) = (frame.width(), frame.height());
    let mut data = frame.into_data();

    let spec = FilterSpec::for_name(filter);
    apply_spec(&spec, &mut data, width, height)?;

    let jpeg = encode_jpeg(&data, width, height, CAPTURE_JPEG_QUALITY)?;
    Ok(CapturedPhoto {
        jpeg,
        filter,
        width,
        height,
    })
}
