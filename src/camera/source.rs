use crate::camera::frame::Frame;
use crate::error::Result;

/// Device-agnostic live video source.
///
/// Implemented by whatever delivers live frames (a webcam pipeline, a file
/// player, the simulated source in [`crate::camera::dummy`]). The sequencer
/// only ever asks two things: is a frame available right now, and what does
/// it look like.
pub trait VideoSource: Send + Sync {
    /// Whether enough data is buffered to read a frame right now.
    ///
    /// Readiness is a transient property; a `false` here is expected during
    /// device warm-up and is not an error.
    fn is_ready(&self) -> bool;

    /// The current frame at the source's native resolution.
    ///
    /// Fails with [`crate::error::BoothError::SourceNotReady`] when no frame
    /// is available. Two successive calls may return different frames; the
    /// source is live.
    fn current_frame(&self) -> Result<Frame>;
}
