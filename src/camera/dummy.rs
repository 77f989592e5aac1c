use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::camera::frame::Frame;
use crate::camera::source::VideoSource;
use crate::error::{BoothError, Result};

const DUMMY_WIDTH: u32 = 64;
const DUMMY_HEIGHT: u32 = 48;

/// A fake video source for testing without real hardware.
///
/// Produces a synthetic RGB gradient that shifts on every read, so
/// consecutive frames differ the way a live camera's do. Readiness can be
/// toggled to simulate device warm-up or a camera that never comes online.
pub struct DummySource {
    width: u32,
    height: u32,
    ready: AtomicBool,
    /// Incremented per read; shifts the gradient so frames are time-varying.
    tick: AtomicU64,
}

impl DummySource {
    /// Create a ready source at the default simulated resolution.
    pub fn new() -> Self {
        Self::with_resolution(DUMMY_WIDTH, DUMMY_HEIGHT)
    }

    /// Create a ready source at a specific native resolution.
    pub fn with_resolution(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ready: AtomicBool::new(true),
            tick: AtomicU64::new(0),
        }
    }

    /// Create a source that reports itself unready until [`Self::set_ready`].
    pub fn never_ready() -> Self {
        let source = Self::new();
        source.ready.store(false, Ordering::Relaxed);
        source
    }

    /// Toggle readiness, simulating warm-up or signal loss.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Relaxed);
    }
}

impl Default for DummySource {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoSource for DummySource {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    fn current_frame(&self) -> Result<Frame> {
        if !self.is_ready() {
            return Err(BoothError::SourceNotReady);
        }

        let tick = self.tick.fetch_add(1, Ordering::Relaxed);
        let mut data = Vec::with_capacity((self.width * self.height * 3) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                data.push(((u64::from(x) + tick) % 256) as u8);
                data.push(((u64::from(y) + tick) % 256) as u8);
                data.push(128);
            }
        }
        Frame::new(data, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_source_is_ready_by_default() {
        let source = DummySource::new();
        assert!(source.is_ready());
    }

    #[test]
    fn dummy_source_delivers_native_resolution() {
        let source = DummySource::with_resolution(8, 6);
        let frame = source.current_frame().unwrap();
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.height(), 6);
        assert_eq!(frame.data().len(), 8 * 6 * 3);
    }

    #[test]
    fn dummy_source_frames_vary_over_time() {
        let source = DummySource::new();
        let first = source.current_frame().unwrap();
        let second = source.current_frame().unwrap();
        assert_ne!(first.data(), second.data());
    }

    #[test]
    fn never_ready_source_refuses_frames() {
        let source = DummySource::never_ready();
        assert!(!source.is_ready());
        assert!(matches!(
            source.current_frame(),
            Err(BoothError::SourceNotReady)
        ));
    }

    #[test]
    fn readiness_can_be_toggled() {
        let source = DummySource::never_ready();
        source.set_ready(true);
        assert!(source.current_frame().is_ok());
        source.set_ready(false);
        assert!(source.current_frame().is_err());
    }

    #[test]
    fn dummy_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DummySource>();
    }
}
