//! Photo booth capture core.
//!
//! Drives a live video source through a timed capture sequence, applies a
//! named cosmetic filter to each still, composes the results into a
//! single-row photo strip, and exports the composite as a JPEG. The UI
//! boundary observes the sequencer through a read-only watch subscription;
//! the video source is whatever implements [`camera::source::VideoSource`].

pub mod camera;
pub mod error;
pub mod export;
pub mod filter;
pub mod render;
pub mod sequencer;
pub mod strip;

pub use error::{BoothError, Result};
pub use filter::{FilterName, FilterSpec};
pub use render::{render_still, CapturedPhoto};
pub use sequencer::{
    SequenceState, SequenceTiming, Sequencer, SessionOutcome, StripLength, COUNTDOWN_LABELS,
};
pub use strip::{compose, Strip};
