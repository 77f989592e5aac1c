// Frame renderer: one filtered still per call, from the live source.

pub mod encode;
pub mod still;

pub use still::{render_still, CapturedPhoto};
