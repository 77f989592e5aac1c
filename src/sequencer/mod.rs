// Capture sequencing: the state machine driving one strip session.

pub mod session;
pub mod state;
pub mod timing;

pub use session::{Sequencer, SessionOutcome};
pub use state::{SequenceState, StripLength, COUNTDOWN_LABELS};
pub use timing::SequenceTiming;
