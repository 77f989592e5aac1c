use std::time::Duration;

/// Pacing for one capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceTiming {
    /// How long each countdown label stays on screen.
    pub label_duration: Duration,
    /// Gap between a capture and the next photo's countdown.
    pub inter_photo_pause: Duration,
}

impl Default for SequenceTiming {
    fn default() -> Self {
        Self {
            label_duration: Duration::from_millis(1000),
            inter_photo_pause: Duration::from_millis(500),
        }
    }
}

impl SequenceTiming {
    /// Total wall time one photo's sub-sequence takes.
    pub fn per_photo(&self) -> Duration {
        self.label_duration * crate::sequencer::state::COUNTDOWN_LABELS.len() as u32
            + self.inter_photo_pause
    }
}
