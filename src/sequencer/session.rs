use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{watch, Notify};
use tracing::{debug, info, warn};

use crate::camera::source::VideoSource;
use crate::error::{BoothError, Result};
use crate::filter::FilterName;
use crate::render::still::{render_still, CapturedPhoto};
use crate::sequencer::state::{SequenceState, StripLength, COUNTDOWN_LABELS};
use crate::sequencer::timing::SequenceTiming;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// All photos' timing steps ran; the strip is ready.
    Completed,
    /// `cancel()` aborted the session mid-wait; back to Idle.
    Cancelled,
}

/// Drives one full strip-capture session: countdowns, captures, pauses.
///
/// The sequencer exclusively owns the captured photos and the
/// [`SequenceState`]; observers get read-only snapshots via [`Self::subscribe`].
/// The whole session is a single cooperative timeline: each countdown label,
/// each inter-photo pause, and the pre-wait yield are the only suspension
/// points, and every UI-visible state is published before its timed wait
/// begins.
pub struct Sequencer {
    source: Arc<dyn VideoSource>,
    timing: SequenceTiming,
    filter: Mutex<FilterName>,
    strip_length: Mutex<StripLength>,
    photos: Mutex<Vec<CapturedPhoto>>,
    state_tx: watch::Sender<SequenceState>,
    running: AtomicBool,
    cancel_requested: AtomicBool,
    cancel_notify: Notify,
}

impl Sequencer {
    /// Create a sequencer over the given source with default pacing.
    pub fn new(source: Arc<dyn VideoSource>) -> Self {
        Self::with_timing(source, SequenceTiming::default())
    }

    /// Create a sequencer with explicit pacing (tests use shorter waits).
    pub fn with_timing(source: Arc<dyn VideoSource>, timing: SequenceTiming) -> Self {
        let (state_tx, _) = watch::channel(SequenceState::Idle);
        Self {
            source,
            timing,
            filter: Mutex::new(FilterName::default()),
            strip_length: Mutex::new(StripLength::default()),
            photos: Mutex::new(Vec::new()),
            state_tx,
            running: AtomicBool::new(false),
            cancel_requested: AtomicBool::new(false),
            cancel_notify: Notify::new(),
        }
    }

    /// Subscribe to state snapshots. The receiver sees every state that is
    /// followed by a timed wait, in publication order.
    pub fn subscribe(&self) -> watch::Receiver<SequenceState> {
        self.state_tx.subscribe()
    }

    /// The current state snapshot.
    pub fn state(&self) -> SequenceState {
        *self.state_tx.borrow()
    }

    /// Photos captured so far this session, in capture order.
    pub fn photos(&self) -> Vec<CapturedPhoto> {
        self.photos.lock().clone()
    }

    /// The currently selected filter.
    pub fn filter(&self) -> FilterName {
        *self.filter.lock()
    }

    /// The configured strip length.
    pub fn strip_length(&self) -> StripLength {
        *self.strip_length.lock()
    }

    /// Select a filter. Applied only while Idle; otherwise a logged no-op.
    /// Returns whether the change applied.
    pub fn set_filter(&self, filter: FilterName) -> bool {
        if self.state() != SequenceState::Idle {
            warn!("ignoring filter change to {filter:?}: sequencer is not idle");
            return false;
        }
        *self.filter.lock() = filter;
        true
    }

    /// Configure the strip length. Applied only while Idle; otherwise a
    /// logged no-op. Returns whether the change applied.
    pub fn set_strip_length(&self, length: StripLength) -> bool {
        if self.state() != SequenceState::Idle {
            warn!("ignoring strip length change: sequencer is not idle");
            return false;
        }
        *self.strip_length.lock() = length;
        true
    }

    /// Run one session from start to Complete.
    ///
    /// Accepted only from Idle; fails with [`BoothError::NotIdle`] while a
    /// session is active or after Complete until [`Self::reshoot`]. A source
    /// that is never ready still drives every timing step to Complete, just
    /// with fewer (possibly zero) photos.
    pub async fn run(&self) -> Result<SessionOutcome> {
        if self.running.swap(true, Ordering::AcqRel) {
            return Err(BoothError::NotIdle);
        }
        if self.state() != SequenceState::Idle {
            self.running.store(false, Ordering::Release);
            return Err(BoothError::NotIdle);
        }
        self.cancel_requested.store(false, Ordering::Release);
        self.photos.lock().clear();

        let count = self.strip_length.lock().count();
        info!("capture session started for {count} photo(s)");

        for photo_index in 0..count {
            for label in COUNTDOWN_LABELS {
                self.publish(SequenceState::Counting { photo_index, label });
                // The label must be observable for at least one scheduling
                // pass before its wait starts.
                tokio::task::yield_now().await;
                if self.wait_or_cancel(self.timing.label_duration).await {
                    return Ok(self.finish_cancelled());
                }
            }

            self.publish(SequenceState::Capturing { photo_index });
            let filter = *self.filter.lock();
            match render_still(self.source.as_ref(), filter) {
                Ok(photo) => self.photos.lock().push(photo),
                Err(BoothError::SourceNotReady) => {
                    warn!("video source not ready, skipping photo {photo_index}");
                }
                Err(e) => warn!("still render failed for photo {photo_index}: {e}"),
            }

            self.publish(SequenceState::InterPhotoPause { photo_index });
            tokio::task::yield_now().await;
            if self.wait_or_cancel(self.timing.inter_photo_pause).await {
                return Ok(self.finish_cancelled());
            }
        }

        self.publish(SequenceState::Complete);
        self.running.store(false, Ordering::Release);
        info!(
            "capture session complete with {} photo(s)",
            self.photos.lock().len()
        );
        Ok(SessionOutcome::Completed)
    }

    /// Abort the session mid-wait, back to Idle, discarding partial photos.
    /// No-op when no session is running.
    pub fn cancel(&self) {
        if self.running.load(Ordering::Acquire) {
            self.cancel_requested.store(true, Ordering::Release);
            self.cancel_notify.notify_one();
        }
    }

    /// Clear the finished strip and return to Idle. Accepted only from
    /// Complete; returns whether it applied.
    pub fn reshoot(&self) -> bool {
        if self.state() != SequenceState::Complete {
            debug!("reshoot ignored: sequencer is not in Complete");
            return false;
        }
        self.photos.lock().clear();
        self.publish(SequenceState::Idle);
        true
    }

    /// Wait out one timed step, or return true if cancellation arrived
    /// before or during the wait.
    async fn wait_or_cancel(&self, duration: Duration) -> bool {
        // The flag covers a cancel that landed between waits, when nothing
        // was parked on the Notify yet.
        if self.cancel_requested.load(Ordering::Acquire) {
            return true;
        }
        tokio::select! {
            _ = tokio::time::sleep(duration) => false,
            _ = self.cancel_notify.notified() => true,
        }
    }

    fn finish_cancelled(&self) -> SessionOutcome {
        self.photos.lock().clear();
        self.publish(SequenceState::Idle);
        self.cancel_requested.store(false, Ordering::Release);
        self.running.store(false, Ordering::Release);
        info!("capture session cancelled");
        SessionOutcome::Cancelled
    }

    fn publish(&self, state: SequenceState) {
        debug!("sequence state: {state:?}");
        self.state_tx.send_replace(state);
    }
}
