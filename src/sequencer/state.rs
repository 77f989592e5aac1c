use serde::Serialize;

/// Countdown labels shown before each capture, in display order.
///
/// Each label is held for one full label duration; the capture fires after
/// "Smile!" has run its course.
pub const COUNTDOWN_LABELS: [&str; 4] = ["3..", "2..", "1..", "Smile!"];

/// The sequencer's single UI-observable state.
///
/// Exactly one instance exists, owned by the sequencer and published to
/// observers as a read-only snapshot through a watch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SequenceState {
    /// Nothing in progress; configuration may change.
    Idle,
    /// A countdown label is on screen for the given photo.
    Counting {
        photo_index: usize,
        label: &'static str,
    },
    /// The still for the given photo is being requested.
    Capturing { photo_index: usize },
    /// Pacing gap after a capture, no countdown visible.
    InterPhotoPause { photo_index: usize },
    /// The session finished; the strip is ready to view or export.
    Complete,
}

/// How many photos one session captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(into = "u8")]
pub enum StripLength {
    One,
    Two,
    /// The booth's initial selection.
    #[default]
    Three,
}

impl StripLength {
    /// Every selectable strip length, in picker order.
    pub const CHOICES: [StripLength; 3] = [Self::One, Self::Two, Self::Three];

    /// The desired photo count as a number.
    pub fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Parse a photo count. Returns `None` outside 1..=3.
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

impl From<StripLength> for u8 {
    fn from(length: StripLength) -> Self {
        length.count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_ends_with_smile() {
        assert_eq!(COUNTDOWN_LABELS.len(), 4);
        assert_eq!(COUNTDOWN_LABELS[0], "3..");
        assert_eq!(COUNTDOWN_LABELS[3], "Smile!");
    }

    #[test]
    fn state_serialises_to_tagged_json() {
        let state = SequenceState::Counting {
            photo_index: 1,
            label: "2..",
        };
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["type"], "counting");
        assert_eq!(json["photo_index"], 1);
        assert_eq!(json["label"], "2..");

        let json = serde_json::to_value(SequenceState::Complete).unwrap();
        assert_eq!(json["type"], "complete");
    }

    #[test]
    fn strip_length_counts() {
        assert_eq!(StripLength::One.count(), 1);
        assert_eq!(StripLength::Two.count(), 2);
        assert_eq!(StripLength::Three.count(), 3);
    }

    #[test]
    fn strip_length_from_count_roundtrips() {
        for length in StripLength::CHOICES {
            assert_eq!(StripLength::from_count(length.count()), Some(length));
        }
    }

    #[test]
    fn strip_length_rejects_out_of_range_counts() {
        assert_eq!(StripLength::from_count(0), None);
        assert_eq!(StripLength::from_count(4), None);
    }

    #[test]
    fn strip_length_defaults_to_three() {
        assert_eq!(StripLength::default(), StripLength::Three);
    }

    #[test]
    fn strip_length_serialises_as_number() {
        let json = serde_json::to_value(StripLength::Two).unwrap();
        assert_eq!(json, 2);
    }
}
