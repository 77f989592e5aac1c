use chrono::{Datelike, NaiveDate};

use crate::render::still::CapturedPhoto;
use crate::sequencer::state::StripLength;

/// Product label shown in the strip caption.
pub const PRODUCT_LABEL: &str = "dvBooth";

/// One slot in the strip's single-row grid.
#[derive(Debug, PartialEq, Eq)]
pub enum StripCell<'a> {
    /// A captured photo, in capture order.
    Photo(&'a CapturedPhoto),
    /// Empty slot standing in for a photo that was never captured.
    Placeholder,
}

impl StripCell<'_> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Lay out the strip's cells: the captured photos in capture order, padded
/// with placeholders up to the configured length.
pub fn layout_cells(photos: &[CapturedPhoto], length: StripLength) -> Vec<StripCell<'_>> {
    let count = length.count();
    photos
        .iter()
        .take(count)
        .map(StripCell::Photo)
        .chain(std::iter::repeat_with(|| StripCell::Placeholder))
        .take(count)
        .collect()
}

/// The strip caption: product label plus the capture date, day first with
/// the full month name (e.g. `dvBooth • 24 August 2026`).
pub fn caption(date: NaiveDate) -> String {
    format!("{PRODUCT_LABEL} • {} {}", date.day(), date.format("%B %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::dummy::DummySource;
    use crate::filter::FilterName;
    use crate::render::still::render_still;

    fn photos(n: usize) -> Vec<CapturedPhoto> {
        let source = DummySource::with_resolution(16, 12);
        (0..n)
            .map(|_| render_still(&source, FilterName::Fisheye).unwrap())
            .collect()
    }

    #[test]
    fn full_strip_has_no_placeholders() {
        let photos = photos(3);
        let cells = layout_cells(&photos, StripLength::Three);
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(|c| !c.is_placeholder()));
    }

    #[test]
    fn placeholders_fill_missing_indices_after_real_photos() {
        let photos = photos(1);
        let cells = layout_cells(&photos, StripLength::Three);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], StripCell::Photo(&photos[0]));
        assert!(cells[1].is_placeholder());
        assert!(cells[2].is_placeholder());
    }

    #[test]
    fn empty_session_lays_out_all_placeholders() {
        let cells = layout_cells(&[], StripLength::Three);
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(StripCell::is_placeholder));
    }

    #[test]
    fn placeholder_count_matches_the_shortfall() {
        for length in StripLength::CHOICES {
            for k in 0..=length.count() {
                let photos = photos(k);
                let cells = layout_cells(&photos, length);
                let placeholders = cells.iter().filter(|c| c.is_placeholder()).count();
                assert_eq!(placeholders, length.count() - k);
            }
        }
    }

    #[test]
    fn real_photos_keep_capture_order() {
        let photos = photos(2);
        let cells = layout_cells(&photos, StripLength::Three);
        assert_eq!(cells[0], StripCell::Photo(&photos[0]));
        assert_eq!(cells[1], StripCell::Photo(&photos[1]));
    }

    #[test]
    fn caption_spells_out_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(caption(date), "dvBooth • 9 March 2025");
    }

    #[test]
    fn caption_uses_unpadded_day() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(caption(date), "dvBooth • 1 December 2024");
    }
}
