use serde::Serialize;

/// Identifies one of the booth's cosmetic visual styles.
///
/// Closed set, known at startup; the picker UI offers exactly these seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum FilterName {
    /// The picker's initial selection.
    #[default]
    #[serde(rename = "90s")]
    Nineties,
    #[serde(rename = "2000s")]
    TwoThousands,
    #[serde(rename = "noir")]
    Noir,
    #[serde(rename = "fisheye")]
    Fisheye,
    #[serde(rename = "rainbow")]
    Rainbow,
    #[serde(rename = "glitch")]
    Glitch,
    #[serde(rename = "crosshatch")]
    Crosshatch,
}

impl FilterName {
    /// Every filter, in picker order.
    pub const ALL: [FilterName; 7] = [
        Self::Nineties,
        Self::TwoThousands,
        Self::Noir,
        Self::Fisheye,
        Self::Rainbow,
        Self::Glitch,
        Self::Crosshatch,
    ];

    /// Human-readable display name, as shown on the picker buttons.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Nineties => "90s",
            Self::TwoThousands => "2000s",
            Self::Noir => "Noir",
            Self::Fisheye => "Fisheye",
            Self::Rainbow => "Rainbow",
            Self::Glitch => "Glitch",
            Self::Crosshatch => "Crosshatch",
        }
    }

    /// Stable lowercase string identifier for serialisation.
    pub fn as_id_str(self) -> &'static str {
        match self {
            Self::Nineties => "90s",
            Self::TwoThousands => "2000s",
            Self::Noir => "noir",
            Self::Fisheye => "fisheye",
            Self::Rainbow => "rainbow",
            Self::Glitch => "glitch",
            Self::Crosshatch => "crosshatch",
        }
    }

    /// Parse a string identifier into a FilterName.
    ///
    /// Returns `None` if the string does not match any known filter.
    pub fn from_str_id(s: &str) -> Option<Self> {
        match s {
            "90s" => Some(Self::Nineties),
            "2000s" => Some(Self::TwoThousands),
            "noir" => Some(Self::Noir),
            "fisheye" => Some(Self::Fisheye),
            "rainbow" => Some(Self::Rainbow),
            "glitch" => Some(Self::Glitch),
            "crosshatch" => Some(Self::Crosshatch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_seven_filters() {
        assert_eq!(FilterName::ALL.len(), 7);
    }

    #[test]
    fn display_names_match_picker_labels() {
        assert_eq!(FilterName::Nineties.display_name(), "90s");
        assert_eq!(FilterName::TwoThousands.display_name(), "2000s");
        assert_eq!(FilterName::Noir.display_name(), "Noir");
        assert_eq!(FilterName::Crosshatch.display_name(), "Crosshatch");
    }

    #[test]
    fn from_str_id_roundtrips_with_as_id_str() {
        for filter in FilterName::ALL {
            let id = filter.as_id_str();
            assert_eq!(
                FilterName::from_str_id(id),
                Some(filter),
                "roundtrip failed for {id}"
            );
        }
    }

    #[test]
    fn from_str_id_returns_none_for_unknown() {
        assert_eq!(FilterName::from_str_id("sepia"), None);
        assert_eq!(FilterName::from_str_id(""), None);
        assert_eq!(FilterName::from_str_id("Noir"), None);
    }

    #[test]
    fn default_filter_is_90s() {
        assert_eq!(FilterName::default(), FilterName::Nineties);
    }

    #[test]
    fn serialises_to_stable_ids() {
        let json = serde_json::to_value(FilterName::Nineties).unwrap();
        assert_eq!(json, "90s");
        let json = serde_json::to_value(FilterName::Crosshatch).unwrap();
        assert_eq!(json, "crosshatch");
    }
}
