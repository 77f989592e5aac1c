use serde::Serialize;

use crate::filter::name::FilterName;

/// Visual-transform description for one filter.
///
/// A fixed composition of the classic CSS-style adjustments, applied in the
/// order grayscale → sepia → hue-rotate → saturate → contrast → brightness,
/// then blur. Amounts are fractions (0.0–1.0) for `grayscale`/`sepia`,
/// multipliers for `saturate`/`contrast`/`brightness`, degrees for
/// `hue_rotate_deg`, and pixels for `blur_px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterSpec {
    pub grayscale: f32,
    pub sepia: f32,
    pub hue_rotate_deg: f32,
    pub saturate: f32,
    pub contrast: f32,
    pub brightness: f32,
    pub blur_px: u32,
}

impl FilterSpec {
    /// The no-op transform.
    pub const IDENTITY: FilterSpec = FilterSpec {
        grayscale: 0.0,
        sepia: 0.0,
        hue_rotate_deg: 0.0,
        saturate: 1.0,
        contrast: 1.0,
        brightness: 1.0,
        blur_px: 0,
    };

    /// The one spec for each filter. Total over the enum; both the live
    /// preview and the capture path resolve through this single mapping.
    pub fn for_name(name: FilterName) -> FilterSpec {
        match name {
            FilterName::Nineties => FilterSpec {
                sepia: 0.3,
                hue_rotate_deg: -10.0,
                saturate: 0.8,
                contrast: 1.1,
                brightness: 1.1,
                ..Self::IDENTITY
            },
            FilterName::TwoThousands => FilterSpec {
                sepia: 0.1,
                hue_rotate_deg: 10.0,
                saturate: 1.8,
                contrast: 1.05,
                brightness: 1.1,
                ..Self::IDENTITY
            },
            FilterName::Noir => FilterSpec {
                grayscale: 1.0,
                contrast: 0.8,
                brightness: 1.1,
                ..Self::IDENTITY
            },
            FilterName::Fisheye => FilterSpec {
                brightness: 1.1,
                ..Self::IDENTITY
            },
            FilterName::Rainbow => FilterSpec {
                hue_rotate_deg: 90.0,
                ..Self::IDENTITY
            },
            FilterName::Glitch => FilterSpec {
                contrast: 1.5,
                saturate: 2.0,
                ..Self::IDENTITY
            },
            FilterName::Crosshatch => FilterSpec {
                grayscale: 0.5,
                blur_px: 1,
                ..Self::IDENTITY
            },
        }
    }

    /// Resolve a string identifier, falling back to the identity transform
    /// for anything unrecognised. The enum driving the picker makes the
    /// fallback unreachable today, but the mapping stays total.
    pub fn named(id: &str) -> FilterSpec {
        FilterName::from_str_id(id)
            .map(Self::for_name)
            .unwrap_or(Self::IDENTITY)
    }

    /// Whether this spec leaves pixels untouched.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::IDENTITY
    }
}
