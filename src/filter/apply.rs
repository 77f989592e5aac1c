//! CPU application of a [`FilterSpec`] to packed RGB frames.
//!
//! The colour adjustments compose into a single 3×3 matrix + offset
//! (W3C filter-effects coefficients), so one pass over the pixels covers
//! grayscale, sepia, hue-rotation, saturation, contrast, and brightness.
//! Blur runs afterwards as a separable two-pass box filter.

use crate::error::{BoothError, Result};
use crate::filter::spec::FilterSpec;

/// A linear colour transform: `out = m · rgb + offset`, in 0.0–1.0 space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    m: [[f32; 3]; 3],
    offset: [f32; 3],
}

impl ColorMatrix {
    pub const IDENTITY: ColorMatrix = ColorMatrix {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        offset: [0.0; 3],
    };

    /// Compose: `next` applied after `self`.
    fn then(self, next: ColorMatrix) -> ColorMatrix {
        let mut m = [[0.0f32; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| next.m[i][k] * self.m[k][j]).sum();
            }
        }
        let mut offset = [0.0f32; 3];
        for (i, o) in offset.iter_mut().enumerate() {
            *o = next.offset[i]
                + (0..3).map(|k| next.m[i][k] * self.offset[k]).sum::<f32>();
        }
        ColorMatrix { m, offset }
    }

    fn apply(&self, px: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.m[i][0] * px[0]
                + self.m[i][1] * px[1]
                + self.m[i][2] * px[2]
                + self.offset[i];
        }
        out
    }
}

/// Interpolate between the identity matrix and a target matrix.
fn lerp_matrix(target: [[f32; 3]; 3], amount: f32) -> ColorMatrix {
    let a = amount.clamp(0.0, 1.0);
    let mut m = [[0.0f32; 3]; 3];
    for (i, row) in m.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let id = if i == j { 1.0 } else { 0.0 };
            *cell = id * (1.0 - a) + target[i][j] * a;
        }
    }
    ColorMatrix { m, offset: [0.0; 3] }
}

fn grayscale(amount: f32) -> ColorMatrix {
    const LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];
    lerp_matrix([LUMA, LUMA, LUMA], amount)
}

fn sepia(amount: f32) -> ColorMatrix {
    lerp_matrix(
        [
            [0.393, 0.769, 0.189],
            [0.349, 0.686, 0.168],
            [0.272, 0.534, 0.131],
        ],
        amount,
    )
}

fn saturate(s: f32) -> ColorMatrix {
    ColorMatrix {
        m: [
            [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
            [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
            [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
        ],
        offset: [0.0; 3],
    }
}

fn hue_rotate(degrees: f32) -> ColorMatrix {
    let rad = degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    ColorMatrix {
        m: [
            [
                0.213 + cos * 0.787 - sin * 0.213,
                0.715 - cos * 0.715 - sin * 0.715,
                0.072 - cos * 0.072 + sin * 0.928,
            ],
            [
                0.213 - cos * 0.213 + sin * 0.143,
                0.715 + cos * 0.285 + sin * 0.140,
                0.072 - cos * 0.072 - sin * 0.283,
            ],
            [
                0.213 - cos * 0.213 - sin * 0.787,
                0.715 - cos * 0.715 + sin * 0.715,
                0.072 + cos * 0.928 + sin * 0.072,
            ],
        ],
        offset: [0.0; 3],
    }
}

fn contrast(c: f32) -> ColorMatrix {
    // Slope c around the 0.5 midpoint.
    ColorMatrix {
        m: [[c, 0.0, 0.0], [0.0, c, 0.0], [0.0, 0.0, c]],
        offset: [0.5 * (1.0 - c); 3],
    }
}

fn brightness(b: f32) -> ColorMatrix {
    ColorMatrix {
        m: [[b, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, b]],
        offset: [0.0; 3],
    }
}

/// Build the single composed colour matrix for a spec.
pub fn color_matrix(spec: &FilterSpec) -> ColorMatrix {
    grayscale(spec.grayscale)
        .then(sepia(spec.sepia))
        .then(hue_rotate(spec.hue_rotate_deg))
        .then(saturate(spec.saturate))
        .then(contrast(spec.contrast))
        .then(brightness(spec.brightness))
}

/// Apply a spec's full transform to a packed RGB buffer in place.
///
/// This is the one code path shared by live preview and capture; both sides
/// resolving through it is what keeps the preview and the captured still
/// visually consistent.
pub fn apply_spec(spec: &FilterSpec, data: &mut [u8], width: u32, height: u32) -> Result<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(3))
        .ok_or_else(|| BoothError::InvalidFrame("buffer size overflow".to_string()))?;
    if data.len() != expected {
        return Err(BoothError::InvalidFrame(format!(
            "apply_spec expects {expected} bytes for {width}x{height} RGB, got {}",
            data.len()
        )));
    }

    // Identity check on the FilterSpec rather than the composed matrix;
    // float composition of the identity pieces does not reproduce the
    // constant bit-for-bit.
    let colour_part = FilterSpec {
        blur_px: 0,
        ..*spec
    };
    if !colour_part.is_identity() {
        let matrix = color_matrix(spec);
        for px in data.chunks_exact_mut(3) {
            let rgb = [
                f32::from(px[0]) / 255.0,
                f32::from(px[1]) / 255.0,
                f32::from(px[2]) / 255.0,
            ];
            let out = matrix.apply(rgb);
            for (dst, v) in px.iter_mut().zip(out) {
                *dst = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
        }
    }

    if spec.blur_px > 0 {
        box_blur(data, width, height, spec.blur_px);
    }

    Ok(())
}

/// Separable box blur with edge replication, horizontal then vertical pass.
fn box_blur(data: &mut [u8], width: u32, height: u32, radius: u32) {
    if width == 0 || height == 0 {
        return;
    }
    let mut tmp = vec![0u8; data.len()];
    blur_pass(data, &mut tmp, width, height, radius, true);
    blur_pass(&tmp, data, width, height, radius, false);
}

fn blur_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, radius: u32, horizontal: bool) {
    let w = width as i64;
    let h = height as i64;
    let r = i64::from(radius);
    let kernel = 2 * r + 1;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u32; 3];
            for d in -r..=r {
                let (sx, sy) = if horizontal {
                    ((x + d).clamp(0, w - 1), y)
                } else {
                    (x, (y + d).clamp(0, h - 1))
                };
                let idx = ((sy * w + sx) * 3) as usize;
                for (a, &v) in acc.iter_mut().zip(&src[idx..idx + 3]) {
                    *a += u32::from(v);
                }
            }
            let idx = ((y * w + x) * 3) as usize;
            for (dst_v, a) in dst[idx..idx + 3].iter_mut().zip(acc) {
                *dst_v = (a / kernel as u32) as u8;
            }
        }
    }
}
