use chrono::NaiveDate;
use image::{Rgb, RgbImage};

use crate::error::{BoothError, Result};
use crate::render::encode::decode_jpeg;
use crate::render::still::CapturedPhoto;
use crate::sequencer::state::StripLength;
use crate::strip::layout::{caption, layout_cells, StripCell};

/// Fixed cell size photos are resized into.
pub const CELL_WIDTH: u32 = 480;
pub const CELL_HEIGHT: u32 = 360;
/// Frame margin around and between cells.
pub const CELL_MARGIN: u32 = 16;
/// Band reserved under the photos for the caption.
pub const CAPTION_BAND_HEIGHT: u32 = 56;

const FRAME_COLOUR: Rgb<u8> = Rgb([250, 248, 244]);
const PLACEHOLDER_COLOUR: Rgb<u8> = Rgb([228, 228, 228]);

/// The composed strip artifact: a single row of equal cells, side by side,
/// with the caption band beneath. Glyph rendering of the caption is the
/// presentation layer's job; the artifact carries the exact text and
/// reserves the band for it.
#[derive(Debug, Clone)]
pub struct Strip {
    image: RgbImage,
    caption: String,
}

impl Strip {
    /// The composed pixels.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Caption text, e.g. `dvBooth • 24 August 2026`.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Compose the photos (and placeholders for missing indices) into the strip.
pub fn compose(
    photos: &[CapturedPhoto],
    length: StripLength,
    date: NaiveDate,
) -> Result<Strip> {
    let cells = layout_cells(photos, length);
    let cols = length.count() as u32;
    let width = cols * CELL_WIDTH + (cols + 1) * CELL_MARGIN;
    let height = CELL_HEIGHT + 2 * CELL_MARGIN + CAPTION_BAND_HEIGHT;
    let mut canvas = RgbImage::from_pixel(width, height, FRAME_COLOUR);

    for (i, cell) in cells.iter().enumerate() {
        let x0 = CELL_MARGIN + i as u32 * (CELL_WIDTH + CELL_MARGIN);
        let y0 = CELL_MARGIN;
        match cell {
            StripCell::Photo(photo) => {
                let decoded = decode_jpeg(photo.jpeg())?;
                let resized = resize_to_cell(&decoded)?;
                blit(&mut canvas, &resized, x0, y0);
            }
            StripCell::Placeholder => {
                fill_rect(&mut canvas, x0, y0, CELL_WIDTH, CELL_HEIGHT, PLACEHOLDER_COLOUR);
            }
        }
    }

    Ok(Strip {
        image: canvas,
        caption: caption(date),
    })
}

/// Resize a decoded photo into the fixed cell size.
fn resize_to_cell(src: &RgbImage) -> Result<Vec<u8>> {
    use fast_image_resize as fr;
    use fr::images::Image;

    let src_image =
        Image::from_vec_u8(src.width(), src.height(), src.as_raw().clone(), fr::PixelType::U8x3)
            .map_err(|e| BoothError::Encode(format!("resize source: {e}")))?;
    let mut dst_image = Image::new(CELL_WIDTH, CELL_HEIGHT, fr::PixelType::U8x3);

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, None)
        .map_err(|e| BoothError::Encode(format!("resize: {e}")))?;

    Ok(dst_image.into_vec())
}

/// Copy a cell-sized RGB buffer into the canvas at the given origin.
fn blit(canvas: &mut RgbImage, cell: &[u8], x0: u32, y0: u32) {
    for y in 0..CELL_HEIGHT {
        for x in 0..CELL_WIDTH {
            let idx = ((y * CELL_WIDTH + x) * 3) as usize;
            let px = Rgb([cell[idx], cell[idx + 1], cell[idx + 2]]);
            canvas.put_pixel(x0 + x, y0 + y, px);
        }
    }
}

fn fill_rect(canvas: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, colour: Rgb<u8>) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            canvas.put_pixel(x, y, colour);
        }
    }
}
