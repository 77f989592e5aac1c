// Export: encode the composed strip and save it with the fixed filename.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{BoothError, Result};
use crate::render::encode::encode_jpeg;
use crate::strip::compose::Strip;

/// Fixed filename the exported strip is saved under.
pub const STRIP_FILENAME: &str = "dvBooth-strip.jpg";

/// JPEG quality for the exported strip.
pub const EXPORT_JPEG_QUALITY: u8 = 90;

/// Encode the strip as JPEG and write it into `dir` atomically (write a
/// `.tmp` sibling, then rename).
///
/// A missing target directory is a visible [`BoothError::ExportTarget`],
/// never a silent no-op.
pub fn export_strip(strip: &Strip, dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(BoothError::ExportTarget(dir.display().to_string()));
    }

    let jpeg = encode_jpeg(
        strip.image().as_raw(),
        strip.width(),
        strip.height(),
        EXPORT_JPEG_QUALITY,
    )?;

    let path = dir.join(STRIP_FILENAME);
    let tmp_path = path.with_extension("jpg.tmp");
    std::fs::write(&tmp_path, &jpeg).map_err(|e| BoothError::ExportWrite(e.to_string()))?;
    std::fs::rename(&tmp_path, &path).map_err(|e| BoothError::ExportWrite(e.to_string()))?;

    info!("exported strip to {}", path.display());
    Ok(path)
}
