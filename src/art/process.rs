//! Card art cropping with side effects (decode, crop, encode).

use std::path::Path;

use anyhow::{Context, Result};

use crate::frame::PixelBox;

use super::scan::CardScan;

/// Crop one scan to `art` and write it under the scan's output name.
///
/// The art box is intersected with the decoded image before cropping, so
/// a scan smaller than the declared batch size yields a shrunken crop
/// instead of an out-of-bounds read.
pub fn crop_scan(scan: &CardScan, art: PixelBox, output_dir: &Path) -> Result<()> {
    let img = image::open(&scan.source)
        .with_context(|| format!("failed to decode `{}`", scan.source.display()))?;

    let rect = art.clamped(img.width(), img.height());
    let cropped = img.crop_imm(rect.x, rect.y, rect.width, rect.height);

    let output = output_dir.join(&scan.output_name);
    cropped
        .save(&output)
        .with_context(|| format!("failed to write `{}`", output.display()))?;
    Ok(())
}
