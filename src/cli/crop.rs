//! Crop command orchestration.
//!
//! Pipeline: validate config -> clean output -> scan -> derive art box ->
//! crop the batch in parallel.

use anyhow::Result;
use rayon::prelude::*;

use crate::art::{crop_scan, scan_card_scans};
use crate::config::CropConfig;
use crate::frame::art_box;
use crate::logger::ProgressLine;
use crate::utils::{clean_dir, plural_count};
use crate::{debug, log};

use super::args::CropArgs;

/// Crop all `*.full.jpg` scans under `--src` into the output directory.
pub fn run(args: &CropArgs) -> Result<()> {
    crate::logger::set_verbose(args.verbose);
    let config = CropConfig::from_args(args)?;

    clean_dir(&config.output)?;

    let scans = scan_card_scans(&config.src)?;
    if scans.is_empty() {
        log!("crop"; "no *.full.jpg scans in `{}`", config.src.display());
        return Ok(());
    }

    // One art box per run: the geometry depends on the declared scan size,
    // not on the individual images.
    let art = art_box(config.scan_size).to_pixels();
    debug!("crop"; "art box for {}x{} scans: {:?}", args.width, args.height, art);

    let progress = ProgressLine::new("crop", "cards", scans.len());
    scans.par_iter().try_for_each(|scan| -> Result<()> {
        crop_scan(scan, art, &config.output)?;
        progress.inc();
        Ok(())
    })?;
    progress.finish();

    log!(
        "crop";
        "{} written to `{}`",
        plural_count(scans.len(), "crop"),
        config.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(src: PathBuf, output: PathBuf, width: u32, height: u32) -> CropArgs {
        CropArgs {
            src,
            width,
            height,
            output,
            verbose: false,
        }
    }

    #[test]
    fn test_invalid_dimensions_abort_before_any_work() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("scans");
        fs::create_dir_all(&src).unwrap();
        let output = dir.path().join("dist");

        let result = run(&args(src, output.clone(), 0, 445));

        assert!(result.is_err());
        // Aborted before the output directory was touched
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_src_aborts_before_any_work() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("dist");

        let result = run(&args(dir.path().join("nope"), output.clone(), 312, 445));

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_crop_batch_end_to_end() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("scans");
        fs::create_dir_all(&src).unwrap();

        let scan = image::RgbImage::from_pixel(312, 445, image::Rgb([60, 60, 60]));
        scan.save(src.join("Avacyn.full.jpg")).unwrap();
        scan.save(src.join("Zendikar.full.jpg")).unwrap();
        fs::write(src.join("notes.txt"), "ignored").unwrap();

        let output = dir.path().join("dist");
        run(&args(src, output.clone(), 312, 445)).unwrap();

        let avacyn = image::open(output.join("avacyn.jpg")).unwrap();
        assert_eq!((avacyn.width(), avacyn.height()), (273, 198));
        assert!(output.join("zendikar.jpg").exists());
        assert!(!output.join("notes.txt").exists());
    }
}
