//! Validated run configuration.
//!
//! CLI arguments are turned into a config struct once at process start.
//! Construction fails with a descriptive [`ConfigError`] instead of
//! surfacing bad input mid-pipeline.

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};

use crate::cli::{CropArgs, SymbolsArgs};
use crate::frame::FrameSize;

/// Configuration for the crop command.
#[derive(Debug, Clone)]
pub struct CropConfig {
    /// Directory holding the full card scans.
    pub src: PathBuf,
    /// Directory the cropped art is written to.
    pub output: PathBuf,
    /// Declared pixel size of every scan in the batch.
    pub scan_size: FrameSize,
}

impl CropConfig {
    pub fn from_args(args: &CropArgs) -> Result<Self, ConfigError> {
        let width = positive(args.width, "width")?;
        let height = positive(args.height, "height")?;

        Ok(Self {
            src: existing_dir(&args.src)?,
            output: args.output.clone(),
            scan_size: FrameSize { width, height },
        })
    }
}

/// Configuration for the symbols command.
#[derive(Debug, Clone)]
pub struct SymbolsConfig {
    /// Directory holding the SVG set symbols.
    pub src: PathBuf,
    /// Directory the minified symbols and archive are written to.
    pub output: PathBuf,
}

impl SymbolsConfig {
    pub fn from_args(args: &SymbolsArgs) -> Result<Self, ConfigError> {
        Ok(Self {
            src: existing_dir(&args.src)?,
            output: args.output.clone(),
        })
    }
}

/// Validate a pixel dimension and widen it for the geometry math.
fn positive(value: u32, flag: &'static str) -> Result<f64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroDimension(flag));
    }
    Ok(f64::from(value))
}

/// Validate that a source path exists and is a directory.
fn existing_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::SourceMissing(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ConfigError::SourceNotADirectory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}
