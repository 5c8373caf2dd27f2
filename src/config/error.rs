//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
///
/// All variants are fatal: a run with an invalid configuration aborts
/// before any file is read or written.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`--{0}` must be a positive pixel count")]
    ZeroDimension(&'static str),

    #[error("source directory `{0}` does not exist")]
    SourceMissing(PathBuf),

    #[error("source `{0}` is not a directory")]
    SourceNotADirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ZeroDimension("width");
        assert_eq!(format!("{err}"), "`--width` must be a positive pixel count");

        let err = ConfigError::SourceMissing(PathBuf::from("scans"));
        let display = format!("{err}");
        assert!(display.contains("scans"));
        assert!(display.contains("does not exist"));
    }
}
