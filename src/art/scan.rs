//! Card scan discovery (pure, no side effects beyond reading the directory).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Suffix that marks a full card scan.
const FULL_SUFFIX: &str = ".full.jpg";

/// A discovered card scan with its cropped output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardScan {
    pub source: PathBuf,
    pub output_name: String,
}

/// Find `*.full.jpg` scans directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into; full scans live flat in the
/// source directory.
pub fn scan_card_scans(dir: &Path) -> Result<Vec<CardScan>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read `{}`", dir.display()))?;

    let mut scans = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(output_name) = crop_name(name) {
            scans.push(CardScan {
                source: path,
                output_name,
            });
        }
    }

    scans.sort_by(|a, b| a.source.cmp(&b.source));
    Ok(scans)
}

/// Output name for a full scan: `.full` stripped, lowercased.
///
/// `MyCard.full.jpg` -> `mycard.jpg`. Returns `None` for files outside
/// the full-scan naming convention.
pub fn crop_name(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(FULL_SUFFIX)?;
    if stem.is_empty() {
        return None;
    }
    Some(format!("{}.jpg", stem.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_crop_name_strips_suffix_and_lowercases() {
        assert_eq!(crop_name("myCard.full.jpg"), Some("mycard.jpg".to_string()));
        assert_eq!(
            crop_name("Lightning-Bolt.full.jpg"),
            Some("lightning-bolt.jpg".to_string())
        );
    }

    #[test]
    fn test_crop_name_rejects_other_files() {
        assert_eq!(crop_name("mycard.jpg"), None);
        assert_eq!(crop_name("symbol.svg"), None);
        assert_eq!(crop_name("card.full.png"), None);
        assert_eq!(crop_name(".full.jpg"), None);
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Zendikar.full.jpg"), "scan").unwrap();
        fs::write(dir.path().join("Avacyn.full.jpg"), "scan").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a scan").unwrap();
        fs::write(dir.path().join("avacyn.jpg"), "already cropped").unwrap();
        fs::create_dir(dir.path().join("Folder.full.jpg")).unwrap();

        let scans = scan_card_scans(dir.path()).unwrap();

        assert_eq!(scans.len(), 2);
        assert_eq!(scans[0].output_name, "avacyn.jpg");
        assert_eq!(scans[1].output_name, "zendikar.jpg");
        assert!(scans[0].source.ends_with("Avacyn.full.jpg"));
    }

    #[test]
    fn test_scan_missing_dir_errors() {
        let dir = TempDir::new().unwrap();
        assert!(scan_card_scans(&dir.path().join("nope")).is_err());
    }
}
