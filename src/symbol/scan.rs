//! Set symbol discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Find `*.svg` files directly inside `dir`, sorted by file name.
pub fn scan_symbols(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read `{}`", dir.display()))?;

    let mut symbols = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some("svg") {
            symbols.push(path);
        }
    }

    symbols.sort();
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_symbols_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ktk.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("bfz.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("readme.md"), "docs").unwrap();
        fs::create_dir(dir.path().join("drafts.svg")).unwrap();

        let symbols = scan_symbols(dir.path()).unwrap();

        assert_eq!(symbols.len(), 2);
        assert!(symbols[0].ends_with("bfz.svg"));
        assert!(symbols[1].ends_with("ktk.svg"));
    }

    #[test]
    fn test_scan_symbols_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(scan_symbols(dir.path()).unwrap().is_empty());
    }
}
