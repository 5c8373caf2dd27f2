//! Zip packaging for minified symbols.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// A file to pack into the archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// Write `entries` to a zip archive at `path`, in the given order.
///
/// Entries are stored under their bare file names.
pub fn write_archive(path: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create `{}`", path.display()))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        zip.start_file(entry.name.as_str(), options)?;
        zip.write_all(&entry.data)?;
    }

    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    #[test]
    fn test_write_archive_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dist.zip");

        let entries = vec![
            ArchiveEntry {
                name: "bfz.svg".to_string(),
                data: b"<svg id=\"bfz\"/>".to_vec(),
            },
            ArchiveEntry {
                name: "ktk.svg".to_string(),
                data: b"<svg id=\"ktk\"/>".to_vec(),
            },
        ];
        write_archive(&path, &entries).unwrap();

        let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 2);

        let mut contents = String::new();
        archive
            .by_name("bfz.svg")
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "<svg id=\"bfz\"/>");
    }

    #[test]
    fn test_write_archive_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dist.zip");

        write_archive(&path, &[]).unwrap();

        let archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
