//! Symbols command orchestration.
//!
//! Pipeline: validate config -> clean output -> scan -> minify each SVG ->
//! pack the results into a zip, reporting the size saved.

use std::fs;

use anyhow::{Context, Result};

use crate::config::SymbolsConfig;
use crate::log;
use crate::symbol::{ArchiveEntry, minify_svg, scan_symbols, write_archive};
use crate::utils::{clean_dir, human_bytes, plural_count};

use super::args::SymbolsArgs;

/// Archive written alongside the minified symbols.
const ARCHIVE_NAME: &str = "dist.zip";

/// Minify all `*.svg` symbols under `--src` and pack them into a zip.
pub fn run(args: &SymbolsArgs) -> Result<()> {
    crate::logger::set_verbose(args.verbose);
    let config = SymbolsConfig::from_args(args)?;

    clean_dir(&config.output)?;

    let symbols = scan_symbols(&config.src)?;
    if symbols.is_empty() {
        log!("symbols"; "no *.svg files in `{}`", config.src.display());
        return Ok(());
    }

    let mut raw_bytes = 0u64;
    let mut minified_bytes = 0u64;
    let mut entries = Vec::with_capacity(symbols.len());

    for path in &symbols {
        let data =
            fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?;
        let minified = minify_svg(&data)
            .with_context(|| format!("failed to minify `{}`", path.display()))?;

        raw_bytes += data.len() as u64;
        minified_bytes += minified.len() as u64;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .context("non-UTF-8 file name")?
            .to_string();
        fs::write(config.output.join(&name), &minified)?;
        entries.push(ArchiveEntry {
            name,
            data: minified,
        });
    }

    log!(
        "symbols";
        "{} minified: {} -> {}",
        plural_count(entries.len(), "symbol"),
        human_bytes(raw_bytes),
        human_bytes(minified_bytes)
    );

    let archive = config.output.join(ARCHIVE_NAME);
    write_archive(&archive, &entries)?;
    log!("symbols"; "packed into `{}`", archive.display());
    Ok(())
}
