//! Set symbol minification and packaging.

mod archive;
mod minify;
mod scan;

pub use archive::{ArchiveEntry, write_archive};
pub use minify::minify_svg;
pub use scan::scan_symbols;
