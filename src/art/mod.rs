//! Card art extraction.

mod process;
mod scan;

pub use process::crop_scan;
pub use scan::{CardScan, crop_name, scan_card_scans};
