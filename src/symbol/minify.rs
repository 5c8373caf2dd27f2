//! SVG minification using usvg.
//!
//! Parsing and re-serializing without indentation normalizes the markup
//! and drops everything a renderer does not need.

use anyhow::{Context, Result};

/// Minify one SVG document.
///
/// Fails on markup usvg cannot parse; a malformed symbol aborts the run.
pub fn minify_svg(content: &[u8]) -> Result<Vec<u8>> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(content, &options).context("failed to parse SVG")?;

    let write_options = usvg::WriteOptions {
        indent: usvg::Indent::None,
        ..Default::default()
    };

    Ok(tree.to_string(&write_options).into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMBOL: &str = r##"
        <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32">
            <rect x="4" y="4" width="24" height="24" fill="#bf9b30"/>
        </svg>
    "##;

    #[test]
    fn test_minify_produces_parseable_svg() {
        let minified = minify_svg(SYMBOL.as_bytes()).unwrap();
        assert!(!minified.is_empty());

        // The result must still be a valid SVG document
        assert!(minify_svg(&minified).is_ok());
    }

    #[test]
    fn test_minify_drops_indentation() {
        let minified = minify_svg(SYMBOL.as_bytes()).unwrap();
        let text = String::from_utf8(minified).unwrap();
        assert!(!text.contains("\n    "));
    }

    #[test]
    fn test_minify_rejects_garbage() {
        assert!(minify_svg(b"this is not an svg").is_err());
    }
}
