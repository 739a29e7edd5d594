//! # blocko
//!
//! Normalizes a parsed HTML tree so it converts cleanly to Markdown.
//!
//! Five passes run in order over the tree:
//!
//! 1. adjacent identical inline elements are merged (`<b>a</b><b>b</b>` → `<b>ab</b>`)
//! 2. paragraphs without visible content are removed
//! 3. list items starting with text or inline markup get a wrapping `<p>`
//! 4. line breaks and double spaces are normalized outside `pre`/`code`
//! 5. Markdown metacharacters are backslash-escaped inside paragraphs
//!
//! ## Quick Start
//!
//! ```rust
//! let html = "<ul><li><b>a</b><b>a</b>  #x</li></ul>";
//! assert_eq!(blocko::clean_html(html), r"<ul><li><p><b>aa</b> \#x</p></li></ul>");
//! ```
//!
//! Working on a document you already hold:
//!
//! ```rust
//! use blocko::dom;
//!
//! let doc = dom::parse("<p></p><p>*x*</p>");
//! blocko::clean(&doc);
//! assert_eq!(dom::body_html(&doc), r"<p>\*x\*</p>");
//! ```

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Tag catalogs (inline elements, code regions).
pub mod tags;

/// Single-pass literal replacement tables.
pub mod replace;

/// The cleaning passes and the pipeline that runs them.
pub mod cleaner;

/// Character encoding detection and decoding of raw input.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::CleanStats;

use dom::{Document, NodeRef};
use log::debug;

/// Cleans a document in place with every pass enabled.
pub fn clean(doc: &Document) {
    clean_with_options(doc, &Options::default());
}

/// Cleans a document in place, running only the passes enabled in `options`.
///
/// Returns per-pass counts of the nodes touched.
pub fn clean_with_options(doc: &Document, options: &Options) -> CleanStats {
    cleaner::run(&doc.root(), options)
}

/// Cleans the subtree rooted at `root` with every pass enabled.
///
/// Text outside the subtree is never touched, but ancestors above `root`
/// still count when deciding whether text sits inside `pre`, `code` or `p`.
pub fn clean_node(root: &NodeRef) {
    cleaner::run(root, &Options::default());
}

/// Parses an HTML string, cleans it and returns the inner HTML of `<body>`.
///
/// # Example
///
/// ```rust
/// assert_eq!(blocko::clean_html("<p>a\nb</p><p> </p>"), "<p>a b</p>");
/// ```
#[must_use]
pub fn clean_html(html: &str) -> String {
    clean_html_with_options(html, &Options::default()).0
}

/// Parses an HTML string, cleans it with `options` and returns the inner
/// HTML of `<body>` together with the cleaning statistics.
#[must_use]
pub fn clean_html_with_options(html: &str, options: &Options) -> (String, CleanStats) {
    debug!("cleaning HTML input ({} bytes)", html.len());
    let doc = dom::parse(html);
    let stats = clean_with_options(&doc, options);
    debug!("cleaning done, {} nodes touched", stats.total());
    (dom::body_html(&doc), stats)
}

/// Decodes raw HTML bytes, then cleans them like [`clean_html_with_options`].
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for zero-length input and
/// [`Error::EncodingError`] when the bytes cannot be decoded (see
/// [`encoding::decode`] and [`Options::strict_encoding`]).
pub fn clean_bytes(html: &[u8], options: &Options) -> Result<(String, CleanStats)> {
    if html.is_empty() {
        return Err(Error::EmptyInput);
    }
    let text = encoding::decode(html, options.strict_encoding)?;
    Ok(clean_html_with_options(&text, options))
}
