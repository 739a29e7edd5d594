//! Tree cleaning passes run before Markdown conversion.
//!
//! # Module Structure
//!
//! - `siblings`: merges adjacent identical inline elements
//! - `paragraphs`: removes paragraphs without visible content
//! - `lists`: wraps bare list item content in a paragraph
//! - `text`: whitespace normalization and Markdown escaping of text nodes
//!
//! The passes run in that order over the whole tree. Structural passes
//! collect their matches before touching the tree; the text passes only
//! rewrite payloads in place.
//!
//! # Usage
//!
//! ```rust
//! use blocko::cleaner;
//! use blocko::dom;
//! use blocko::Options;
//!
//! let doc = dom::parse("<ul><li><b>a</b><b>a</b>  #x</li></ul>");
//! let stats = cleaner::run(&doc.root(), &Options::default());
//!
//! assert_eq!(dom::body_html(&doc), r"<ul><li><p><b>aa</b> \#x</p></li></ul>");
//! assert_eq!(stats.merged_siblings, 1);
//! ```

pub mod lists;
pub mod paragraphs;
pub mod siblings;
pub mod text;

pub use lists::wrap_bare_list_items;
pub use paragraphs::remove_empty_paragraphs;
pub use siblings::merge_siblings;
pub use text::{escape_specials, normalize_whitespace};

use log::debug;

use crate::dom::NodeRef;
use crate::options::Options;
use crate::result::CleanStats;

/// Run the enabled passes over the subtree rooted at `root`.
pub fn run(root: &NodeRef, opts: &Options) -> CleanStats {
    let mut stats = CleanStats::default();
    if !opts.any_pass_enabled() {
        debug!("all cleaning passes disabled");
        return stats;
    }

    if opts.merge_siblings {
        stats.merged_siblings = merge_siblings(root);
        debug!("merged {} inline siblings", stats.merged_siblings);
    }

    if opts.remove_empty_paragraphs {
        stats.removed_paragraphs = remove_empty_paragraphs(root);
        debug!("removed {} empty paragraphs", stats.removed_paragraphs);
    }

    if opts.wrap_bare_list_items {
        stats.wrapped_list_items = wrap_bare_list_items(root);
        debug!("wrapped {} bare list items", stats.wrapped_list_items);
    }

    if opts.normalize_whitespace {
        stats.normalized_text_nodes = normalize_whitespace(root);
        debug!("normalized whitespace in {} text nodes", stats.normalized_text_nodes);
    }

    if opts.escape_specials {
        stats.escaped_text_nodes = escape_specials(root);
        debug!("escaped specials in {} text nodes", stats.escaped_text_nodes);
    }

    stats
}
