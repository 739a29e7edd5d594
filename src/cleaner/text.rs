//! Text payload rewrites: whitespace normalization and Markdown escaping.
//!
//! The two passes are scoped differently. Whitespace is normalized in every
//! text node that is not inside `pre` or `code`; escaping applies to every
//! text node inside a `p`, including `code` spans within that paragraph.

use std::borrow::Cow;

use crate::dom::{self, NodeRef};
use crate::replace::{Replacer, MARKDOWN_SPECIALS, WHITESPACE};
use crate::tags::{self, PARAGRAPH};

/// Normalize line breaks, separators and double spaces in text outside
/// preformatted regions.
///
/// Returns the number of text nodes changed.
pub fn normalize_whitespace(root: &NodeRef) -> usize {
    rewrite_text_nodes(root, &WHITESPACE, |n| {
        dom::closest(n, is_code_block).is_none()
    })
}

/// Backslash-escape Markdown metacharacters in text inside paragraphs.
///
/// Returns the number of text nodes changed.
pub fn escape_specials(root: &NodeRef) -> usize {
    rewrite_text_nodes(root, &MARKDOWN_SPECIALS, |n| {
        dom::closest(n, |a| dom::has_tag(a, PARAGRAPH)).is_some()
    })
}

fn is_code_block(node: &NodeRef) -> bool {
    dom::tag_name(node).is_some_and(|name| tags::is_code(&name))
}

fn rewrite_text_nodes<F>(root: &NodeRef, replacer: &Replacer, in_scope: F) -> usize
where
    F: Fn(&NodeRef) -> bool,
{
    let mut changed = 0;
    dom::visit_all(root, |n| {
        if !n.is_text() || !in_scope(n) {
            return;
        }
        let text = dom::text(n);
        if let Cow::Owned(rewritten) = replacer.replace(&text) {
            dom::set_text(n, &rewritten);
            changed += 1;
        }
    });
    changed
}
