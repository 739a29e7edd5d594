//! Tag catalogs used by the cleaning passes.
//!
//! Provides both arrays (for iteration) and `HashSet`s (for O(1) lookup).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Phrasing elements that wrap text without starting a new block.
///
/// Void and replaced elements (`br`, `img`, `input`, ...) are deliberately
/// absent: they carry content of their own, so two identical neighbours must
/// never be merged and a paragraph holding one is not empty.
pub static INLINE_TAGS: [&str; 32] = [
    "a", "abbr", "acronym", "b", "bdi", "bdo", "big", "cite", "code", "data", "del", "dfn",
    "em", "font", "i", "ins", "kbd", "label", "mark", "q", "s", "samp", "small", "span",
    "strike", "strong", "sub", "sup", "time", "tt", "u", "var",
];

/// Elements whose text is preformatted and must keep its whitespace.
pub static CODE_TAGS: [&str; 2] = ["pre", "code"];

/// Paragraph tag name.
pub const PARAGRAPH: &str = "p";

/// List item tag name.
pub const LIST_ITEM: &str = "li";

/// `INLINE_TAGS` as a `HashSet`
pub static INLINE_ELEMENTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INLINE_TAGS.into_iter().collect());

/// Check whether a tag name is an inline element.
#[inline]
#[must_use]
pub fn is_inline(tag: &str) -> bool {
    INLINE_ELEMENTS.contains(tag)
}

/// Check whether a tag name opens a preformatted/code region.
#[inline]
#[must_use]
pub fn is_code(tag: &str) -> bool {
    CODE_TAGS.contains(&tag)
}
