//! Removal of paragraphs without visible content.

use log::trace;

use crate::dom::{self, NodeRef};
use crate::tags::PARAGRAPH;

/// Remove every `<p>` that [`dom::is_empty`] reports as empty.
///
/// Returns the number of paragraphs removed.
pub fn remove_empty_paragraphs(root: &NodeRef) -> usize {
    let empty = dom::find_all(root, |n| dom::has_tag(n, PARAGRAPH) && dom::is_empty(n));
    for p in &empty {
        trace!("removing empty paragraph {:?}", dom::outer_html(p));
        dom::remove(p);
    }
    empty.len()
}
