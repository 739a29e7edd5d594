//! Wrapping of bare list item content in paragraphs.

use crate::dom::{self, NodeRef};
use crate::tags::{LIST_ITEM, PARAGRAPH};

/// Give every list item that starts with text or inline markup a single
/// `<p>` child holding all of its former content.
///
/// Empty list items are left alone. Returns the number of items wrapped.
pub fn wrap_bare_list_items(root: &NodeRef) -> usize {
    let bare = dom::find_all(root, is_bare_list_item);
    for li in &bare {
        let p = dom::new_element(li, PARAGRAPH);
        dom::adopt_children(&p, li);
        dom::append_child(li, &p);
    }
    bare.len()
}

fn is_bare_list_item(node: &NodeRef) -> bool {
    dom::has_tag(node, LIST_ITEM)
        && node
            .first_child()
            .is_some_and(|child| child.is_text() || dom::is_inline_element(&child))
}
