//! DOM Operations Adapter
//!
//! Tree utilities over the `dom_query` crate: collection and visiting in
//! document order, nearest-ancestor lookup, child adoption, element creation
//! and the emptiness test used by the paragraph pass.
//!
//! Every traversal here walks the live tree through `NodeRef` links, so none
//! of them may run while the tree is being restructured. Callers that need to
//! restructure collect matches with [`find_all`] first, then mutate.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::tags;

// === Parsing and Serialization ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Inner HTML of the document `<body>`.
///
/// Returns an empty string when the document has no body.
#[must_use]
pub fn body_html(doc: &Document) -> String {
    doc.select("body").inner_html().to_string()
}

/// Outer HTML of a single node.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    node.html()
}

// === Node Information ===

/// Lowercase tag name of an element node, `None` for every other node kind.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Check whether a node is an element with the given tag name.
#[inline]
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|name| &*name == tag)
}

/// Check whether a node is an element listed in [`tags::INLINE_ELEMENTS`].
#[inline]
#[must_use]
pub fn is_inline_element(node: &NodeRef) -> bool {
    tag_name(node).is_some_and(|name| tags::is_inline(&name))
}

/// All attributes as name/value pairs, in source order.
///
/// Returns an empty vector for nodes without attributes.
#[must_use]
pub fn attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Compare attribute lists pair by pair.
///
/// Order matters: `class="a" id="b"` and `id="b" class="a"` are different.
#[must_use]
pub fn same_attributes(a: &NodeRef, b: &NodeRef) -> bool {
    attributes(a) == attributes(b)
}

// === Text Content ===

/// Text payload of a text node (or the concatenated text of an element).
#[inline]
#[must_use]
pub fn text(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Replace the payload of a text node.
#[inline]
pub fn set_text(node: &NodeRef, text: &str) {
    node.set_text(text);
}

// === Traversal ===

/// Visit `root` and every descendant in pre-order.
///
/// The visitor may rewrite text payloads but must not add, move or remove
/// nodes; children are read after their parent has been visited.
pub fn visit_all<'a, F>(root: &NodeRef<'a>, mut visitor: F)
where
    F: FnMut(&NodeRef<'a>),
{
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        visitor(&node);
        let mut child = node.last_child();
        while let Some(c) = child {
            child = c.prev_sibling();
            stack.push(c);
        }
    }
}

/// Collect every node (root included) matching `predicate`, in pre-order.
///
/// The predicate is evaluated once per node against the tree as it is at
/// call time.
#[must_use]
pub fn find_all<'a, F>(root: &NodeRef<'a>, predicate: F) -> Vec<NodeRef<'a>>
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    let mut found = Vec::new();
    visit_all(root, |node| {
        if predicate(node) {
            found.push(*node);
        }
    });
    found
}

/// First node (root included) matching `predicate`, in pre-order.
#[must_use]
pub fn find<'a, F>(root: &NodeRef<'a>, predicate: F) -> Option<NodeRef<'a>>
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if predicate(&node) {
            return Some(node);
        }
        let mut child = node.last_child();
        while let Some(c) = child {
            child = c.prev_sibling();
            stack.push(c);
        }
    }
    None
}

/// Nearest node matching `predicate`, starting at `node` itself and walking
/// up through its ancestors.
#[must_use]
pub fn closest<'a, F>(node: &NodeRef<'a>, predicate: F) -> Option<NodeRef<'a>>
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    let mut current = Some(*node);
    while let Some(n) = current {
        if predicate(&n) {
            return Some(n);
        }
        current = n.parent();
    }
    None
}

// === Tree Manipulation ===

/// Create a detached element in the same tree as `anchor`.
#[inline]
#[must_use]
pub fn new_element<'a>(anchor: &NodeRef<'a>, tag: &str) -> NodeRef<'a> {
    anchor.tree.new_element(tag)
}

/// Move every child of `old_parent` to the end of `new_parent`, keeping
/// their order. `old_parent` is left without children.
pub fn adopt_children(new_parent: &NodeRef, old_parent: &NodeRef) {
    let children: Vec<NodeRef> = old_parent.children().into_iter().collect();
    for child in &children {
        append_child(new_parent, child);
    }
}

/// Append `child` as the last child of `parent`, detaching it first.
pub fn append_child(parent: &NodeRef, child: &NodeRef) {
    child.remove_from_parent();
    parent.append_child(child);
}

/// Detach a node (and its subtree) from its parent.
#[inline]
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

// === Predicates ===

/// Check whether a node would render no visible content.
///
/// A node is empty when no strict descendant is a text node with a
/// non-whitespace character or an element outside the inline table.
/// Comments and other node kinds are ignored.
#[must_use]
pub fn is_empty(node: &NodeRef) -> bool {
    let root = node.id;
    find(node, |n| n.id != root && renders_content(n)).is_none()
}

fn renders_content(node: &NodeRef) -> bool {
    if node.is_text() {
        !node.text().trim().is_empty()
    } else if node.is_element() {
        !is_inline_element(node)
    } else {
        false
    }
}
