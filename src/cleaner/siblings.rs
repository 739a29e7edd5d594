//! Merging of adjacent identical inline siblings.
//!
//! `<b>x</b><b>y</b>` becomes `<b>xy</b>` when both elements carry the same
//! tag and the same attribute list (compared in source order). Only immediate
//! siblings qualify: any node in between, whitespace text included, keeps
//! them apart.

use log::trace;

use crate::dom::{self, NodeRef};

/// Merge every run of identical inline siblings into its first element.
///
/// Returns the number of siblings absorbed.
pub fn merge_siblings(root: &NodeRef) -> usize {
    // find all matches first
    let matches = dom::find_all(root, |n| {
        n.next_sibling()
            .is_some_and(|brother| is_mergeable_pair(n, &brother))
    });

    // then mutate, last match first: in a run of three or more the right-hand
    // merges are done before their left neighbour absorbs them
    let mut merged = 0;
    for n in matches.iter().rev() {
        let Some(brother) = n.next_sibling() else {
            continue;
        };
        trace!(
            "merging <{}> sibling into its left neighbour",
            dom::tag_name(n).unwrap_or_default()
        );
        dom::adopt_children(n, &brother);
        dom::remove(&brother);
        merged += 1;
    }
    merged
}

fn is_mergeable_pair(n: &NodeRef, brother: &NodeRef) -> bool {
    dom::is_inline_element(n)
        && dom::tag_name(n) == dom::tag_name(brother)
        && dom::same_attributes(n, brother)
}
