//! Cleaning statistics.
//!
//! Every pass reports how many nodes it touched; the pipeline collects those
//! counts into a [`CleanStats`].

use serde::{Deserialize, Serialize};

/// Per-pass counts from one cleaning run.
///
/// Text pass counts only include nodes whose payload actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanStats {
    /// Siblings absorbed into their left-hand neighbour.
    pub merged_siblings: usize,

    /// Empty paragraphs removed from the tree.
    pub removed_paragraphs: usize,

    /// List items given a wrapping paragraph.
    pub wrapped_list_items: usize,

    /// Text nodes rewritten by whitespace normalization.
    pub normalized_text_nodes: usize,

    /// Text nodes rewritten by Markdown escaping.
    pub escaped_text_nodes: usize,
}

impl CleanStats {
    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.merged_siblings
            + self.removed_paragraphs
            + self.wrapped_list_items
            + self.normalized_text_nodes
            + self.escaped_text_nodes
    }

    /// Check whether the run left the tree untouched.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let stats = CleanStats {
            merged_siblings: 2,
            removed_paragraphs: 1,
            wrapped_list_items: 3,
            normalized_text_nodes: 0,
            escaped_text_nodes: 4,
        };
        assert_eq!(stats.total(), 10);
        assert!(!stats.is_unchanged());
        assert!(CleanStats::default().is_unchanged());
    }

    #[test]
    fn test_serializes_field_names() {
        let stats = CleanStats {
            merged_siblings: 1,
            ..CleanStats::default()
        };
        let json = serde_json::to_string(&stats).unwrap_or_default();
        assert!(json.contains("\"merged_siblings\":1"));
        assert!(json.contains("\"escaped_text_nodes\":0"));
    }
}
