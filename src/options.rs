//! Configuration options for tree cleaning.
//!
//! The `Options` struct switches individual cleaning passes on or off and
//! controls how raw input bytes are decoded.

/// Configuration options for tree cleaning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings, which enable every pass.
///
/// # Example
///
/// ```rust
/// use blocko::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     escape_specials: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Merge adjacent identical inline siblings.
    ///
    /// Default: `true`
    pub merge_siblings: bool,

    /// Remove paragraphs with no visible content.
    ///
    /// Default: `true`
    pub remove_empty_paragraphs: bool,

    /// Wrap list items that start with text or inline markup in a paragraph.
    ///
    /// Default: `true`
    pub wrap_bare_list_items: bool,

    /// Rewrite line breaks and collapse double spaces outside `pre`/`code`.
    ///
    /// Default: `true`
    pub normalize_whitespace: bool,

    /// Backslash-escape Markdown metacharacters in paragraph text.
    ///
    /// Default: `true`
    pub escape_specials: bool,

    /// Fail instead of substituting U+FFFD when input bytes are malformed
    /// for their declared encoding.
    ///
    /// Only affects [`crate::clean_bytes`].
    ///
    /// Default: `false`
    pub strict_encoding: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            merge_siblings: true,
            remove_empty_paragraphs: true,
            wrap_bare_list_items: true,
            normalize_whitespace: true,
            escape_specials: true,
            strict_encoding: false,
        }
    }
}

impl Options {
    /// Only the structural passes: merging, empty paragraph removal and
    /// list item wrapping. Text payloads are left untouched.
    #[must_use]
    pub fn structure_only() -> Self {
        Self {
            normalize_whitespace: false,
            escape_specials: false,
            ..Self::default()
        }
    }

    /// Only the text passes: whitespace normalization and escaping.
    /// The tree shape is left untouched.
    #[must_use]
    pub fn text_only() -> Self {
        Self {
            merge_siblings: false,
            remove_empty_paragraphs: false,
            wrap_bare_list_items: false,
            ..Self::default()
        }
    }

    /// Check whether at least one pass is enabled.
    #[must_use]
    pub fn any_pass_enabled(&self) -> bool {
        self.merge_siblings
            || self.remove_empty_paragraphs
            || self.wrap_bare_list_items
            || self.normalize_whitespace
            || self.escape_specials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_every_pass() {
        let opts = Options::default();
        assert!(opts.merge_siblings);
        assert!(opts.remove_empty_paragraphs);
        assert!(opts.wrap_bare_list_items);
        assert!(opts.normalize_whitespace);
        assert!(opts.escape_specials);
        assert!(!opts.strict_encoding);
    }

    #[test]
    fn test_presets_are_disjoint() {
        let structure = Options::structure_only();
        let text = Options::text_only();

        assert!(structure.merge_siblings && !structure.escape_specials);
        assert!(text.escape_specials && !text.merge_siblings);
        assert!(structure.any_pass_enabled());
        assert!(text.any_pass_enabled());
    }

    #[test]
    fn test_all_disabled() {
        let opts = Options {
            normalize_whitespace: false,
            escape_specials: false,
            ..Options::structure_only()
        };
        let opts = Options {
            merge_siblings: false,
            remove_empty_paragraphs: false,
            wrap_bare_list_items: false,
            ..opts
        };
        assert!(!opts.any_pass_enabled());
    }
}
