//! Single-pass literal replacement.
//!
//! A [`Replacer`] scans its input once, left to right. At each position the
//! first pattern (in table order) that matches is replaced and scanning
//! resumes after the match. Replacement output is never rescanned, so a
//! pattern produced by an earlier substitution stays in the result.

use std::borrow::Cow;

/// Ordered table of `(find, replace)` pairs applied in one scan.
///
/// Patterns must be non-empty.
#[derive(Debug, Clone, Copy)]
pub struct Replacer {
    pairs: &'static [(&'static str, &'static str)],
}

/// Whitespace rewrites applied outside preformatted/code regions.
pub static WHITESPACE: Replacer = Replacer::new(&[
    ("\r", " "),
    ("\n", " "),
    ("\u{0B}", "\u{2028}"),
    ("\u{2029}", "\u{2028}"),
    ("  ", " "),
]);

/// Markdown metacharacter escapes applied to paragraph text.
///
/// Backslash comes first so inserted backslashes are never escaped again.
pub static MARKDOWN_SPECIALS: Replacer = Replacer::new(&[
    ("\\", "\\\\"),
    ("#", "\\#"),
    ("*", "\\*"),
    ("+", "\\+"),
    ("[", "\\["),
    ("]", "\\]"),
    ("^", "\\^"),
    ("_", "\\_"),
    ("~", "\\~"),
    ("`", "\\`"),
]);

impl Replacer {
    /// Build a replacer from an ordered pattern table.
    #[must_use]
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// Apply the table to `text`.
    ///
    /// Borrows the input untouched when nothing matches.
    #[must_use]
    pub fn replace<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut out: Option<String> = None;
        let mut copied = 0;
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            match self.pairs.iter().find(|(find, _)| rest.starts_with(find)) {
                Some((find, replacement)) => {
                    let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 8));
                    buf.push_str(&text[copied..pos]);
                    buf.push_str(replacement);
                    pos += find.len();
                    copied = pos;
                }
                None => pos += rest.chars().next().map_or(1, char::len_utf8),
            }
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&text[copied..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(text),
        }
    }
}
