//! Character encoding detection and decoding of raw HTML input.
//!
//! Detection order: byte order mark, then a charset declared in a `<meta>`
//! tag within the first 1024 bytes, then UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use log::warn;
use regex::Regex;

use crate::error::{Error, Result};

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Matches both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Charset label declared in the document head, if any.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect the encoding of HTML bytes.
///
/// # Errors
///
/// Returns [`Error::EncodingError`] when the document declares a charset
/// label that is not a known encoding.
pub fn detect_encoding(html: &[u8]) -> Result<&'static Encoding> {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return Ok(encoding);
    }

    match declared_charset(html) {
        Some(label) => Encoding::for_label(label.as_bytes())
            .ok_or_else(|| Error::EncodingError(format!("unknown charset label {label:?}"))),
        None => Ok(UTF_8),
    }
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Malformed sequences are replaced with U+FFFD unless `strict` is set.
///
/// # Errors
///
/// Returns [`Error::EncodingError`] for an unknown declared charset, or for
/// malformed input when `strict` is set.
///
/// # Examples
///
/// ```
/// use blocko::encoding::decode;
///
/// let html = b"<p>Caf\xE9</p><meta charset=\"windows-1252\">";
/// assert_eq!(decode(html, false)?, "<p>Café</p><meta charset=\"windows-1252\">");
/// # Ok::<(), blocko::Error>(())
/// ```
pub fn decode(html: &[u8], strict: bool) -> Result<String> {
    let encoding = detect_encoding(html)?;
    let (decoded, used, had_errors) = encoding.decode(html);

    if had_errors {
        if strict {
            return Err(Error::EncodingError(format!(
                "input is not valid {}",
                used.name()
            )));
        }
        warn!("malformed {} input, invalid sequences replaced", used.name());
    }

    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_defaults_to_utf8() {
        let html = b"<html><body>Test</body></html>";
        assert_eq!(detect_encoding(html).ok(), Some(UTF_8));
    }

    #[test]
    fn detect_from_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        let encoding = detect_encoding(html).map(Encoding::name).ok();
        assert_eq!(encoding, Some("windows-1252"));
    }

    #[test]
    fn detect_from_content_type() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        let encoding = detect_encoding(html).map(Encoding::name).ok();
        assert_eq!(encoding, Some("windows-1252"));
    }

    #[test]
    fn detect_bom_wins_over_meta() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&html).ok(), Some(UTF_8));
    }

    #[test]
    fn unknown_label_is_an_error() {
        let html = br#"<meta charset="x-no-such-thing">"#;
        assert!(matches!(detect_encoding(html), Err(Error::EncodingError(_))));
    }

    #[test]
    fn declared_charset_variants() {
        assert_eq!(declared_charset(b"<META CHARSET=\"UTF-8\">").as_deref(), Some("UTF-8"));
        assert_eq!(declared_charset(b"<meta charset=utf-8>").as_deref(), Some("utf-8"));
        assert_eq!(declared_charset(b"<p>no meta</p>"), None);
    }

    #[test]
    fn decode_windows1252() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93Hi\x94</p>";
        let decoded = decode(html, false).unwrap_or_default();
        assert!(decoded.contains("\u{201C}Hi\u{201D}"));
    }

    #[test]
    fn decode_lossy_and_strict() {
        let html = b"<p>Test \xFF\xFE Invalid</p>";

        let lossy = decode(html, false).unwrap_or_default();
        assert!(lossy.contains('\u{FFFD}'));
        assert!(lossy.contains("Invalid"));

        assert!(matches!(decode(html, true), Err(Error::EncodingError(_))));
    }
}
