//! Character set detection and decoding for fetched page bodies.
//!
//! Pages audited by this tool are not reliably UTF-8. The charset is
//! taken from the HTTP Content-Type header when the server declares one,
//! falling back to the document's own meta declaration, then to UTF-8.
//! Decoding is always lossy: invalid sequences become � rather than
//! failing the check for that URL.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `charset=...` inside a Content-Type header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("HEADER_CHARSET_RE regex")
});

/// Match `<meta charset="...">` tag.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET_RE regex")
});

/// Detect the encoding of a fetched body.
///
/// Precedence: Content-Type header charset, then `<meta charset>` /
/// `http-equiv` declaration in the first 1024 bytes, then UTF-8.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(header) = content_type {
        if let Some(encoding) = charset_from(header, &HEADER_CHARSET_RE) {
            return encoding;
        }
    }

    // Only the document head is examined; charset declarations are
    // required to appear early anyway.
    let head = &body[..body.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(encoding) = charset_from(&head_str, &META_CHARSET_RE) {
        return encoding;
    }

    UTF_8
}

fn charset_from(text: &str, pattern: &Regex) -> Option<&'static Encoding> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Decode a fetched body to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use sitecheck::encoding::decode_body;
///
/// let body = b"<html><body>Hello</body></html>";
/// assert!(decode_body(body, Some("text/html; charset=utf-8")).contains("Hello"));
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}
