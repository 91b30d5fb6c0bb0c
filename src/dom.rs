//! DOM operations adapter.
//!
//! Provides the small set of document operations the analyzer needs on
//! top of the `dom_query` crate. The analyzer depends only on this
//! surface, so unit tests drive it with synthetic documents built via
//! `Document::from(html)`.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril so callers can hold zero-copy text handles
pub use tendril::StrTendril;

/// Parse an HTML string into a navigable document.
///
/// The underlying parser is error-recovering: malformed markup yields a
/// best-effort tree rather than a failure.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get an attribute value from the first node of a selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of a selection and its descendants.
///
/// Returns `StrTendril` for zero-copy passing; use `.to_string()` only
/// when owned storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Whether the selection matched at least one node.
#[inline]
#[must_use]
pub fn exists(sel: &Selection) -> bool {
    !sel.nodes().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_attribute() {
        let doc = parse(r#"<a href="/x" rel="nofollow">link</a>"#);
        let sel = doc.select("a");
        assert_eq!(get_attribute(&sel, "rel"), Some("nofollow".to_string()));
        assert_eq!(get_attribute(&sel, "title"), None);
    }

    #[test]
    fn test_text_content() {
        let doc = parse("<body><p>Hello</p><p>World</p></body>");
        let text = text_content(&doc.select("body"));
        assert!(text.contains("Hello"));
        assert!(text.contains("World"));
    }

    #[test]
    fn test_exists() {
        let doc = parse("<p>x</p>");
        assert!(exists(&doc.select("p")));
        assert!(!exists(&doc.select("table")));
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let doc = parse("<a href='x' <p>broken<");
        // Error recovery: we still get a queryable tree
        assert!(exists(&doc.select("html")));
    }
}
