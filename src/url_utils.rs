//! URL input normalization and domain extraction.
//!
//! Batch input lines are URL-ish free text: they may lack a scheme, carry
//! stray whitespace, or not be URLs at all. Normalization repairs what it
//! can and signals the rest, never panicking past this boundary.

use url::Url;

use crate::patterns::HTTP_SCHEME;

/// Validate and repair a raw input line into a well-formed absolute URL.
///
/// Inputs without an `http://`/`https://` prefix (case-insensitive) get
/// `http://` prepended, then the result is strictly parsed. Returns `None`
/// when the repaired string still does not parse or has no host; the
/// caller turns that into an error record and skips fetch and analysis.
#[must_use]
pub fn normalize_input(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let candidate = if HTTP_SCHEME.is_match(raw) {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    let url = Url::parse(&candidate).ok()?;
    if url.host_str().is_none() {
        return None;
    }

    Some(url)
}

/// Extract the display domain of a URL string: the hostname with a leading
/// `www.` label stripped.
///
/// Best-effort; returns an empty string on any parse failure.
#[must_use]
pub fn domain_of(url_str: &str) -> String {
    let Ok(url) = Url::parse(url_str.trim()) else {
        return String::new();
    };

    let Some(host) = url.host_str() else {
        return String::new();
    };

    host.strip_prefix("www.").unwrap_or(host).to_string()
}
