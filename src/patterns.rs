//! Compiled regex patterns for URL repair and content heuristics.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches inputs that already carry an http(s) scheme prefix.
///
/// Inputs without one get `http://` prepended before strict parsing,
/// so bare `example.com/page` lines are accepted.
pub static HTTP_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("HTTP_SCHEME regex"));

/// Matches guest-post solicitation language in page text.
///
/// Purely informational: pages soliciting guest contributions are the
/// usual targets of this audit, so a match is worth a note, but it never
/// affects the indexability or follow verdicts.
pub static SOLICITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(write for us|submit a guest post|guest post)").expect("SOLICITATION regex")
});
