//! Result types for URL checks.
//!
//! This module defines the structured per-URL report and the verdict
//! enums for indexability and link-follow status.
//!
//! Both verdicts are heuristic readings of on-page evidence, not
//! statements about actual search-engine index state: they start at
//! `Unknown`, are upgraded only on positive evidence found in fetched
//! content, and default to an optimistic "likely"/"possible" reading when
//! no negative signal is present.

use serde::{Serialize, Serializer};

/// Indexability verdict derived from the meta robots tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indexability {
    /// No determination could be made (fetch failed or not attempted).
    #[default]
    Unknown,
    /// Meta robots content contains `noindex`.
    MetaNoindex,
    /// Meta robots tag present, content does not contain `noindex`.
    PossibleNoNoindex,
    /// Meta robots tag present but its content could not be extracted.
    Possible,
    /// No meta robots tag found at all.
    LikelyNoMetaRobots,
}

impl Indexability {
    /// The verdict as it appears in the report table and CSV.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::MetaNoindex => "no (meta noindex)",
            Self::PossibleNoNoindex => "possible (no meta noindex)",
            Self::Possible => "possible",
            Self::LikelyNoMetaRobots => "likely (no meta robots tag found)",
        }
    }
}

impl std::fmt::Display for Indexability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Indexability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Link-follow verdict derived from meta robots and anchor rel attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FollowStatus {
    /// No determination could be made (fetch failed or not attempted).
    #[default]
    Unknown,
    /// Meta robots content contains `nofollow`.
    MetaNofollow,
    /// At least one anchor carries `rel="nofollow"`.
    AnchorNofollow,
    /// No nofollow signal found anywhere on the page.
    LikelyNoNofollow,
}

impl FollowStatus {
    /// The verdict as it appears in the report table and CSV.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::MetaNofollow => "no (meta nofollow)",
            Self::AnchorNofollow => r#"no (found rel="nofollow" on some anchors)"#,
            Self::LikelyNoNofollow => "likely (no rel=nofollow found)",
        }
    }

    /// Whether this is a definitive "no" verdict.
    ///
    /// A "no" determination is never overwritten by a weaker "likely"
    /// default later in the analysis pass.
    #[must_use]
    pub fn is_no(self) -> bool {
        matches!(self, Self::MetaNofollow | Self::AnchorNofollow)
    }
}

impl std::fmt::Display for FollowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FollowStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Report for a single input line.
///
/// Created fresh for each input, fully populated before being appended to
/// the session's result list, and held only in memory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    /// Canonical absolute URL, or the raw input when normalization failed.
    pub url: String,

    /// True iff the fetch returned a successful HTTP status.
    pub alive: bool,

    /// HTTP status code; `None` when the request never completed or the
    /// input was invalid.
    pub status: Option<u16>,

    /// Indexability verdict.
    pub indexed: Indexability,

    /// Link-follow verdict.
    pub likely_dofollow: FollowStatus,

    /// Append-only diagnostic trail explaining each determination.
    pub notes: Vec<String>,

    /// Present only when the input could not be normalized; short-circuits
    /// all other fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    /// Fresh record for a normalized URL, all verdicts at `Unknown`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Terminal record for input that could not be normalized.
    ///
    /// The error text doubles as the record's single note so the CSV
    /// export (which has no error column) keeps the diagnostic.
    #[must_use]
    pub fn invalid(raw: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            url: raw.into(),
            notes: vec![message.clone()],
            error: Some(message),
            ..Self::default()
        }
    }
}
