//! # sitecheck
//!
//! Best-effort batch URL auditor. Given a list of URLs, sitecheck fetches
//! each page (optionally through a CORS relay) and applies DOM heuristics
//! to guess whether the page is indexable by search engines and whether
//! its outbound links are likely to pass authority ("dofollow"), producing
//! a structured per-URL report exportable as CSV.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use sitecheck::{BatchSession, Options};
//!
//! # async fn demo() -> sitecheck::Result<()> {
//! let mut session = BatchSession::new(&Options::default())?;
//! let results = session.run(&["example.com", "https://example.org/blog"]).await;
//!
//! for result in results {
//!     println!("{} indexed: {}", result.url, result.indexed);
//! }
//!
//! session.export_csv(std::fs::File::create("results.csv")?)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Accuracy
//!
//! The verdicts are heuristic readings of on-page evidence (meta robots
//! directives, anchor `rel` attributes), not statements of actual
//! search-engine index state: crawler-only headers and index databases
//! are not visible from this vantage point. Missing evidence is read
//! optimistically ("likely"/"possible") by design. Pages requiring
//! authentication or JavaScript rendering are not handled.

mod error;
mod options;
mod report;
mod result;

/// Heuristic inspection of fetched HTML.
pub mod analyzer;

/// DOM operations adapter over dom_query.
pub mod dom;

/// Charset detection and decoding for fetched bodies.
pub mod encoding;

/// CSV serialization of batch results.
pub mod export;

/// Page retrieval with optional relay routing.
pub mod fetcher;

/// Compiled regex patterns for URL repair and content heuristics.
pub mod patterns;

/// Batch session driving the check pipeline.
pub mod runner;

/// URL input normalization and domain extraction.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_RELAY_PREFIX};
pub use result::{CheckResult, FollowStatus, Indexability};
pub use runner::{BatchSession, Progress, SessionState};

/// Check a single raw URL with a one-off session.
///
/// Convenience wrapper for callers that do not need batch state; batch
/// work should reuse one [`BatchSession`] so the HTTP client's connection
/// pool is shared across items.
pub async fn check_url(raw: &str, options: &Options) -> Result<CheckResult> {
    let session = BatchSession::new(options)?;
    Ok(session.check_one(raw).await)
}
