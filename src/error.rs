//! Error types for sitecheck.
//!
//! Per-URL failures (unreachable hosts, non-2xx statuses, unnormalizable
//! input) are not errors at this level: they are recorded on the
//! `CheckResult` for that URL and the batch continues. This enum covers
//! failures of the tool itself.

/// Error type for batch-check operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    /// CSV export was requested but the session holds no results.
    #[error("no results to export")]
    NoResults,

    /// CSV serialization failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure while writing an export.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for batch-check operations.
pub type Result<T> = std::result::Result<T, Error>;
