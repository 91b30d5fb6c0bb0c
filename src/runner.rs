//! Batch driver over the normalize -> fetch -> analyze -> report pipeline.
//!
//! A `BatchSession` owns the HTTP client, the in-memory results list, and
//! the session state; nothing else mutates them. URLs are processed
//! strictly in input order, one at a time. No failure on one URL aborts
//! the batch: invalid input becomes an error record, unreachable hosts
//! become degraded records, and the final results length always equals
//! the number of non-blank input lines.

use std::io::Write;

use tracing::info;

use crate::error::{Error, Result};
use crate::export;
use crate::fetcher::Fetcher;
use crate::options::Options;
use crate::report;
use crate::result::CheckResult;
use crate::url_utils;

/// Lifecycle of a batch session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No batch has run, or the session was cleared.
    #[default]
    Idle,
    /// A batch is being processed.
    Running,
    /// The last batch completed all items.
    Done,
}

/// Per-item progress report, issued before each item is processed.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// 1-based index of the current item.
    pub index: usize,
    /// Total number of items in the batch.
    pub total: usize,
    /// The raw input line being checked.
    pub line: &'a str,
}

/// A batch-check session holding configuration and accumulated results.
#[derive(Debug)]
pub struct BatchSession {
    fetcher: Fetcher,
    results: Vec<CheckResult>,
    state: SessionState,
}

impl BatchSession {
    /// Create a session; fails only if the HTTP client cannot be built.
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(options)?,
            results: Vec::new(),
            state: SessionState::Idle,
        })
    }

    /// Check a single raw input line.
    ///
    /// Unnormalizable input yields a terminal error record without any
    /// network traffic; everything else is fetched and analyzed.
    pub async fn check_one(&self, raw: &str) -> CheckResult {
        match url_utils::normalize_input(raw) {
            None => CheckResult::invalid(raw.trim(), "invalid url"),
            Some(url) => {
                let url = String::from(url);
                let outcome = self.fetcher.fetch(&url).await;
                report::build_report(url, outcome)
            }
        }
    }

    /// Run a batch over raw input lines, discarding any prior results.
    ///
    /// Blank lines are dropped before the batch starts.
    pub async fn run<S: AsRef<str>>(&mut self, lines: &[S]) -> &[CheckResult] {
        self.run_with_progress(lines, |_| {}).await
    }

    /// Run a batch, invoking `progress` before each item starts.
    pub async fn run_with_progress<S, F>(&mut self, lines: &[S], mut progress: F) -> &[CheckResult]
    where
        S: AsRef<str>,
        F: FnMut(Progress<'_>),
    {
        self.results.clear();
        self.state = SessionState::Running;

        let lines: Vec<&str> = lines
            .iter()
            .map(|l| l.as_ref().trim())
            .filter(|l| !l.is_empty())
            .collect();
        let total = lines.len();
        info!(total, "starting batch");

        for (i, line) in lines.iter().copied().enumerate() {
            progress(Progress {
                index: i + 1,
                total,
                line,
            });
            let result = self.check_one(line).await;
            self.results.push(result);
        }

        self.state = SessionState::Done;
        info!(total, "batch complete");
        &self.results
    }

    /// Results of the last batch, in input order.
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Discard all results and reset to `Idle`.
    ///
    /// Does not interrupt an in-flight fetch; a batch cleared from
    /// another handle simply has its eventual results discarded.
    pub fn clear(&mut self) {
        self.results.clear();
        self.state = SessionState::Idle;
    }

    /// Export the session's results as CSV.
    ///
    /// Errors with [`Error::NoResults`] when the session holds none, so
    /// callers can surface the no-results warning instead of writing an
    /// empty file.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<()> {
        if self.results.is_empty() {
            return Err(Error::NoResults);
        }
        export::write_csv(&self.results, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> BatchSession {
        match BatchSession::new(&Options::default()) {
            Ok(s) => s,
            Err(e) => panic!("session setup failed: {e}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_lines_become_error_records_without_network() {
        let mut session = session();
        let results = session.run(&["not a url at all", "http://"]).await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.error.is_some()));
        assert!(results.iter().all(|r| !r.alive && r.status.is_none()));
    }

    #[tokio::test]
    async fn test_blank_lines_skipped_and_progress_in_order() {
        let mut session = session();
        let mut seen = Vec::new();
        session
            .run_with_progress(&["", "  ", "bad url one", "bad url two"], |p| {
                seen.push((p.index, p.total, p.line.to_string()));
            })
            .await;

        assert_eq!(
            seen,
            vec![
                (1, 2, "bad url one".to_string()),
                (2, 2, "bad url two".to_string()),
            ]
        );
        assert_eq!(session.results().len(), 2);
    }

    #[tokio::test]
    async fn test_state_transitions_and_clear() {
        let mut session = session();
        assert_eq!(session.state(), SessionState::Idle);

        session.run(&["bad url"]).await;
        assert_eq!(session.state(), SessionState::Done);
        assert_eq!(session.results().len(), 1);

        session.clear();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.results().is_empty());
    }

    #[tokio::test]
    async fn test_export_without_results_is_refused() {
        let session = session();
        let mut buf = Vec::new();
        assert!(matches!(
            session.export_csv(&mut buf),
            Err(Error::NoResults)
        ));
        assert!(buf.is_empty());
    }

    #[tokio::test]
    async fn test_rerun_discards_prior_results() {
        let mut session = session();
        session.run(&["bad one", "bad two"]).await;
        assert_eq!(session.results().len(), 2);

        session.run(&["bad three"]).await;
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.results()[0].url, "bad three");
    }
}
