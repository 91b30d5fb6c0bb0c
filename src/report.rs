//! Assembly of fetch outcomes and page signals into per-URL reports.

use crate::analyzer;
use crate::fetcher::FetchOutcome;
use crate::result::CheckResult;

/// Combine a fetch outcome with heuristic analysis into the final record.
///
/// Only a successful HTTP response is analyzed. A non-2xx status keeps
/// the literal status code with both verdicts at `unknown`; a transport
/// failure additionally has no status, with the error message retained
/// as a note.
#[must_use]
pub fn build_report(url: String, outcome: FetchOutcome) -> CheckResult {
    let mut result = CheckResult::new(url);

    match outcome {
        FetchOutcome::Response { status, ok, body } => {
            result.status = Some(status);
            if ok {
                result.alive = true;
                let analysis = analyzer::analyze(&body);
                result.indexed = analysis.indexed;
                result.likely_dofollow = analysis.likely_dofollow;
                result.notes.extend(analysis.notes);
            } else {
                result.notes.push("fetch returned non-OK status".to_string());
            }
        }
        FetchOutcome::TransportError(message) => {
            result.notes.push(format!("fetch error: {message}"));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{FollowStatus, Indexability};

    #[test]
    fn test_success_merges_analysis() {
        let outcome = FetchOutcome::Response {
            status: 200,
            ok: true,
            body: r#"<head><meta name="robots" content="noindex"></head>"#.to_string(),
        };

        let result = build_report("http://example.com/".to_string(), outcome);
        assert!(result.alive);
        assert_eq!(result.status, Some(200));
        assert_eq!(result.indexed, Indexability::MetaNoindex);
        assert!(result
            .notes
            .contains(&"meta robots contains noindex".to_string()));
    }

    #[test]
    fn test_non_ok_status_leaves_verdicts_unknown() {
        let outcome = FetchOutcome::Response {
            status: 404,
            ok: false,
            body: r#"<head><meta name="robots" content="noindex"></head>"#.to_string(),
        };

        let result = build_report("http://example.com/".to_string(), outcome);
        assert!(!result.alive);
        assert_eq!(result.status, Some(404));
        assert_eq!(result.indexed, Indexability::Unknown);
        assert_eq!(result.likely_dofollow, FollowStatus::Unknown);
        assert_eq!(result.notes, vec!["fetch returned non-OK status"]);
    }

    #[test]
    fn test_transport_failure_has_no_status() {
        let outcome = FetchOutcome::TransportError("connection refused".to_string());

        let result = build_report("http://example.com/".to_string(), outcome);
        assert!(!result.alive);
        assert_eq!(result.status, None);
        assert_eq!(result.indexed, Indexability::Unknown);
        assert_eq!(result.likely_dofollow, FollowStatus::Unknown);
        assert_eq!(result.notes, vec!["fetch error: connection refused"]);
    }
}
