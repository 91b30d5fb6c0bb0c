//! CSV serialization of batch results.

use std::io::Write;

use crate::error::Result;
use crate::result::CheckResult;

/// Default filename for exported results.
pub const EXPORT_FILENAME: &str = "guestpost-site-check-results.csv";

/// Column headers, in output order.
const CSV_HEADERS: [&str; 7] = [
    "#",
    "url",
    "alive",
    "http_status",
    "indexed",
    "likely_dofollow",
    "notes",
];

/// Write results as CSV.
///
/// Every field is double-quote-enclosed with internal quotes doubled, so
/// any standard CSV reader recovers the original strings exactly. Rows
/// carry a 1-based index; a missing status serializes as an empty cell;
/// notes are joined with `"; "`.
pub fn write_csv<W: Write>(results: &[CheckResult], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;

    for (i, result) in results.iter().enumerate() {
        csv_writer.write_record([
            (i + 1).to_string(),
            result.url.clone(),
            result.alive.to_string(),
            result.status.map(|s| s.to_string()).unwrap_or_default(),
            result.indexed.as_str().to_string(),
            result.likely_dofollow.as_str().to_string(),
            result.notes.join("; "),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
