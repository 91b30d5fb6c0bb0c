use sitecheck::export::{write_csv, EXPORT_FILENAME};
use sitecheck::{CheckResult, FollowStatus, Indexability};

fn export(results: &[CheckResult]) -> Vec<u8> {
    let mut buf = Vec::new();
    match write_csv(results, &mut buf) {
        Ok(()) => buf,
        Err(e) => panic!("export failed: {e}"),
    }
}

#[test]
fn header_matches_export_schema() {
    let output = export(&[]);
    let text = String::from_utf8_lossy(&output);
    assert_eq!(
        text.lines().next(),
        Some(r##""#","url","alive","http_status","indexed","likely_dofollow","notes""##)
    );
}

#[test]
fn quoted_fields_round_trip_through_a_standard_reader() {
    let mut tricky = CheckResult::new(r#"http://example.com/?q="quoted""#);
    tricky.alive = true;
    tricky.status = Some(200);
    tricky.indexed = Indexability::LikelyNoMetaRobots;
    tricky.likely_dofollow = FollowStatus::AnchorNofollow;
    tricky
        .notes
        .push(r#"found rel="nofollow" on anchors"#.to_string());
    tricky.notes.push("second note, with comma".to_string());

    let output = export(&[tricky.clone()]);

    // Internal quotes are doubled in the raw bytes
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains(r#"""nofollow"""#));

    // A standard CSV reader recovers the original strings exactly
    let mut reader = csv::Reader::from_reader(output.as_slice());
    let records: Vec<csv::StringRecord> = reader.records().filter_map(Result::ok).collect();
    assert_eq!(records.len(), 1);

    let row = &records[0];
    assert_eq!(&row[0], "1");
    assert_eq!(&row[1], tricky.url);
    assert_eq!(&row[2], "true");
    assert_eq!(&row[3], "200");
    assert_eq!(&row[4], tricky.indexed.as_str());
    assert_eq!(&row[5], tricky.likely_dofollow.as_str());
    assert_eq!(&row[6], tricky.notes.join("; "));
}

#[test]
fn rows_are_indexed_from_one_in_order() {
    let results = vec![
        CheckResult::new("http://a.example/"),
        CheckResult::new("http://b.example/"),
        CheckResult::invalid("junk line", "invalid url"),
    ];

    let output = export(&results);
    let mut reader = csv::Reader::from_reader(output.as_slice());
    let records: Vec<csv::StringRecord> = reader.records().filter_map(Result::ok).collect();

    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][0], "1");
    assert_eq!(&records[1][0], "2");
    assert_eq!(&records[2][0], "3");
    assert_eq!(&records[2][1], "junk line");
    // The invalid record's diagnostic lands in the notes column
    assert_eq!(&records[2][6], "invalid url");
}

#[test]
fn default_filename_matches_the_tool_name() {
    assert_eq!(EXPORT_FILENAME, "guestpost-site-check-results.csv");
}
