//! Performance benchmarks for the heuristic analyzer.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sitecheck::analyzer::analyze;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Guest Posting Guidelines</title>
    <meta name="description" content="How to contribute to our blog.">
    <meta name="robots" content="index, follow">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Write for us</h1>
        <p>We welcome a well-researched guest post on marketing topics.
        Please read the guidelines below before you submit a guest post.</p>
        <p>Links in editorial content are reviewed by our team. Promotional
        links may be marked accordingly.</p>
        <a href="https://example.com/partner" rel="sponsored nofollow">partner offer</a>
        <a href="https://example.com/reference">reference</a>
    </article>
    <footer>
        <p>Copyright 2026</p>
    </footer>
</body>
</html>
"#;

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));
    group.bench_function("sample_page", |b| {
        b.iter(|| analyze(black_box(SAMPLE_HTML)));
    });

    // Page with many anchors, the dominant cost on real pages
    let mut big = String::from("<html><body>");
    for i in 0..2000 {
        big.push_str(&format!(r#"<a href="/p/{i}">link {i}</a>"#));
    }
    big.push_str("</body></html>");

    group.throughput(Throughput::Bytes(big.len() as u64));
    group.bench_function("anchor_heavy_page", |b| {
        b.iter(|| analyze(black_box(&big)));
    });

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
