//! Heuristic inspection of fetched HTML.
//!
//! Three independent signals are derived from a page:
//!
//! 1. **Indexability** from the meta robots tag. The tag is located by
//!    querying the parsed document for `meta` elements with a `robots`
//!    name attribute rather than pattern-matching raw markup, so
//!    attribute order, quoting style, and self-closing variance are
//!    irrelevant.
//! 2. **Follow status** from meta robots plus anchor `rel` attributes.
//! 3. A **solicitation note** when the page text carries guest-post
//!    solicitation language.
//!
//! Rules only upgrade specificity within a pass: a "no" verdict from the
//! meta tag is never downgraded by the later anchor-based default.
//! Malformed HTML never aborts analysis; the parser is error-recovering,
//! and a document yielding no element tree degrades to the meta-only
//! verdicts plus a diagnostic note.

use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::patterns::SOLICITATION;
use crate::result::{FollowStatus, Indexability};

/// Signals derived from one page's HTML.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Indexability verdict.
    pub indexed: Indexability,
    /// Link-follow verdict.
    pub likely_dofollow: FollowStatus,
    /// Notes explaining each determination, in the order made.
    pub notes: Vec<String>,
}

/// Analyze the raw HTML text of a successfully fetched page.
#[must_use]
pub fn analyze(html: &str) -> Analysis {
    let doc = dom::parse(html);
    let mut analysis = Analysis::default();

    examine_meta_robots(&doc, &mut analysis);
    examine_anchors(&doc, &mut analysis);
    note_solicitation(&doc, html, &mut analysis);

    debug!(
        indexed = analysis.indexed.as_str(),
        likely_dofollow = analysis.likely_dofollow.as_str(),
        notes = analysis.notes.len(),
        "analyzed page"
    );
    analysis
}

/// Step 1: meta robots directives.
///
/// Absent tag reads optimistically as "likely"; a tag whose content
/// cannot be extracted reads as the weaker "possible".
fn examine_meta_robots(doc: &Document, analysis: &mut Analysis) {
    let mut tag_found = false;
    let mut content = None;

    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);
        let name = dom::get_attribute(&meta, "name").unwrap_or_default();
        if !name.trim().eq_ignore_ascii_case("robots") {
            continue;
        }

        tag_found = true;
        // First robots tag with extractable content wins
        match dom::get_attribute(&meta, "content") {
            Some(value) if !value.is_empty() => {
                content = Some(value.to_lowercase());
                break;
            }
            _ => {}
        }
    }

    match (tag_found, content) {
        (false, _) => analysis.indexed = Indexability::LikelyNoMetaRobots,
        (true, None) => analysis.indexed = Indexability::Possible,
        (true, Some(directives)) => {
            if directives.contains("noindex") {
                analysis.indexed = Indexability::MetaNoindex;
                analysis.notes.push("meta robots contains noindex".to_string());
            } else {
                analysis.indexed = Indexability::PossibleNoNoindex;
            }
            if directives.contains("nofollow") {
                analysis.likely_dofollow = FollowStatus::MetaNofollow;
                analysis.notes.push("meta robots contains nofollow".to_string());
            }
        }
    }
}

/// Step 2: anchor rel attributes.
///
/// A "no" verdict from step 1 is terminal; this step neither overwrites
/// it nor adds a redundant anchor note on top of it.
fn examine_anchors(doc: &Document, analysis: &mut Analysis) {
    if !dom::exists(&doc.select("html")) {
        analysis
            .notes
            .push("could not parse HTML for anchors".to_string());
        return;
    }

    let nofollow_anchor = doc.select("a[href]").nodes().iter().any(|node| {
        let anchor = Selection::from(*node);
        dom::get_attribute(&anchor, "rel")
            .is_some_and(|rel| rel.to_lowercase().contains("nofollow"))
    });

    if analysis.likely_dofollow.is_no() {
        return;
    }

    if nofollow_anchor {
        analysis.likely_dofollow = FollowStatus::AnchorNofollow;
        analysis
            .notes
            .push(r#"found rel="nofollow" on anchors"#.to_string());
    } else {
        analysis.likely_dofollow = FollowStatus::LikelyNoNofollow;
    }
}

/// Step 3: guest-post solicitation language in the rendered text.
///
/// Scans the body text; a document without a body falls back to the raw
/// markup. Informational only.
fn note_solicitation(doc: &Document, raw_html: &str, analysis: &mut Analysis) {
    let body = doc.select("body");
    let matched = if dom::exists(&body) {
        SOLICITATION.is_match(&dom::text_content(&body))
    } else {
        SOLICITATION.is_match(raw_html)
    };

    if matched {
        analysis
            .notes
            .push("page mentions guest contributions".to_string());
    }
}
