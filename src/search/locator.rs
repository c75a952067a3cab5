//! Match location - next, previous and all occurrences of a query

use super::{Match, Query};
use crate::model::Document;

/// Collect the document's chars for scanning
pub(crate) fn haystack(doc: &Document) -> Vec<char> {
    doc.buffer.chars().collect()
}

/// First match starting at or after `from`
pub(crate) fn scan_forward(text: &[char], query: &Query, from: usize) -> Option<Match> {
    let len = query.char_len();
    if len == 0 || len > text.len() {
        return None;
    }
    (from..=text.len() - len)
        .find(|&i| query.matches_at(text, i))
        .map(|start| Match::new(start, start + len))
}

/// All non-overlapping matches in document order.
///
/// After a match `[start, end)` the scan resumes at `end`, never `start + 1`.
pub(crate) fn scan_all(text: &[char], query: &Query) -> Vec<Match> {
    let mut results = Vec::new();
    let mut from = 0;
    while let Some(m) = scan_forward(text, query, from) {
        results.push(m);
        from = m.end;
    }
    results
}

/// Find all non-overlapping matches of `query` in `doc`, in document order
pub fn find_all(doc: &Document, query: &Query) -> Vec<Match> {
    scan_all(&haystack(doc), query)
}

/// Find the next match starting at or after `from`.
///
/// With `wrap`, a miss rescans once from the start of the document, so any
/// document containing a match always yields one.
pub fn find_next(doc: &Document, query: &Query, from: usize, wrap: bool) -> Option<Match> {
    let text = haystack(doc);
    let from = from.min(text.len());

    if let Some(m) = scan_forward(&text, query, from) {
        return Some(m);
    }
    if wrap && from > 0 {
        tracing::debug!(keyword = query.keyword(), from, "find_next wrapping to start");
        return scan_forward(&text, query, 0);
    }
    None
}

/// Find the closest match ending strictly before `from`.
///
/// Works over the full `find_all` list rather than scanning right-to-left, so
/// matches line up exactly with forward scanning and boundary checks. With
/// `wrap`, a miss selects the last match in the document.
pub fn find_previous(doc: &Document, query: &Query, from: usize, wrap: bool) -> Option<Match> {
    let all = find_all(doc, query);

    if let Some(m) = all.iter().rev().find(|m| m.end < from) {
        return Some(*m);
    }
    if wrap {
        tracing::debug!(keyword = query.keyword(), from, "find_previous wrapping to end");
        return all.last().copied();
    }
    None
}
