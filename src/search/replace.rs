//! Replace engine - single in-place replacement and atomic bulk replacement

use super::locator::{find_next, haystack, scan_all};
use super::{Match, Query};
use crate::error::SearchError;
use crate::model::{Document, EditOperation, Selection};

/// Result of a single replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// The range that was replaced, in pre-edit offsets
    pub replaced: Match,
    /// Cursor after the edit: `replaced.start + len(replacement)`
    pub next_cursor: usize,
    /// The following match, selected so repeated calls chain
    pub next_match: Option<Match>,
}

/// Replace one occurrence of `query` in `doc`.
///
/// If the current selection coincides with a match, that occurrence is
/// replaced; otherwise the next match from the cursor (wrapping) is. The
/// following match is then selected without any further mutation.
pub fn replace_one(
    doc: &mut Document,
    query: &Query,
    replacement: &str,
) -> Result<ReplaceOutcome, SearchError> {
    let target = selected_match(doc, query)
        .or_else(|| find_next(doc, query, doc.cursor, true))
        .ok_or_else(|| SearchError::NotFound {
            keyword: query.keyword().to_string(),
        })?;

    doc.replace_range(target.start, target.end, replacement)?;
    let next_cursor = target.start + replacement.chars().count();

    // Advisory positioning only: never wraps back over text just written
    let next_match = find_next(doc, query, next_cursor, false);
    doc.cursor = next_cursor;
    doc.selection = next_match.map(Selection::from);

    tracing::debug!(
        keyword = query.keyword(),
        start = target.start,
        next = ?next_match,
        "replaced one occurrence"
    );

    Ok(ReplaceOutcome {
        replaced: target,
        next_cursor,
        next_match,
    })
}

/// The current selection, if it covers exactly one match of `query`
fn selected_match(doc: &Document, query: &Query) -> Option<Match> {
    let selection = doc.selection?;
    if selection.len() != query.char_len() {
        return None;
    }
    let text = haystack(doc);
    query
        .matches_at(&text, selection.start)
        .then(|| Match::new(selection.start, selection.end))
}

/// Replace every occurrence of `query` in `doc` as one undo step.
///
/// Matches are computed once against the pre-mutation text and applied from
/// the highest start down, so each precomputed range is still valid when it
/// is applied. Edits are staged on a copy of the rope; if any edit fails the
/// document is left untouched. Returns the number of replacements.
pub fn replace_all(
    doc: &mut Document,
    query: &Query,
    replacement: &str,
) -> Result<usize, SearchError> {
    let matches = scan_all(&haystack(doc), query);
    if matches.is_empty() {
        return Ok(0);
    }

    let mut staged = doc.buffer.clone();
    let mut operations = Vec::with_capacity(matches.len());
    let cursor_before = doc.cursor;

    for m in matches.iter().rev() {
        let deleted_text = staged.slice(m.start..m.end).to_string();
        staged.try_remove(m.start..m.end)?;
        staged.try_insert(m.start, replacement)?;
        operations.push(EditOperation::Replace {
            position: m.start,
            deleted_text,
            inserted_text: replacement.to_string(),
            cursor_before,
            cursor_after: 0,
        });
    }

    doc.buffer = staged;
    doc.history.begin_group();
    for op in operations {
        doc.history.push(op);
    }
    doc.history.end_group();
    doc.mark_changed();
    doc.set_cursor(0);

    tracing::info!(
        keyword = query.keyword(),
        mode = query.mode().label(),
        count = matches.len(),
        "replaced all occurrences"
    );
    Ok(matches.len())
}
