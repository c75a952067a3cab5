//! Highlight overlay - the match set shown for the active document

use super::locator::find_all;
use super::{Match, Query};
use crate::model::Document;

/// The full match set of the last executed query on the active document.
///
/// Holds nothing beyond the last `refresh` result; the renderer re-derives
/// all highlight regions from it. Refresh after every mutation, focus change
/// or query change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightOverlay {
    matches: Vec<Match>,
}

impl HighlightOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the match set for `doc`
    pub fn refresh(&mut self, doc: &Document, query: &Query) -> &[Match] {
        self.matches = find_all(doc, query);
        &self.matches
    }

    /// Drop the current highlights
    pub fn clear(&mut self) {
        self.matches.clear();
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{compile, MatchMode};

    #[test]
    fn test_refresh_matches_find_all() {
        let doc = Document::with_text("to be or not to be");
        let q = compile("be", false, MatchMode::Fuzzy).unwrap();
        let mut overlay = HighlightOverlay::new();
        let matches = overlay.refresh(&doc, &q).to_vec();
        assert_eq!(matches, find_all(&doc, &q));
        assert_eq!(overlay.len(), 2);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let doc = Document::with_text("aXa");
        let q = compile("a", true, MatchMode::Fuzzy).unwrap();
        let mut overlay = HighlightOverlay::new();
        let first = overlay.refresh(&doc, &q).to_vec();
        let second = overlay.refresh(&doc, &q).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_refresh_after_mutation_reflects_new_text() {
        let mut doc = Document::with_text("aaa");
        let q = compile("a", true, MatchMode::Fuzzy).unwrap();
        let mut overlay = HighlightOverlay::new();
        overlay.refresh(&doc, &q);
        assert_eq!(overlay.len(), 3);

        doc.replace_range(0, 1, "b").unwrap();
        overlay.refresh(&doc, &q);
        assert_eq!(overlay.len(), 2);
    }

    #[test]
    fn test_clear() {
        let doc = Document::with_text("abc");
        let q = compile("b", true, MatchMode::Fuzzy).unwrap();
        let mut overlay = HighlightOverlay::new();
        overlay.refresh(&doc, &q);
        overlay.clear();
        assert!(overlay.is_empty());
    }
}
