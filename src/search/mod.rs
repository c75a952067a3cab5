//! Literal search, navigation and replace over documents
//!
//! # Architecture
//!
//! - [`query`]: compiles a keyword plus flags into a reusable [`Query`] predicate
//! - [`locator`]: next / previous / all matches with wraparound
//! - [`replace`]: single replace and atomic bulk replace
//! - [`highlight`]: the match overlay for the active document
//! - [`results`]: per-line result listing
//!
//! All offsets are char offsets into the document's rope. Match sets are
//! only valid for the revision they were computed against.

pub mod highlight;
pub mod locator;
pub mod query;
pub mod replace;
pub mod results;

pub use highlight::HighlightOverlay;
pub use locator::{find_all, find_next, find_previous};
pub use query::{compile, MatchMode, Query};
pub use replace::{replace_all, replace_one, ReplaceOutcome};
pub use results::{first_match_on_line, line_hits, LineHit};

/// A half-open `[start, end)` char range satisfying a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "match must be non-empty: {}..{}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Per-focus search state: where the next navigation starts, the current
/// highlight overlay and the last line listing.
///
/// Owned by the tab registry and reset whenever focus changes.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    /// Offset the next find-next / find-previous starts from
    pub last_search_pos: usize,
    pub overlay: HighlightOverlay,
    pub results: Vec<LineHit>,
}

impl SearchContext {
    /// Forget everything derived from the previously focused document
    pub fn reset(&mut self) {
        self.last_search_pos = 0;
        self.overlay.clear();
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_len() {
        assert_eq!(Match::new(3, 7).len(), 4);
        assert!(!Match::new(0, 1).is_empty());
    }

    #[test]
    fn test_matches_order_by_start() {
        let mut v = vec![Match::new(5, 6), Match::new(0, 2), Match::new(2, 4)];
        v.sort();
        assert_eq!(v, vec![Match::new(0, 2), Match::new(2, 4), Match::new(5, 6)]);
    }

    #[test]
    fn test_context_reset() {
        let mut ctx = SearchContext {
            last_search_pos: 12,
            ..Default::default()
        };
        ctx.results.push(LineHit {
            line: 1,
            text: "x".to_string(),
        });
        ctx.reset();
        assert_eq!(ctx.last_search_pos, 0);
        assert!(ctx.results.is_empty());
        assert!(ctx.overlay.is_empty());
    }
}
