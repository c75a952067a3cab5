//! Line result listing - every line containing at least one match

use std::fmt;

use super::locator::{find_all, haystack};
use super::{Match, Query};
use crate::model::Document;

/// A line containing at least one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHit {
    /// 1-based line number
    pub line: usize,
    /// Line content without its line ending
    pub text: String,
}

impl fmt::Display for LineHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.text)
    }
}

/// List each line that contains a match, in document order.
///
/// A match spanning several lines lists the line it starts on.
pub fn line_hits(doc: &Document, query: &Query) -> Vec<LineHit> {
    let mut hits: Vec<LineHit> = Vec::new();
    for m in find_all(doc, query) {
        let line_idx = doc.buffer.char_to_line(m.start);
        if hits.last().is_some_and(|h| h.line == line_idx + 1) {
            continue;
        }
        let text = doc
            .get_line_cow(line_idx)
            .map(|l| l.into_owned())
            .unwrap_or_default();
        hits.push(LineHit {
            line: line_idx + 1,
            text,
        });
    }
    hits
}

/// First match starting on `line` (1-based)
pub fn first_match_on_line(doc: &Document, query: &Query, line: usize) -> Option<Match> {
    let line_idx = line.checked_sub(1)?;
    if line_idx >= doc.line_count() {
        return None;
    }
    let line_start = doc.buffer.line_to_char(line_idx);
    let line_end = line_start + doc.line_length(line_idx);

    let text = haystack(doc);
    (line_start..line_end)
        .find(|&i| query.matches_at(&text, i))
        .map(|start| Match::new(start, start + query.char_len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{compile, MatchMode};

    #[test]
    fn test_line_hits_one_per_line() {
        let doc = Document::with_text("error one\nok\nerror error\r\nfine");
        let q = compile("error", false, MatchMode::Fuzzy).unwrap();
        let hits = line_hits(&doc, &q);
        assert_eq!(
            hits,
            vec![
                LineHit {
                    line: 1,
                    text: "error one".to_string()
                },
                LineHit {
                    line: 3,
                    text: "error error".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_line_hit_display() {
        let hit = LineHit {
            line: 42,
            text: "ExecStart=/usr/bin/foo".to_string(),
        };
        assert_eq!(hit.to_string(), "Line 42: ExecStart=/usr/bin/foo");
    }

    #[test]
    fn test_line_hits_empty_when_no_match() {
        let doc = Document::with_text("a\nb");
        let q = compile("c", false, MatchMode::Fuzzy).unwrap();
        assert!(line_hits(&doc, &q).is_empty());
    }

    #[test]
    fn test_first_match_on_line() {
        let doc = Document::with_text("x\nab ab\n");
        let q = compile("ab", true, MatchMode::Fuzzy).unwrap();
        assert_eq!(first_match_on_line(&doc, &q, 2), Some(Match::new(2, 4)));
        assert_eq!(first_match_on_line(&doc, &q, 1), None);
        assert_eq!(first_match_on_line(&doc, &q, 0), None);
        assert_eq!(first_match_on_line(&doc, &q, 9), None);
    }
}
