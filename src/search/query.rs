//! Query compilation - keyword plus flags into a match predicate

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::util::{fold_char, is_word_char};

/// How match boundaries are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Whole-word: neither neighbour of the match may be a word character
    Exact,
    /// Any substring occurrence matches
    #[default]
    Fuzzy,
}

impl MatchMode {
    pub fn from_exact(exact: bool) -> Self {
        if exact {
            Self::Exact
        } else {
            Self::Fuzzy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Exact => "Exact Match",
            Self::Fuzzy => "Fuzzy Match",
        }
    }
}

/// A compiled search predicate.
///
/// Compilation is pure: equal inputs produce equal queries, and a query can be
/// reused for any number of scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    keyword: String,
    /// Keyword chars, folded when case-insensitive
    needle: Vec<char>,
    case_sensitive: bool,
    mode: MatchMode,
}

/// Compile a keyword into a [`Query`]. Fails with `InvalidQuery` on an empty keyword.
pub fn compile(keyword: &str, case_sensitive: bool, mode: MatchMode) -> Result<Query, SearchError> {
    if keyword.is_empty() {
        return Err(SearchError::InvalidQuery);
    }

    let needle = if case_sensitive {
        keyword.chars().collect()
    } else {
        keyword.chars().map(fold_char).collect()
    };

    Ok(Query {
        keyword: keyword.to_string(),
        needle,
        case_sensitive,
        mode,
    })
}

impl Query {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Length of any match of this query, in chars
    #[inline]
    pub fn char_len(&self) -> usize {
        self.needle.len()
    }

    /// Whether the keyword occurs at `start` in `text`, honoring case and
    /// boundary rules
    pub fn matches_at(&self, text: &[char], start: usize) -> bool {
        let end = start + self.needle.len();
        if end > text.len() {
            return false;
        }

        let body_matches = if self.case_sensitive {
            text[start..end] == self.needle[..]
        } else {
            text[start..end]
                .iter()
                .zip(&self.needle)
                .all(|(&c, &n)| fold_char(c) == n)
        };
        if !body_matches {
            return false;
        }

        match self.mode {
            MatchMode::Fuzzy => true,
            MatchMode::Exact => {
                let before_ok = start == 0 || !is_word_char(text[start - 1]);
                let after_ok = end == text.len() || !is_word_char(text[end]);
                before_ok && after_ok
            }
        }
    }

    /// Whether the query matches anywhere in `haystack`
    pub fn is_match(&self, haystack: &str) -> bool {
        let text: Vec<char> = haystack.chars().collect();
        (0..text.len()).any(|i| self.matches_at(&text, i))
    }
}
