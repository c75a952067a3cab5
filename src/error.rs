//! Error taxonomy for search and replace operations

use std::fmt;

/// Errors surfaced by the search/replace engine and the tab registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The keyword was empty; rejected before any scan
    InvalidQuery,
    /// Zero occurrences of the keyword exist in the active document
    NotFound { keyword: String },
    /// An operation was invoked while no document is active
    NoActiveDocument,
    /// The buffer rejected an edit; nothing was applied
    EditFailed(String),
}

impl SearchError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidQuery => "Search keyword must not be empty".to_string(),
            Self::NotFound { keyword } => format!("'{}' not found", keyword),
            Self::NoActiveDocument => "No file is open".to_string(),
            Self::EditFailed(msg) => format!("Edit failed: {}", msg),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuery => write!(f, "invalid query: empty keyword"),
            Self::NotFound { keyword } => write!(f, "no occurrence of {:?}", keyword),
            Self::NoActiveDocument => write!(f, "no active document"),
            Self::EditFailed(msg) => write!(f, "edit failed: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<ropey::Error> for SearchError {
    fn from(e: ropey::Error) -> Self {
        Self::EditFailed(e.to_string())
    }
}
