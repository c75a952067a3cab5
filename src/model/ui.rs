//! UI state - search panel inputs and status messages

use crate::config::EditorConfig;
use crate::error::SearchError;
use crate::search::{compile, MatchMode, Query};

/// State for the find/replace panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindReplaceState {
    /// Search keyword
    pub query: String,
    /// Replacement text
    pub replacement: String,
    /// Case-sensitive search
    pub case_sensitive: bool,
    /// Whole-word or substring matching
    pub match_mode: MatchMode,
    /// Continue from the opposite end when nothing is left in the search direction
    pub wrap_search: bool,
}

impl FindReplaceState {
    /// Panel seeded with the configured defaults
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            query: String::new(),
            replacement: String::new(),
            case_sensitive: config.case_sensitive,
            match_mode: config.match_mode,
            wrap_search: config.wrap_search,
        }
    }

    /// Compile the current inputs
    pub fn compile(&self) -> Result<Query, SearchError> {
        compile(&self.query, self.case_sensitive, self.match_mode)
    }
}

/// UI state - panel inputs and the last status message
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub find_replace: FindReplaceState,
    /// Message displayed to the user after the last operation
    pub status_message: String,
    /// Whether a file is currently being loaded
    pub is_loading: bool,
    /// Whether a file is currently being saved
    pub is_saving: bool,
}

impl UiState {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            find_replace: FindReplaceState::from_config(config),
            ..Self::default()
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Report a search error as a status message
    pub fn report(&mut self, err: &SearchError) {
        self.set_status(err.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_seeds_flags() {
        let config = EditorConfig {
            case_sensitive: true,
            match_mode: MatchMode::Exact,
            wrap_search: false,
            ..EditorConfig::default()
        };
        let state = FindReplaceState::from_config(&config);
        assert!(state.case_sensitive);
        assert_eq!(state.match_mode, MatchMode::Exact);
        assert!(!state.wrap_search);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_compile_empty_query_fails() {
        let state = FindReplaceState::default();
        assert_eq!(state.compile().unwrap_err(), SearchError::InvalidQuery);
    }

    #[test]
    fn test_report_uses_user_message() {
        let mut ui = UiState::default();
        ui.report(&SearchError::NoActiveDocument);
        assert_eq!(ui.status_message, "No file is open");
    }
}
