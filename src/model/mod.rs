//! Model layer - application state
//!
//! The AppModel contains all state for the application, following the Elm Architecture pattern.

pub mod document;
pub mod history;
pub mod tab_registry;
pub mod ui;

pub use document::{Document, Selection};
pub use history::{EditHistory, EditOperation, DEFAULT_HISTORY_LIMIT};
pub use tab_registry::{TabId, TabRegistry};
pub use ui::{FindReplaceState, UiState};

use crate::config::EditorConfig;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Open documents and the active tab
    pub tabs: TabRegistry,
    /// Search panel and status messages
    pub ui: UiState,
    /// User configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model with no open documents
    pub fn new(config: EditorConfig) -> Self {
        Self {
            tabs: TabRegistry::new(),
            ui: UiState::new(&config),
            config,
        }
    }

    /// Get the active document
    pub fn active_document(&self) -> Option<&Document> {
        self.tabs.active()
    }

    /// Get the active document mutably
    pub fn active_document_mut(&mut self) -> Option<&mut Document> {
        self.tabs.active_mut()
    }

    /// Status line text: `Ready` with no tabs, otherwise file and 1-based cursor position
    pub fn status_line(&self) -> String {
        let Some(doc) = self.tabs.active() else {
            return "Ready".to_string();
        };
        let name = doc
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| doc.display_name());
        let (line, column) = doc.offset_to_cursor(doc.cursor);
        let modified = if doc.is_modified { " [modified]" } else { "" };
        format!(
            "File: {} | Line: {} | Col: {}{}",
            name,
            line + 1,
            column + 1,
            modified
        )
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
