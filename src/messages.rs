//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::TabId;
use crate::search::MatchMode;
use crate::util::FileOpenError;

/// Search panel messages (inputs, navigation, replacement)
#[derive(Debug, Clone, PartialEq)]
pub enum SearchMsg {
    // === Panel inputs ===
    /// Set the search keyword
    SetQuery(String),
    /// Set the replacement text
    SetReplacement(String),
    /// Set the case-sensitive toggle
    SetCaseSensitive(bool),
    /// Set whole-word or substring matching
    SetMatchMode(MatchMode),
    /// Set the wraparound toggle
    SetWrapSearch(bool),

    // === Navigation ===
    /// Select the next match after the search position
    FindNext,
    /// Select the closest match before the search position
    FindPrevious,
    /// List every matching line and highlight all matches
    FindAll,
    /// Jump to a listed result (1-based line number)
    JumpToResult(usize),

    // === Replacement ===
    /// Replace the selected or next match
    ReplaceOne,
    /// Replace every match as one undo step
    ReplaceAll,

    // === Highlights ===
    /// Recompute highlights for the active document
    RefreshHighlights,
    /// Remove all highlights
    ClearHighlights,
}

/// Tab lifecycle messages
#[derive(Debug, Clone, PartialEq)]
pub enum TabMsg {
    /// Open a file (activates the existing tab if already open)
    Open(PathBuf),
    /// Open an in-memory document with a display name
    OpenText { name: String, content: String },
    /// Focus a tab
    Activate(TabId),
    /// Close a tab
    Close(TabId),
    /// Close the focused tab
    CloseActive,
    /// Focus the next tab (wrapping)
    Next,
    /// Focus the previous tab (wrapping)
    Prev,
}

/// Messages acting on the active document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMsg {
    Undo,
    Redo,
    /// Move the cursor to the start of a 1-based line
    GotoLine(usize),
    /// Move the cursor to a char offset
    SetCursor(usize),
    /// Write the active document back to its file
    Save,
}

/// Results delivered back from side effects
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// A file read requested by `Cmd::LoadFile` finished
    FileLoaded {
        path: PathBuf,
        result: Result<String, FileOpenError>,
    },
    /// A write requested by `Cmd::SaveFile` finished
    SaveCompleted {
        tab: TabId,
        result: Result<(), String>,
    },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Search(SearchMsg),
    Tab(TabMsg),
    Document(DocumentMsg),
    App(AppMsg),
}
