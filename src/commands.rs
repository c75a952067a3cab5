//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::model::TabId;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// The visible state changed and should be re-rendered
    Redraw,
    /// Read a file through the content provider
    LoadFile { path: PathBuf },
    /// Write a document through the persistence sink
    SaveFile {
        tab: TabId,
        path: PathBuf,
        content: String,
    },
}
