//! External collaborators - reading documents in and writing them back out
//!
//! The search engine never performs I/O. The runtime reads content through a
//! [`ContentProvider`] when a tab is opened and writes it through a
//! [`PersistenceSink`] on save. Failures are passed through untouched.

use std::path::Path;

use crate::util::{is_likely_binary, validate_file_for_opening, FileOpenError, MAX_FILE_SIZE};

/// Source of document content at open time
pub trait ContentProvider {
    fn read(&self, path: &Path) -> Result<String, FileOpenError>;
}

/// Durable destination for document content
pub trait PersistenceSink {
    /// Write `content` to `path`, returning a diagnostic message on failure
    fn write(&self, path: &Path, content: &str) -> Result<(), String>;
}

/// Reads text files from the local filesystem with size and binary checks
#[derive(Debug, Clone, Copy)]
pub struct FsContentProvider {
    pub max_file_size: u64,
}

impl Default for FsContentProvider {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl FsContentProvider {
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl ContentProvider for FsContentProvider {
    fn read(&self, path: &Path) -> Result<String, FileOpenError> {
        validate_file_for_opening(path, self.max_file_size)?;
        if is_likely_binary(path) {
            return Err(FileOpenError::BinaryFile);
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read document");
        Ok(content)
    }
}

/// Writes documents to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPersistenceSink;

impl PersistenceSink for FsPersistenceSink {
    fn write(&self, path: &Path, content: &str) -> Result<(), String> {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }
}
