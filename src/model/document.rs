//! Document model - represents the text buffer, cursor and file state

use ropey::Rope;
use std::borrow::Cow;
use std::path::PathBuf;

use super::history::{EditHistory, EditOperation};
use super::tab_registry::TabId;
use crate::search::Match;

/// A selected range of text in char offsets, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

impl From<Match> for Selection {
    fn from(m: Match) -> Self {
        Self {
            start: m.start,
            end: m.end,
        }
    }
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// Tab handle (set when added to the TabRegistry)
    pub id: Option<TabId>,

    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for scratch documents)
    pub file_path: Option<PathBuf>,
    /// Display name for documents without a path
    pub untitled_name: Option<String>,
    /// Cursor position as a char offset, `0 <= cursor <= len_chars()`
    pub cursor: usize,
    /// Current selection, if any
    pub selection: Option<Selection>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Undo/redo ledger, never shared across documents
    pub history: EditHistory,
    /// Incremented on each edit
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            id: None,
            buffer: Rope::from(text),
            file_path: None,
            untitled_name: None,
            cursor: 0,
            selection: None,
            is_modified: false,
            history: EditHistory::new(),
            revision: 0,
        }
    }

    /// Create a document from content read at `path`
    pub fn from_content(path: PathBuf, content: &str) -> Self {
        Self {
            file_path: Some(path),
            ..Self::with_text(content)
        }
    }

    /// Replace the edit history with one bounded to `limit` steps
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = EditHistory::with_max_size(limit);
        self
    }

    /// Get the display name for this document.
    /// Returns the filename if it has a path, the untitled name if set, or "Untitled".
    pub fn display_name(&self) -> String {
        if let Some(path) = &self.file_path {
            if let Some(name) = path.file_name() {
                return name.to_string_lossy().to_string();
            }
        }
        if let Some(name) = &self.untitled_name {
            return name.clone();
        }
        "Untitled".to_string()
    }

    /// Full buffer content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of chars in the buffer
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get line content without its line ending, avoiding allocation when possible
    pub fn get_line_cow(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }

        let line = self.buffer.line(line_idx);
        let len = line.len_chars();

        let trim_len = if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                2
            } else {
                1
            }
        } else {
            0
        };

        let trimmed = line.slice(..len - trim_len);
        match trimmed.as_str() {
            Some(s) => Some(Cow::Borrowed(s)),
            None => Some(Cow::Owned(trimmed.to_string())),
        }
    }

    /// Get the length of a line (excluding line ending)
    pub fn line_length(&self, line_idx: usize) -> usize {
        self.get_line_cow(line_idx)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    /// Convert a (line, column) position to a buffer offset
    pub fn cursor_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    /// Convert a buffer offset to (line, column) position
    pub fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        (line, clamped - line_start)
    }

    /// Move the cursor, clamping to the buffer and clearing the selection
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.len_chars());
        self.selection = None;
    }

    /// Select a range and place the cursor at its end
    pub fn select(&mut self, selection: Selection) {
        let len = self.len_chars();
        let selection = Selection::new(selection.start.min(len), selection.end.min(len));
        self.cursor = selection.end;
        self.selection = Some(selection);
    }

    /// Replace `start..end` with `text` and record it in the history.
    ///
    /// The cursor ends up after the inserted text and the selection is cleared.
    pub fn replace_range(
        &mut self,
        start: usize,
        end: usize,
        text: &str,
    ) -> Result<(), ropey::Error> {
        let mut staged = self.buffer.clone();
        staged.try_remove(start..end)?;
        staged.try_insert(start, text)?;
        let deleted_text = self.buffer.slice(start..end).to_string();

        let cursor_before = self.cursor;
        self.buffer = staged;
        self.cursor = start + text.chars().count();
        self.selection = None;
        self.push_edit(EditOperation::Replace {
            position: start,
            deleted_text,
            inserted_text: text.to_string(),
            cursor_before,
            cursor_after: self.cursor,
        });
        Ok(())
    }

    /// Record an edit operation that has already been applied to the buffer
    pub fn push_edit(&mut self, op: EditOperation) {
        self.history.push(op);
        self.mark_changed();
    }

    /// Bump revision and modified flag after a buffer mutation
    pub fn mark_changed(&mut self) {
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Mark the document as saved
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo the most recent edit step. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, ropey::Error> {
        let Some(op) = self.history.pop_undo() else {
            return Ok(false);
        };
        let mut staged = self.buffer.clone();
        if let Err(e) = op.undo(&mut staged) {
            // Put the step back so the ledger matches the untouched buffer
            self.history.pop_redo();
            return Err(e);
        }
        self.buffer = staged;
        self.set_cursor(op.cursor_before());
        self.mark_changed();
        Ok(true)
    }

    /// Redo the most recently undone step. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool, ropey::Error> {
        let Some(op) = self.history.pop_redo() else {
            return Ok(false);
        };
        let mut staged = self.buffer.clone();
        if let Err(e) = op.redo(&mut staged) {
            self.history.pop_undo();
            return Err(e);
        }
        self.buffer = staged;
        self.set_cursor(op.cursor_after());
        self.mark_changed();
        Ok(true)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_clean() {
        let doc = Document::new();
        assert!(!doc.is_modified);
        assert!(!doc.can_undo());
        assert!(!doc.can_redo());
        assert_eq!(doc.cursor, 0);
        assert_eq!(doc.revision, 0);
    }

    #[test]
    fn test_display_name_with_path() {
        let doc = Document::from_content(PathBuf::from("/etc/hosts"), "");
        assert_eq!(doc.display_name(), "hosts");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(Document::new().display_name(), "Untitled");
    }

    #[test]
    fn test_line_length_excludes_crlf() {
        let doc = Document::with_text("ab\r\ncd\n");
        assert_eq!(doc.line_length(0), 2);
        assert_eq!(doc.get_line_cow(0).unwrap(), "ab");
        assert_eq!(doc.line_length(1), 2);
        assert_eq!(doc.line_length(9), 0);
    }

    #[test]
    fn test_offset_cursor_roundtrip() {
        let doc = Document::with_text("hello\nworld");
        let offset = doc.cursor_to_offset(1, 3);
        assert_eq!(offset, 9);
        assert_eq!(doc.offset_to_cursor(offset), (1, 3));
    }

    #[test]
    fn test_set_cursor_clamps_and_clears_selection() {
        let mut doc = Document::with_text("abc");
        doc.select(Selection::new(0, 2));
        doc.set_cursor(99);
        assert_eq!(doc.cursor, 3);
        assert!(doc.selection.is_none());
    }

    #[test]
    fn test_select_normalizes_and_moves_cursor() {
        let mut doc = Document::with_text("abcdef");
        doc.select(Selection::new(4, 1));
        assert_eq!(doc.selection, Some(Selection { start: 1, end: 4 }));
        assert_eq!(doc.cursor, 4);
    }

    #[test]
    fn test_replace_range_records_history() {
        let mut doc = Document::with_text("hello world");
        doc.replace_range(6, 11, "there").unwrap();
        assert_eq!(doc.text(), "hello there");
        assert_eq!(doc.cursor, 11);
        assert!(doc.is_modified);
        assert_eq!(doc.revision, 1);
        assert!(doc.can_undo());
    }

    #[test]
    fn test_replace_range_out_of_bounds_leaves_buffer() {
        let mut doc = Document::with_text("abc");
        assert!(doc.replace_range(2, 10, "x").is_err());
        assert_eq!(doc.text(), "abc");
        assert!(!doc.is_modified);
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut doc = Document::with_text("café au lait");
        doc.replace_range(0, 4, "thé").unwrap();
        assert_eq!(doc.text(), "thé au lait");

        assert!(doc.undo().unwrap());
        assert_eq!(doc.text(), "café au lait");
        assert_eq!(doc.cursor, 0);
        assert!(doc.can_redo());

        assert!(doc.redo().unwrap());
        assert_eq!(doc.text(), "thé au lait");
        assert_eq!(doc.cursor, 3);
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut doc = Document::with_text("abc");
        assert!(!doc.undo().unwrap());
        assert!(!doc.redo().unwrap());
    }

    #[test]
    fn test_mark_saved_clears_modified() {
        let mut doc = Document::with_text("abc");
        doc.replace_range(0, 1, "x").unwrap();
        doc.mark_saved();
        assert!(!doc.is_modified);
        assert!(doc.can_undo());
    }
}
