//! Edit history (undo/redo ledger) owned by a single document
//!
//! Operations are recorded in char offsets. Bulk edits are bracketed by
//! [`EditHistory::begin_group`] / [`EditHistory::end_group`] and collapse into
//! one [`EditOperation::Batch`], so a whole replace-all is a single undo step.

use ropey::Rope;

/// Default number of undo steps retained per document
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// A recorded edit that can be undone/redone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOperation {
    /// `deleted_text` at `position` was replaced by `inserted_text`
    Replace {
        position: usize,
        deleted_text: String,
        inserted_text: String,
        cursor_before: usize,
        cursor_after: usize,
    },
    /// Groups multiple edits for atomic undo/redo
    Batch {
        /// Individual operations (applied in order for redo, reverse order for undo)
        operations: Vec<EditOperation>,
        cursor_before: usize,
        cursor_after: usize,
    },
}

impl EditOperation {
    /// Cursor offset to restore after undoing this operation
    pub fn cursor_before(&self) -> usize {
        match self {
            Self::Replace { cursor_before, .. } | Self::Batch { cursor_before, .. } => {
                *cursor_before
            }
        }
    }

    /// Cursor offset to restore after redoing this operation
    pub fn cursor_after(&self) -> usize {
        match self {
            Self::Replace { cursor_after, .. } | Self::Batch { cursor_after, .. } => *cursor_after,
        }
    }

    /// Reverse this operation on `buffer`
    pub fn undo(&self, buffer: &mut Rope) -> Result<(), ropey::Error> {
        match self {
            Self::Replace {
                position,
                deleted_text,
                inserted_text,
                ..
            } => {
                buffer.try_remove(*position..*position + inserted_text.chars().count())?;
                buffer.try_insert(*position, deleted_text)
            }
            Self::Batch { operations, .. } => {
                for op in operations.iter().rev() {
                    op.undo(buffer)?;
                }
                Ok(())
            }
        }
    }

    /// Re-apply this operation on `buffer`
    pub fn redo(&self, buffer: &mut Rope) -> Result<(), ropey::Error> {
        match self {
            Self::Replace {
                position,
                deleted_text,
                inserted_text,
                ..
            } => {
                buffer.try_remove(*position..*position + deleted_text.chars().count())?;
                buffer.try_insert(*position, inserted_text)
            }
            Self::Batch { operations, .. } => {
                for op in operations.iter() {
                    op.redo(buffer)?;
                }
                Ok(())
            }
        }
    }
}

/// Undo/redo stacks with atomic grouping
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<EditOperation>,
    redo_stack: Vec<EditOperation>,
    /// Operations recorded since `begin_group`, None when no group is open
    pending_group: Option<Vec<EditOperation>>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new edit history with specified max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            pending_group: None,
            max_size: max_size.max(1),
        }
    }

    /// Record an operation (clears redo stack)
    ///
    /// While a group is open the operation is buffered into the group instead.
    pub fn push(&mut self, op: EditOperation) {
        if let Some(group) = self.pending_group.as_mut() {
            group.push(op);
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push(op);

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Start an atomic group. Nested calls are folded into the open group.
    pub fn begin_group(&mut self) {
        if self.pending_group.is_none() {
            self.pending_group = Some(Vec::new());
        }
    }

    /// Close the open group, recording it as one batch step.
    ///
    /// Returns true if a non-empty batch was recorded.
    pub fn end_group(&mut self) -> bool {
        let Some(operations) = self.pending_group.take() else {
            return false;
        };
        let (Some(first), Some(last)) = (operations.first(), operations.last()) else {
            return false;
        };
        let cursor_before = first.cursor_before();
        let cursor_after = last.cursor_after();
        self.push(EditOperation::Batch {
            operations,
            cursor_before,
            cursor_after,
        });
        true
    }

    /// Drop the open group without recording anything
    pub fn abort_group(&mut self) {
        self.pending_group = None;
    }

    /// Whether a group is currently open
    pub fn in_group(&self) -> bool {
        self.pending_group.is_some()
    }

    /// Pop an operation from the undo stack (moves to redo stack)
    pub fn pop_undo(&mut self) -> Option<EditOperation> {
        let op = self.undo_stack.pop()?;
        self.redo_stack.push(op.clone());
        Some(op)
    }

    /// Pop an operation from the redo stack (moves to undo stack)
    pub fn pop_redo(&mut self) -> Option<EditOperation> {
        let op = self.redo_stack.pop()?;
        self.undo_stack.push(op.clone());
        Some(op)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.pending_group = None;
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
