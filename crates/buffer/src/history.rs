// Chunk: docs/chunks/undo_redo - Reversible edit commands and the undo/redo log

//! Undo/redo history built from reversible edit commands.
//!
//! Every state-changing edit is an [`EditCommand`] that knows how to apply
//! itself to a [`GapBuffer`] and how to revert itself. The [`CommandLog`]
//! keeps two stacks of commands; a command lives in exactly one of them.
//!
//! # Usage
//!
//! ```
//! use gap_edit_buffer::{CommandLog, EditCommand, GapBuffer};
//!
//! let mut buffer = GapBuffer::new();
//! let mut log = CommandLog::new();
//!
//! log.execute(EditCommand::insert(0, 'a'), &mut buffer);
//! assert_eq!(buffer.to_string(), "a");
//!
//! log.undo(&mut buffer);
//! assert_eq!(buffer.to_string(), "");
//!
//! log.redo(&mut buffer);
//! assert_eq!(buffer.to_string(), "a");
//! ```
//!
//! New edits clear the redo stack: branching history is not supported.

use tracing::trace;

use crate::gap_buffer::GapBuffer;

// ---------------------------------------------------------------------------
// EditCommand
// ---------------------------------------------------------------------------

/// A single reversible buffer edit.
///
/// Each command records the absolute offset and the character involved. For a
/// delete, the character must be captured before the delete runs, since the
/// buffer absorbs it into the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    /// `ch` is inserted with the cursor at `pos`. Undo = backspace from `pos + 1`.
    Insert { pos: usize, ch: char },

    /// Backspace with the cursor at `pos`, removing `ch` at `pos - 1`.
    /// Undo = insert `ch` at `pos - 1`.
    Delete { pos: usize, ch: char },
}

impl EditCommand {
    pub fn insert(pos: usize, ch: char) -> Self {
        Self::Insert { pos, ch }
    }

    pub fn delete(pos: usize, ch: char) -> Self {
        Self::Delete { pos, ch }
    }

    /// The offset the command was recorded at.
    pub fn pos(&self) -> usize {
        match self {
            Self::Insert { pos, .. } | Self::Delete { pos, .. } => *pos,
        }
    }

    /// Performs the forward action: relocate the cursor, then edit.
    pub fn apply(&self, buf: &mut GapBuffer) {
        match *self {
            Self::Insert { pos, ch } => {
                buf.move_gap_to(pos);
                buf.insert(ch);
            }
            Self::Delete { pos, .. } => {
                buf.move_gap_to(pos);
                buf.delete_backward();
            }
        }
    }

    /// Performs the reverse action, undoing [`apply`](Self::apply).
    pub fn revert(&self, buf: &mut GapBuffer) {
        match *self {
            Self::Insert { pos, .. } => {
                buf.move_gap_to(pos + 1);
                buf.delete_backward();
            }
            // A delete at offset 0 removed nothing, so there is nothing to restore.
            Self::Delete { pos: 0, .. } => buf.move_gap_to(0),
            Self::Delete { pos, ch } => {
                buf.move_gap_to(pos - 1);
                buf.insert(ch);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CommandLog
// ---------------------------------------------------------------------------

/// Undo/redo history for a buffer.
///
/// Maintains two stacks: commands that can be undone and commands that can be
/// redone. Undo and redo move a command from one stack to the other; nothing
/// is ever duplicated.
#[derive(Debug, Default)]
pub struct CommandLog {
    undo_stack: Vec<EditCommand>,
    redo_stack: Vec<EditCommand>,
}

impl CommandLog {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Applies `command` to `buf` and records it for undo.
    ///
    /// The redo stack is cleared: any history branch left by earlier undos is
    /// abandoned once a fresh edit is made.
    pub fn execute(&mut self, command: EditCommand, buf: &mut GapBuffer) {
        command.apply(buf);
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Reverts the most recent command. Returns false if there was nothing to undo.
    pub fn undo(&mut self, buf: &mut GapBuffer) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };
        trace!(?command, "undo");
        command.revert(buf);
        self.redo_stack.push(command);
        true
    }

    /// Re-applies the most recently undone command. Returns false if there was
    /// nothing to redo.
    pub fn redo(&mut self, buf: &mut GapBuffer) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        trace!(?command, "redo");
        command.apply(buf);
        self.undo_stack.push(command);
        true
    }

    /// Whether there are commands to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there are commands to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drops both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
