// Chunk: docs/chunks/gap_buffer - Gap buffer storage with cursor-as-gap coupling
// Chunk: docs/chunks/undo_redo - Reversible edit commands and the undo/redo log

//! gap-edit-buffer: the in-memory text storage engine for gap-edit.
//!
//! This crate provides a gap buffer with the cursor fused to the gap, an
//! undo/redo command log, and a derived line map for line-relative navigation.
//! It does no I/O and never fails: out-of-range moves saturate and empty-history
//! operations are no-ops.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Character insertion and backspace at the cursor
//! - Undoable edits through [`EditCommand`]s
//! - Home/End/Up/Down navigation computed from a fresh [`LineMap`]
//!
//! # Example
//!
//! ```
//! use gap_edit_buffer::{Position, TextBuffer};
//!
//! let mut buffer = TextBuffer::new();
//!
//! // Type through the command log so the edits can be undone
//! for ch in "ab\ncd".chars() {
//!     let cmd = buffer.insert_command(ch);
//!     buffer.execute(cmd);
//! }
//! assert_eq!(buffer.content(), "ab\ncd");
//! assert_eq!(buffer.cursor_position(), Position::new(1, 2));
//!
//! // Vertical navigation is circular
//! buffer.move_down();
//! assert_eq!(buffer.cursor_position(), Position::new(0, 2));
//!
//! buffer.undo();
//! assert_eq!(buffer.content(), "ab\nc");
//! ```

mod gap_buffer;
mod history;
mod line_index;
mod text_buffer;
mod types;

pub use gap_buffer::{GapBuffer, DEFAULT_CAPACITY};
pub use history::{CommandLog, EditCommand};
pub use line_index::LineMap;
pub use text_buffer::TextBuffer;
pub use types::{LineRange, Position};
