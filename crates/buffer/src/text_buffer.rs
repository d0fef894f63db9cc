// Chunk: docs/chunks/gap_buffer - Gap buffer storage with cursor-as-gap coupling
// Chunk: docs/chunks/undo_redo - Reversible edit commands and the undo/redo log
// Chunk: docs/chunks/line_navigation - Derived line map and line-relative movement

//! TextBuffer is the main public API for text editing operations.
//!
//! It is the editing session object: it owns the gap buffer (content and
//! cursor) and the command log (undo/redo). Hosts construct one per session
//! and pass it by reference; there is no global state.
//!
//! Line-relative navigation rebuilds a [`LineMap`] from the current content
//! each time it runs.

use crate::gap_buffer::GapBuffer;
use crate::history::{CommandLog, EditCommand};
use crate::line_index::LineMap;
use crate::types::Position;

/// A text buffer with cursor, undo/redo history and line navigation.
///
/// Edits come in two flavours:
/// - raw edits ([`insert_char`](Self::insert_char),
///   [`delete_backward`](Self::delete_backward)) mutate the content directly
///   and are not undoable;
/// - commands ([`execute`](Self::execute)) go through the command log and can
///   be undone and redone.
///
/// Cursor movement is never recorded in history.
#[derive(Debug, Default)]
pub struct TextBuffer {
    buffer: GapBuffer,
    history: CommandLog,
}

impl TextBuffer {
    /// Creates a new empty text buffer.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            history: CommandLog::new(),
        }
    }

    /// Creates an empty text buffer with the given initial storage capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: GapBuffer::with_capacity(capacity),
            history: CommandLog::new(),
        }
    }

    /// Creates a text buffer initialized with the given content.
    ///
    /// The cursor starts at offset 0 and the history is empty.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut buf = Self::new();
        buf.load(content);
        buf
    }

    /// Replaces the whole content with `text`, as a freshly loaded document.
    ///
    /// The text is bulk-inserted into storage that keeps the current capacity,
    /// then the cursor is reset to offset 0 and both history stacks are cleared.
    pub fn load(&mut self, text: &str) {
        self.buffer = GapBuffer::with_capacity(self.buffer.capacity());
        self.buffer.insert_str(text);
        self.buffer.move_gap_to(0);
        self.history.clear();
    }

    // ==================== Accessors ====================

    /// Returns the cursor as a flat character offset.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Returns the total character count in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.buffer.char_at(pos)
    }

    /// Returns the entire buffer content as a String.
    pub fn content(&self) -> String {
        self.buffer.linearize()
    }

    /// Alias of [`content`](Self::content), matching the gap buffer's name
    /// for the flatten operation.
    pub fn linearize(&self) -> String {
        self.buffer.linearize()
    }

    /// Read-only access to the underlying storage.
    pub fn gap_buffer(&self) -> &GapBuffer {
        &self.buffer
    }

    // ==================== Raw Edits ====================

    /// Inserts a character at the cursor without recording history.
    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(ch);
    }

    /// Inserts a string at the cursor without recording history.
    pub fn insert_str(&mut self, s: &str) {
        self.buffer.insert_str(s);
    }

    /// Deletes the character before the cursor without recording history.
    ///
    /// Returns the removed character, or None at offset 0.
    pub fn delete_backward(&mut self) -> Option<char> {
        self.buffer.delete_backward()
    }

    // ==================== History ====================

    /// Builds an insert command for `ch` at the cursor.
    pub fn insert_command(&self, ch: char) -> EditCommand {
        EditCommand::insert(self.cursor(), ch)
    }

    /// Builds a backspace command at the cursor, capturing the character it
    /// will remove. Returns None at offset 0, where there is nothing to delete.
    pub fn delete_command(&self) -> Option<EditCommand> {
        let pos = self.cursor();
        let ch = self.buffer.char_at(pos.checked_sub(1)?)?;
        Some(EditCommand::delete(pos, ch))
    }

    /// Applies `command` and records it for undo, clearing the redo stack.
    pub fn execute(&mut self, command: EditCommand) {
        self.history.execute(command, &mut self.buffer);
    }

    /// Undoes the most recent command. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.buffer)
    }

    /// Redoes the most recently undone command. Returns false if there was
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.buffer)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &CommandLog {
        &self.history
    }

    // ==================== Cursor Movement ====================

    /// Moves the cursor by `offset` characters, clamped to the buffer.
    pub fn move_cursor(&mut self, offset: isize) {
        self.buffer.move_cursor(offset);
    }

    /// Moves the cursor to an absolute offset, clamped to the buffer.
    pub fn set_cursor(&mut self, offset: usize) {
        self.buffer.move_gap_to(offset);
    }

    /// Moves the cursor left by one character. Does nothing at offset 0.
    pub fn move_left(&mut self) {
        self.move_cursor(-1);
    }

    /// Moves the cursor right by one character. Does nothing at the end.
    pub fn move_right(&mut self) {
        self.move_cursor(1);
    }

    // ==================== Line Navigation ====================

    /// Builds the line map from the current content.
    pub fn line_map(&self) -> LineMap {
        LineMap::build(self.buffer.chars())
    }

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.line_map().line_count()
    }

    /// Returns the line the cursor is on.
    pub fn current_line(&self) -> usize {
        self.line_map().current_line(self.cursor())
    }

    /// Returns the cursor as a (line, column) position.
    pub fn cursor_position(&self) -> Position {
        self.line_map().position_of(self.cursor())
    }

    /// Moves the cursor to the start of the current line (Home).
    pub fn move_to_line_start(&mut self) {
        let map = self.line_map();
        let line = map.current_line(self.cursor());
        if let Some(range) = map.range(line) {
            self.buffer.move_gap_to(range.start);
        }
    }

    /// Moves the cursor to the end of the current line (End).
    pub fn move_to_line_end(&mut self) {
        let map = self.line_map();
        let line = map.current_line(self.cursor());
        if let Some(range) = map.range(line) {
            self.buffer.move_gap_to(range.end);
        }
    }

    /// Moves the cursor up by one line.
    ///
    /// Moving up from the first line wraps around to the last line.
    pub fn move_up(&mut self) {
        self.move_vertical(-1);
    }

    /// Moves the cursor down by one line.
    ///
    /// Moving down from the last line wraps around to the first line.
    pub fn move_down(&mut self) {
        self.move_vertical(1);
    }

    /// Moves one line up or down, keeping the column when the target line is
    /// long enough and landing on its end otherwise. Navigation is circular.
    fn move_vertical(&mut self, delta: isize) {
        let map = self.line_map();
        let cursor = self.cursor();
        let current = map.current_line(cursor);
        let last = map.last_line();

        let target = match current.checked_add_signed(delta) {
            None => last,
            Some(line) if line > last => 0,
            Some(line) => line,
        };

        let (Some(current_range), Some(target_range)) = (map.range(current), map.range(target))
        else {
            return;
        };

        let col = cursor - current_range.start;
        let new_cursor = if col > target_range.len() {
            target_range.end
        } else {
            target_range.start + col
        };
        self.buffer.move_gap_to(new_cursor);
    }
}
