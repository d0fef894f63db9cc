// Chunk: docs/chunks/gap_buffer - Gap buffer storage with cursor-as-gap coupling

//! Cursor-coupled gap buffer.
//!
//! Text lives in one `Vec<char>` with a run of free slots (the gap) sitting at
//! the cursor. Typing fills the gap from the left and backspace widens it, so
//! both are O(1). Moving the cursor slides the gap and costs one copy per
//! character crossed.
//!
//! The cursor is not stored separately: it *is* `gap_start`.

use tracing::debug;

/// Capacity used when none (or zero) is requested.
pub const DEFAULT_CAPACITY: usize = 1024;
const GAP_GROWTH_FACTOR: usize = 2;

/// Character storage with the free space kept at the cursor.
///
/// Invariant: `data[..gap_start]` followed by `data[gap_start + gap_len..]` is
/// the visible text, in order.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    /// Storage laid out as `[text before cursor | gap | text after cursor]`.
    data: Vec<char>,
    /// Index where the gap starts (first unused position). Also the cursor.
    gap_start: usize,
    /// Number of free slots starting at `gap_start`.
    gap_len: usize,
}

impl GapBuffer {
    /// Creates a new empty gap buffer with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty gap buffer whose whole storage is gap.
    ///
    /// A capacity of zero falls back to [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };

        Self {
            data: vec!['\0'; capacity],
            gap_start: 0,
            gap_len: capacity,
        }
    }

    /// Returns the logical length of the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the size of the backing storage, gap included.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the cursor offset, which is the start of the gap.
    pub fn cursor(&self) -> usize {
        self.gap_start
    }

    fn gap_end(&self) -> usize {
        self.gap_start + self.gap_len
    }

    /// Moves the cursor by `offset` characters, saturating at both ends.
    pub fn move_cursor(&mut self, offset: isize) {
        let target = self.gap_start.saturating_add_signed(offset).min(self.len());
        self.move_gap_to(target);
    }

    /// Moves the gap to the specified logical position (clamped to `len()`).
    ///
    /// This is O(distance) where distance is the absolute difference between
    /// the current gap position and the target position.
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        let gap_end = self.gap_end();

        if pos < self.gap_start {
            // Move gap left: shift content from [pos..gap_start] to [gap_end - shift..gap_end]
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, gap_end - shift);
        } else if pos > self.gap_start {
            // Move gap right: shift content from [gap_end..gap_end + shift] to [gap_start..]
            let shift = pos - self.gap_start;
            self.data.copy_within(gap_end..gap_end + shift, self.gap_start);
        }
        self.gap_start = pos;
    }

    /// Reallocates so that at least `needed` more characters fit.
    ///
    /// The new capacity is the larger of double the old one and the old one
    /// plus `needed`. The pre-gap segment keeps its indices and the post-gap
    /// segment moves to the tail; `gap_start` does not change.
    fn grow(&mut self, needed: usize) {
        let old_capacity = self.data.len();
        let new_capacity = (old_capacity * GAP_GROWTH_FACTOR).max(old_capacity + needed);
        let gap_end = self.gap_end();
        let post_gap_len = old_capacity - gap_end;

        let mut data = vec!['\0'; new_capacity];
        data[..self.gap_start].copy_from_slice(&self.data[..self.gap_start]);
        data[new_capacity - post_gap_len..].copy_from_slice(&self.data[gap_end..]);

        let len = self.len();
        self.data = data;
        self.gap_len = new_capacity - len;

        debug!(old_capacity, new_capacity, len, "grew gap buffer");
    }

    /// Inserts a character at the cursor; the cursor ends up after it.
    ///
    /// This is O(1) amortized (may grow the buffer occasionally).
    pub fn insert(&mut self, ch: char) {
        if self.gap_len < 1 {
            self.grow(1);
        }
        self.data[self.gap_start] = ch;
        self.gap_start += 1;
        self.gap_len -= 1;
    }

    /// Inserts a string at the cursor. Equivalent to inserting each char in turn.
    pub fn insert_str(&mut self, s: &str) {
        let chars: Vec<char> = s.chars().collect();
        if self.gap_len < chars.len() {
            self.grow(chars.len() - self.gap_len);
        }
        for ch in chars {
            self.insert(ch);
        }
    }

    /// Deletes the character before the gap (backspace).
    ///
    /// The character is absorbed into the gap rather than erased. Returns it,
    /// or `None` if the cursor is at the beginning.
    pub fn delete_backward(&mut self) -> Option<char> {
        if self.gap_start == 0 {
            return None;
        }
        self.gap_start -= 1;
        self.gap_len += 1;
        Some(self.data[self.gap_start])
    }

    /// Returns the character at the given logical position.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len
        };
        Some(self.data[physical])
    }

    /// Returns an iterator over all characters in the buffer.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end()..].iter())
            .copied()
    }

    /// Flattens the two non-gap segments into the visible text.
    pub fn linearize(&self) -> String {
        self.chars().collect()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(text: &str, capacity: usize) -> GapBuffer {
        let mut buf = GapBuffer::with_capacity(capacity);
        buf.insert_str(text);
        buf
    }

    #[test]
    fn test_new_empty() {
        let buf = GapBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_uses_default() {
        let buf = GapBuffer::with_capacity(0);
        assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_insert() {
        let mut buf = GapBuffer::with_capacity(10);
        buf.insert('a');
        assert_eq!(buf.to_string(), "a");
        buf.insert('b');
        buf.insert('c');
        assert_eq!(buf.linearize(), "abc");
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_move_cursor_then_insert() {
        let mut buf = buffer_with("ac", 10);
        buf.move_cursor(-1);
        buf.insert('b');
        assert_eq!(buf.to_string(), "abc");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_delete_backward() {
        let mut buf = buffer_with("abc", 10);
        assert_eq!(buf.delete_backward(), Some('c'));
        assert_eq!(buf.to_string(), "ab");
        buf.move_cursor(-1);
        assert_eq!(buf.delete_backward(), Some('a'));
        assert_eq!(buf.to_string(), "b");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_delete_backward_at_start() {
        let mut buf = buffer_with("abc", 10);
        buf.move_gap_to(0);
        assert_eq!(buf.delete_backward(), None);
        assert_eq!(buf.to_string(), "abc");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_move_cursor_clamps() {
        let mut buf = buffer_with("abc", 10);
        buf.move_cursor(-100);
        assert_eq!(buf.cursor(), 0);
        buf.move_cursor(100);
        assert_eq!(buf.cursor(), 3);
        buf.move_cursor(isize::MIN);
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_move_gap() {
        let mut buf = buffer_with("abcdef", 16);
        assert_eq!(buf.cursor(), 6);

        buf.move_gap_to(3);
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.to_string(), "abcdef");

        buf.move_gap_to(0);
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.to_string(), "abcdef");

        buf.move_gap_to(6);
        assert_eq!(buf.cursor(), 6);
        assert_eq!(buf.to_string(), "abcdef");

        buf.move_gap_to(60);
        assert_eq!(buf.cursor(), 6);
    }

    #[test]
    fn test_growth_preserves_content() {
        let mut buf = buffer_with("abc", 3);
        assert_eq!(buf.capacity(), 3);
        buf.insert('d');
        assert_eq!(buf.to_string(), "abcd");
        assert!(buf.capacity() > 3);
        assert_eq!(buf.cursor(), 4);
    }

    #[test]
    fn test_growth_with_gap_in_middle() {
        let mut buf = buffer_with("abcd", 4);
        buf.move_gap_to(2);
        buf.insert('X');
        assert_eq!(buf.to_string(), "abXcd");
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_insert_str_grows_once_for_large_input() {
        let mut buf = GapBuffer::with_capacity(2);
        buf.insert_str("hello world");
        assert_eq!(buf.to_string(), "hello world");
        assert!(buf.capacity() >= 11);
    }

    #[test]
    fn test_char_at_with_gap_in_middle() {
        let mut buf = buffer_with("hello", 8);
        buf.move_gap_to(2);
        assert_eq!(buf.char_at(0), Some('h'));
        assert_eq!(buf.char_at(1), Some('e'));
        assert_eq!(buf.char_at(2), Some('l'));
        assert_eq!(buf.char_at(3), Some('l'));
        assert_eq!(buf.char_at(4), Some('o'));
        assert_eq!(buf.char_at(5), None);
    }

    #[test]
    fn test_integration_scenario() {
        let mut buf = GapBuffer::with_capacity(5);
        buf.insert_str("helo");
        buf.move_cursor(-1);
        buf.insert('l');
        buf.move_cursor(1);
        buf.insert_str(" world");
        assert_eq!(buf.to_string(), "hello world");

        buf.move_cursor(-5);
        buf.delete_backward();
        buf.delete_backward();
        buf.delete_backward();
        assert_eq!(buf.to_string(), "helworld");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_code_points_not_bytes() {
        let mut buf = buffer_with("héllo", 4);
        assert_eq!(buf.len(), 5);
        buf.move_gap_to(2);
        assert_eq!(buf.delete_backward(), Some('é'));
        assert_eq!(buf.to_string(), "hllo");
    }
}
