// Chunk: docs/chunks/line_navigation - Derived line map and line-relative movement

//! Line map for translating between flat offsets and line coordinates.
//!
//! The map is derived: it is built from a full scan of the buffer's content
//! whenever a line-relative command needs it, and never updated incrementally.
//! Navigation commands are rare next to character edits, so the O(n) rebuild
//! is paid only when it is used.

use crate::types::{LineRange, Position};

/// Table of line number to `[start, end)` offset range.
///
/// Ranges are contiguous and in offset order: each range is followed by one
/// line break, and the next range starts right after it. There is always at
/// least one line (an empty buffer has the single range `[0, 0)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMap {
    ranges: Vec<LineRange>,
}

impl LineMap {
    /// Builds the map by splitting `content` on `'\n'`.
    ///
    /// This is O(n) where n is the content length.
    pub fn build<I>(content: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut ranges = Vec::new();
        let mut line_start = 0;
        let mut offset = 0;

        for ch in content {
            if ch == '\n' {
                ranges.push(LineRange::new(line_start, offset));
                line_start = offset + 1;
            }
            offset += 1;
        }
        ranges.push(LineRange::new(line_start, offset));

        Self { ranges }
    }

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.ranges.len()
    }

    /// Index of the last line.
    pub fn last_line(&self) -> usize {
        self.ranges.len() - 1
    }

    /// Returns the range of the given line, or None if out of bounds.
    pub fn range(&self, line: usize) -> Option<LineRange> {
        self.ranges.get(line).copied()
    }

    pub fn ranges(&self) -> &[LineRange] {
        &self.ranges
    }

    /// Returns the line whose range contains `pos`, inclusive on both ends.
    ///
    /// When several entries match, the last one scanned wins. Offsets beyond
    /// every range resolve to line 0.
    pub fn current_line(&self, pos: usize) -> usize {
        self.ranges
            .iter()
            .rposition(|range| range.contains(pos))
            .unwrap_or(0)
    }

    /// Converts a flat offset to a (line, column) position.
    pub fn position_of(&self, offset: usize) -> Position {
        let line = self.current_line(offset);
        let col = offset.saturating_sub(self.ranges[line].start);
        Position::new(line, col)
    }

    /// Converts a (line, column) position back to a flat offset.
    ///
    /// The line is clamped to the last line and the column to the line's length.
    pub fn offset_of(&self, pos: Position) -> usize {
        let range = self.ranges[pos.line.min(self.last_line())];
        range.start + pos.col.min(range.len())
    }
}
