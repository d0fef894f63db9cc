// Chunk: docs/chunks/line_navigation - Derived line map and line-relative movement

/// Position in the buffer as (line, column) where both are 0-indexed.
///
/// Columns count code points, not bytes or grapheme clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A half-open `[start, end)` character-offset range covering one line,
/// excluding its line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters on the line.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `pos` lies on this line, counting both ends.
    ///
    /// The end offset is where a cursor sits after the last character of
    /// the line, so it belongs to the line for navigation purposes.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_orders_by_line_then_col() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn line_range_contains_both_ends() {
        let range = LineRange::new(3, 6);
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(6));
        assert!(!range.contains(7));
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn empty_line_range_contains_its_offset() {
        let range = LineRange::new(4, 4);
        assert!(range.is_empty());
        assert!(range.contains(4));
    }
}
