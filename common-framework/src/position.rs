/// Represents a point in the source text.
///
/// Positions are only meaningful within a single scan: they mark span
/// boundaries and are never compared across recognizer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, counted in characters)
    pub column: usize,
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of the input.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Returns the position after a character of `len` bytes on the same line.
    pub fn next_column(self, len: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + 1,
            offset: self.offset + len,
        }
    }

    /// Returns the position at the start of the following line, after a
    /// line ending of `len` bytes (1 for `\n` or `\r`, 2 for `\r\n`).
    pub fn next_line(self, len: usize) -> Self {
        Self {
            line: self.line + 1,
            column: 1,
            offset: self.offset + len,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
