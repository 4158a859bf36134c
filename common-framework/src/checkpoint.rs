use crate::Position;

/// A saved cursor location used for backtracking.
///
/// Restoring a checkpoint rewinds the byte offset and the line/column
/// bookkeeping together, so a rejected speculative match leaves the cursor
/// exactly where it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    offset: usize,
    position: Position,
}

impl Checkpoint {
    /// Creates a new checkpoint at the given byte offset and position.
    pub fn new(offset: usize, position: Position) -> Self {
        Self { offset, position }
    }

    /// Returns the byte offset stored in this checkpoint.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the position stored in this checkpoint.
    pub fn position(&self) -> Position {
        self.position
    }
}
