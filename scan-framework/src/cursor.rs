use common_framework::{Checkpoint, Code, Position};
use std::sync::Arc;

/// A cursor for traversing input text during scanning.
///
/// The cursor hands out [`Code`]s rather than raw characters: `\n`, `\r` and
/// `\r\n` all read as a single [`Code::LineEnding`] and advance the line
/// counter once.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: Arc<str>,
    current: usize,
    position: Position,
}

impl Cursor {
    /// Creates a new cursor from the input string.
    pub fn new<S: Into<String>>(input: S) -> Self {
        let owned = input.into();
        Self::with_arc(Arc::<str>::from(owned))
    }

    /// Creates a cursor from an existing shared buffer.
    pub fn with_arc(buffer: Arc<str>) -> Self {
        Self {
            current: 0,
            position: Position::new(),
            buffer,
        }
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns the whole input.
    pub fn source(&self) -> &str {
        &self.buffer
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.current >= self.buffer.len()
    }

    /// Returns the next raw character without advancing the cursor.
    pub fn peek_char(&self) -> Option<char> {
        self.buffer[self.current..].chars().next()
    }

    /// Returns the code at the cursor.
    pub fn current(&self) -> Code {
        self.peek_char().map_or(Code::Eof, Code::from)
    }

    /// Returns the code just before the cursor, or `None` at the start.
    pub fn previous(&self) -> Option<Code> {
        self.buffer[..self.current].chars().next_back().map(Code::from)
    }

    /// Advances past the current code and returns it.
    ///
    /// At the end of input this is a no-op returning [`Code::Eof`].
    pub fn advance(&mut self) -> Code {
        let Some(ch) = self.peek_char() else {
            return Code::Eof;
        };

        match ch {
            '\r' if self.buffer[self.current + 1..].starts_with('\n') => {
                self.current += 2;
                self.position = self.position.next_line(2);
            }
            '\n' | '\r' => {
                self.current += 1;
                self.position = self.position.next_line(1);
            }
            other => {
                let len = other.len_utf8();
                self.current += len;
                self.position = self.position.next_column(len);
            }
        }

        Code::from(ch)
    }

    /// Advances while the predicate holds for the current code, returning the
    /// number of codes consumed.
    pub fn advance_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(Code) -> bool,
    {
        let mut count = 0;
        while !self.is_eof() && predicate(self.current()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns the text between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.buffer[start..end]
    }

    /// Creates a checkpoint that can be restored later.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.current, self.position)
    }

    /// Restores the cursor to a previous checkpoint.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.current = checkpoint.offset();
        self.position = checkpoint.position();
    }
}
