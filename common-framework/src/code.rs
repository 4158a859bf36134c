/// A single unit of input as seen by a recognizer.
///
/// Line endings are folded into one sentinel so recognizers never need to
/// tell `\n`, `\r` and `\r\n` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Char(char),
    LineEnding,
    Eof,
}

impl Code {
    /// Returns true for a space or a horizontal tab.
    pub fn is_space_or_tab(self) -> bool {
        matches!(self, Code::Char(' ') | Code::Char('\t'))
    }

    /// Returns true for a line ending or the end of input.
    pub fn is_line_end(self) -> bool {
        matches!(self, Code::LineEnding | Code::Eof)
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Code::Char(ch) => Some(ch),
            Code::LineEnding | Code::Eof => None,
        }
    }
}

impl From<char> for Code {
    fn from(ch: char) -> Self {
        match ch {
            '\n' | '\r' => Code::LineEnding,
            other => Code::Char(other),
        }
    }
}
