use crate::Position;
use thiserror::Error;

/// The label attached to a span.
///
/// This is a flat tag rather than a hierarchy: structure comes from the
/// enter/exit nesting of the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// The whole math construct, fences included.
    MathContainer,
    /// An opening or closing delimiter such as `\(` or `\]`.
    FenceSequence,
    /// Free text after an opening block fence.
    FenceMeta,
    /// One line of block content.
    ContentChunk,
    /// Inline content.
    TextData,
    /// Inline whitespace stripped from either edge of the content.
    TextPadding,
    LineEnding,
    Whitespace,
    /// Indentation in front of a block line.
    LinePrefix,
}

impl TokenKind {
    /// Returns true for the kinds that are never interior content.
    pub fn is_fence(self) -> bool {
        matches!(self, TokenKind::FenceSequence | TokenKind::FenceMeta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Enter,
    Exit,
}

/// A labeled region of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        Self { kind, start, end }
    }

    /// Returns the source text covered by this span.
    ///
    /// `source` must be the input the span was recognized from.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

/// One half of a span in the event stream.
///
/// Both halves carry the complete span: the enter event is patched with the
/// end position when its exit is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub phase: Phase,
    pub span: Span,
}

impl Event {
    pub fn enter(span: Span) -> Self {
        Self {
            phase: Phase::Enter,
            span,
        }
    }

    pub fn exit(span: Span) -> Self {
        Self {
            phase: Phase::Exit,
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.span.kind
    }

    pub fn is_enter(&self) -> bool {
        self.phase == Phase::Enter
    }
}

/// A violation of the enter/exit stack discipline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("event {index}: exit of {kind:?} with no open span")]
    UnexpectedExit { index: usize, kind: TokenKind },
    #[error("event {index}: exit of {found:?} while {expected:?} is open")]
    MismatchedExit {
        index: usize,
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("event {index}: exit of {kind:?} does not cover the span it closes")]
    SpanMismatch { index: usize, kind: TokenKind },
    #[error("{count} span(s) left open, innermost {kind:?}")]
    Unclosed { count: usize, kind: TokenKind },
}

/// Checks that `events` form a well-nested bracketing.
///
/// Every exit must close the most recently opened span, with the same kind
/// and the same start and end, and nothing may be left open.
pub fn validate_balanced(events: &[Event]) -> Result<(), EventError> {
    let mut open: Vec<&Span> = Vec::new();

    for (index, event) in events.iter().enumerate() {
        match event.phase {
            Phase::Enter => open.push(&event.span),
            Phase::Exit => {
                let span = open.pop().ok_or(EventError::UnexpectedExit {
                    index,
                    kind: event.kind(),
                })?;
                if span.kind != event.kind() {
                    return Err(EventError::MismatchedExit {
                        index,
                        expected: span.kind,
                        found: event.kind(),
                    });
                }
                if *span != event.span {
                    return Err(EventError::SpanMismatch {
                        index,
                        kind: event.kind(),
                    });
                }
            }
        }
    }

    match open.last() {
        Some(span) => Err(EventError::Unclosed {
            count: open.len(),
            kind: span.kind,
        }),
        None => Ok(()),
    }
}
