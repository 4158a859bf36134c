use common_framework::{Event, Position, Span, TokenKind};

/// Collects the events emitted during a scan and tracks which spans are open.
///
/// Spans are closed strictly last-in first-out. Closing a span patches its
/// enter event with the end position, so both halves of a span agree.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Vec<Event>,
    /// Indices into `events` of the enter events still waiting for an exit.
    open: Vec<usize>,
}

/// A rollback point for an [`EventSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkMark {
    len: usize,
    open: Vec<usize>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a span of `kind` at `at` and returns the index of its enter event.
    pub fn enter(&mut self, kind: TokenKind, at: Position) -> usize {
        let index = self.events.len();
        self.events.push(Event::enter(Span::new(kind, at, at)));
        self.open.push(index);
        index
    }

    /// Closes the innermost open span, which must be of `kind`.
    ///
    /// # Panics
    ///
    /// Panics when no span is open or the innermost one has another kind.
    /// Recognizers that trip this have a bug in their state machine.
    pub fn exit(&mut self, kind: TokenKind, at: Position) {
        let Some(index) = self.open.pop() else {
            panic!("EventSink: exit of {kind:?} with no open span");
        };
        let enter = &mut self.events[index];
        assert_eq!(
            enter.kind(),
            kind,
            "EventSink: exit of {kind:?} while {:?} is open",
            enter.kind()
        );
        enter.span.end = at;
        let span = enter.span;
        self.events.push(Event::exit(span));
    }

    /// Relabels the innermost open span.
    pub fn retag_open(&mut self, kind: TokenKind) {
        if let Some(&index) = self.open.last() {
            self.events[index].span.kind = kind;
        }
    }

    /// Returns the kind of the innermost open span.
    pub fn innermost(&self) -> Option<TokenKind> {
        self.open.last().map(|&index| self.events[index].kind())
    }

    pub fn open_depth(&self) -> usize {
        self.open.len()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Records the current state for a later [`EventSink::rollback`].
    pub fn mark(&self) -> SinkMark {
        SinkMark {
            len: self.events.len(),
            open: self.open.clone(),
        }
    }

    /// Discards everything emitted since `mark` was taken.
    pub fn rollback(&mut self, mark: SinkMark) {
        self.events.truncate(mark.len);
        self.open = mark.open;
        // Spans that were open at the mark and got closed afterwards carry a
        // stale end; it is rewritten when they close again.
    }

    /// Removes and returns every event from `start` on.
    ///
    /// # Panics
    ///
    /// Panics if a span opened at or after `start` is still open.
    pub fn drain_from(&mut self, start: usize) -> Vec<Event> {
        assert!(
            self.open.iter().all(|&index| index < start),
            "EventSink: draining events with open spans"
        );
        self.events.split_off(start)
    }

    /// Consumes the sink, returning all events.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_framework::{validate_balanced, Phase};

    #[test]
    fn test_exit_patches_enter() {
        let mut sink = EventSink::new();
        let index = sink.enter(TokenKind::TextData, Position::at(1, 1, 0));
        sink.exit(TokenKind::TextData, Position::at(1, 4, 3));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[index].span.end.offset, 3);
        assert_eq!(events[1].phase, Phase::Exit);
        assert_eq!(events[0].span, events[1].span);
    }

    #[test]
    #[should_panic(expected = "while FenceSequence is open")]
    fn test_mismatched_exit_panics() {
        let mut sink = EventSink::new();
        sink.enter(TokenKind::MathContainer, Position::new());
        sink.enter(TokenKind::FenceSequence, Position::new());
        sink.exit(TokenKind::MathContainer, Position::new());
    }

    #[test]
    fn test_rollback_restores_open_spans() {
        let mut sink = EventSink::new();
        sink.enter(TokenKind::MathContainer, Position::new());
        let mark = sink.mark();

        sink.enter(TokenKind::FenceSequence, Position::at(1, 1, 0));
        sink.exit(TokenKind::FenceSequence, Position::at(1, 2, 1));
        sink.exit(TokenKind::MathContainer, Position::at(1, 2, 1));
        assert_eq!(sink.open_depth(), 0);

        sink.rollback(mark);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.innermost(), Some(TokenKind::MathContainer));

        sink.exit(TokenKind::MathContainer, Position::at(1, 3, 2));
        assert!(validate_balanced(sink.events()).is_ok());
        assert_eq!(sink.events()[0].span.end.offset, 2);
    }

    #[test]
    fn test_retag_open_changes_exit_kind() {
        let mut sink = EventSink::new();
        sink.enter(TokenKind::FenceSequence, Position::new());
        sink.retag_open(TokenKind::TextData);
        sink.exit(TokenKind::TextData, Position::at(1, 2, 1));
        assert!(sink.events().iter().all(|e| e.kind() == TokenKind::TextData));
    }

    #[test]
    fn test_drain_from_splits_tail() {
        let mut sink = EventSink::new();
        sink.enter(TokenKind::LineEnding, Position::new());
        sink.exit(TokenKind::LineEnding, Position::at(2, 1, 1));
        sink.enter(TokenKind::TextData, Position::at(2, 1, 1));
        sink.exit(TokenKind::TextData, Position::at(2, 2, 2));

        let tail = sink.drain_from(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(sink.len(), 2);
    }
}
