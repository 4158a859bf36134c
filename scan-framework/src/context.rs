use crate::cursor::Cursor;
use crate::laziness::{LazinessOracle, NoLaziness};
use crate::sink::{EventSink, SinkMark};
use common_framework::{Checkpoint, Code, Position, TokenKind};

/// The kind of unit the host recognized just before the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A backslash escape such as `\*` or `\\`.
    CharacterEscape,
    /// Plain text.
    Text,
    /// A registered construct.
    Construct,
}

/// A rollback point covering both the cursor and the emitted events.
#[derive(Debug, Clone)]
pub struct Snapshot {
    cursor: Checkpoint,
    sink: SinkMark,
}

impl Snapshot {
    pub fn position(&self) -> Position {
        self.cursor.position()
    }
}

/// Context for scanning operations.
///
/// Recognizers are generic over this trait. Implementors supply storage
/// (cursor, event sink) and the read-only facts owned by the enclosing
/// tokenizer; everything a recognizer calls is provided on top of those.
pub trait ScanContext {
    /// Returns a reference to the cursor.
    fn cursor(&self) -> &Cursor;

    /// Returns a mutable reference to the cursor.
    fn cursor_mut(&mut self) -> &mut Cursor;

    fn sink(&self) -> &EventSink;

    fn sink_mut(&mut self) -> &mut EventSink;

    /// Returns whether `line` is a lazy continuation of an enclosing container.
    fn is_lazy(&self, line: usize) -> bool;

    /// Returns whether the current line would interrupt another block.
    fn interrupt(&self) -> bool;

    fn set_interrupt(&mut self, interrupt: bool);

    /// Returns the unit the host recognized just before the cursor.
    fn previous_unit(&self) -> Option<Unit>;

    fn set_previous_unit(&mut self, unit: Option<Unit>);

    /// Returns the current position.
    fn position(&self) -> Position {
        self.cursor().position()
    }

    /// Returns the code at the cursor.
    fn current(&self) -> Code {
        self.cursor().current()
    }

    /// Returns the code before the cursor.
    fn previous(&self) -> Option<Code> {
        self.cursor().previous()
    }

    /// Advances past the current code, attributing it to the innermost open span.
    fn consume(&mut self) -> Code {
        self.cursor_mut().advance()
    }

    /// Opens a span at the current position.
    fn enter(&mut self, kind: TokenKind) -> usize {
        let at = self.position();
        self.sink_mut().enter(kind, at)
    }

    /// Closes the innermost span at the current position.
    fn exit(&mut self, kind: TokenKind) {
        let at = self.position();
        self.sink_mut().exit(kind, at);
    }

    /// Relabels the innermost open span.
    fn retag_open(&mut self, kind: TokenKind) {
        self.sink_mut().retag_open(kind);
    }

    /// Creates a snapshot of the current state.
    fn checkpoint(&self) -> Snapshot {
        Snapshot {
            cursor: self.cursor().checkpoint(),
            sink: self.sink().mark(),
        }
    }

    /// Restores the cursor and discards events emitted since `snapshot`.
    fn restore(&mut self, snapshot: Snapshot) {
        self.cursor_mut().restore(snapshot.cursor);
        self.sink_mut().rollback(snapshot.sink);
    }

    /// Runs `f` speculatively.
    ///
    /// When `f` returns `true` its effects are kept; otherwise the cursor and
    /// the event sink are rewound before this returns.
    fn attempt<F>(&mut self, f: F) -> bool
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> bool,
    {
        let snapshot = self.checkpoint();
        if f(self) {
            true
        } else {
            self.restore(snapshot);
            false
        }
    }

    /// Runs `f` and always rewinds, reporting only whether it matched.
    fn check<F>(&mut self, f: F) -> bool
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> bool,
    {
        let snapshot = self.checkpoint();
        let matched = f(self);
        self.restore(snapshot);
        matched
    }
}

/// A simple default context implementation.
pub struct DefaultContext {
    cursor: Cursor,
    sink: EventSink,
    laziness: Box<dyn LazinessOracle>,
    interrupt: bool,
    previous_unit: Option<Unit>,
}

impl DefaultContext {
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            cursor: Cursor::new(input),
            sink: EventSink::new(),
            laziness: Box::new(NoLaziness),
            interrupt: false,
            previous_unit: None,
        }
    }

    /// Replaces the laziness table consulted by block recognizers.
    pub fn with_laziness<L>(mut self, laziness: L) -> Self
    where
        L: LazinessOracle + 'static,
    {
        self.laziness = Box::new(laziness);
        self
    }

    /// Consumes the context, returning every event still in the sink.
    pub fn into_events(self) -> Vec<common_framework::Event> {
        self.sink.into_events()
    }
}

impl std::fmt::Debug for DefaultContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultContext")
            .field("cursor", &self.cursor)
            .field("sink", &self.sink)
            .field("interrupt", &self.interrupt)
            .field("previous_unit", &self.previous_unit)
            .finish_non_exhaustive()
    }
}

impl ScanContext for DefaultContext {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn sink(&self) -> &EventSink {
        &self.sink
    }

    fn sink_mut(&mut self) -> &mut EventSink {
        &mut self.sink
    }

    fn is_lazy(&self, line: usize) -> bool {
        self.laziness.is_lazy(line)
    }

    fn interrupt(&self) -> bool {
        self.interrupt
    }

    fn set_interrupt(&mut self, interrupt: bool) {
        self.interrupt = interrupt;
    }

    fn previous_unit(&self) -> Option<Unit> {
        self.previous_unit
    }

    fn set_previous_unit(&mut self, unit: Option<Unit>) {
        self.previous_unit = unit;
    }
}
