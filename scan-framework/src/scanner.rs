use crate::context::{ScanContext, Unit};
use crate::table::ConstructTable;
use crate::traits::{ContentType, Trigger};
use common_framework::{Code, Event, Position};

/// The events of one accepted construct, already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recognized {
    pub name: &'static str,
    pub events: Vec<Event>,
}

impl Recognized {
    pub fn start(&self) -> Option<Position> {
        self.events.first().map(|event| event.span.start)
    }

    pub fn end(&self) -> Option<Position> {
        self.events.last().map(|event| event.span.end)
    }
}

/// A region of input that no construct claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Extent {
    pub start: Position,
    pub end: Position,
}

impl Extent {
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }
}

/// One unit of scanner output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "item", rename_all = "snake_case"))]
pub enum Item {
    Construct(Recognized),
    /// A backslash followed by ASCII punctuation.
    Escape(Extent),
    Text(Extent),
    /// A line of paragraph text in flow content.
    Line(Extent),
    /// A line holding only spaces and tabs, or nothing.
    Blank(Extent),
}

/// Drives registered constructs over an input.
///
/// This is a deliberately small host: inline scanning knows character
/// escapes and plain text, flow scanning knows paragraph and blank lines.
/// Everything else is left to the registered constructs.
pub struct Scanner<Ctx>
where
    Ctx: ScanContext,
{
    context: Ctx,
    table: ConstructTable<Ctx>,
}

impl<Ctx> Scanner<Ctx>
where
    Ctx: ScanContext,
{
    /// Creates a new scanner with the given context and constructs.
    pub fn new(context: Ctx, table: ConstructTable<Ctx>) -> Self {
        Self { context, table }
    }

    /// Returns a reference to the context.
    pub fn context(&self) -> &Ctx {
        &self.context
    }

    /// Returns a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut Ctx {
        &mut self.context
    }

    pub fn into_context(self) -> Ctx {
        self.context
    }

    /// Tries every construct that can start at the cursor.
    ///
    /// On success the cursor sits just past the construct and its resolved
    /// events are returned. On failure the cursor and the event sink are
    /// exactly as they were.
    pub fn scan_construct(&mut self, content: ContentType) -> Option<Recognized> {
        let trigger = Trigger::of(self.context.current())?;

        for construct in self.table.candidates(content, trigger) {
            if !construct.previous(&self.context) {
                log::trace!(
                    "{} not allowed after {:?} at {}",
                    construct.name(),
                    self.context.previous_unit(),
                    self.context.position()
                );
                continue;
            }

            let snapshot = self.context.checkpoint();
            let start = self.context.sink().len();
            let offset_before = self.context.cursor().offset();

            if construct.recognize(&mut self.context) {
                if self.context.cursor().offset() == offset_before {
                    log::warn!(
                        "{} accepted without progress at offset {}",
                        construct.name(),
                        offset_before
                    );
                    self.context.restore(snapshot);
                    continue;
                }
                let events = construct.resolve(self.context.sink_mut().drain_from(start));
                log::debug!(
                    "{} recognized at {} ({} events)",
                    construct.name(),
                    snapshot.position(),
                    events.len()
                );
                return Some(Recognized {
                    name: construct.name(),
                    events,
                });
            }

            log::trace!("{} rejected at {}", construct.name(), snapshot.position());
            self.context.restore(snapshot);
        }
        None
    }

    /// Reports whether a construct would be recognized at the cursor,
    /// without moving it.
    pub fn check_construct(&mut self, content: ContentType) -> bool {
        let snapshot = self.context.checkpoint();
        let matched = self.scan_construct(content).is_some();
        self.context.restore(snapshot);
        matched
    }

    /// Scans the remaining input as inline content.
    pub fn scan_text(&mut self) -> Vec<Item> {
        let mut items = Vec::new();
        let mut text_start: Option<Position> = None;

        while self.context.current() != Code::Eof {
            let here = self.context.position();

            if let Some(recognized) = self.scan_construct(ContentType::Text) {
                flush_text(&mut items, &mut text_start, here);
                items.push(Item::Construct(recognized));
                self.context.set_previous_unit(Some(Unit::Construct));
                continue;
            }

            if self.scan_escape() {
                flush_text(&mut items, &mut text_start, here);
                items.push(Item::Escape(Extent {
                    start: here,
                    end: self.context.position(),
                }));
                self.context.set_previous_unit(Some(Unit::CharacterEscape));
                continue;
            }

            text_start.get_or_insert(here);
            self.context.consume();
            self.context.set_previous_unit(Some(Unit::Text));
        }

        let end = self.context.position();
        flush_text(&mut items, &mut text_start, end);
        items
    }

    /// Scans the remaining input as block content, one line at a time.
    ///
    /// A construct may interrupt a running paragraph only if it is recognized
    /// with the interrupt flag set; it is then scanned again without it.
    pub fn scan_flow(&mut self) -> Vec<Item> {
        let mut items = Vec::new();
        let mut in_paragraph = false;

        while self.context.current() != Code::Eof {
            let allowed = if in_paragraph {
                self.context.set_interrupt(true);
                let can_interrupt = self.check_construct(ContentType::Flow);
                self.context.set_interrupt(false);
                can_interrupt
            } else {
                true
            };

            if allowed {
                if let Some(recognized) = self.scan_construct(ContentType::Flow) {
                    items.push(Item::Construct(recognized));
                    in_paragraph = false;
                    self.skip_line_ending();
                    continue;
                }
            }

            let start = self.context.position();
            self.context
                .cursor_mut()
                .advance_while(|code| !code.is_line_end());
            let extent = Extent {
                start,
                end: self.context.position(),
            };
            let blank = extent
                .slice(self.context.cursor().source())
                .chars()
                .all(|ch| ch == ' ' || ch == '\t');

            if blank {
                items.push(Item::Blank(extent));
                in_paragraph = false;
            } else {
                items.push(Item::Line(extent));
                in_paragraph = true;
            }
            self.skip_line_ending();
        }

        items
    }

    fn scan_escape(&mut self) -> bool {
        if self.context.current() != Code::Char('\\') {
            return false;
        }
        self.context.attempt(|ctx| {
            ctx.consume();
            match ctx.current() {
                Code::Char(ch) if ch.is_ascii_punctuation() => {
                    ctx.consume();
                    true
                }
                _ => false,
            }
        })
    }

    fn skip_line_ending(&mut self) {
        if self.context.current() == Code::LineEnding {
            self.context.consume();
        }
    }
}

fn flush_text(items: &mut Vec<Item>, start: &mut Option<Position>, end: Position) {
    if let Some(start) = start.take() {
        items.push(Item::Text(Extent { start, end }));
    }
}
