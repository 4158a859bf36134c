//! Inline math delimited by `\(` and `\)`.
//!
//! The content may span lines. A backslash inside it only closes the
//! construct when followed by `)`; otherwise it is kept as data. Reaching the
//! end of input first is a rejection, never a fallback to literal text.

use crate::partial::one;
use crate::resolve::resolve_inline;
use scan_framework::{
    run, Code, ContentType, Construct, Event, ScanContext, StateMachine, Step, TokenKind, Trigger,
    Unit,
};

/// Name reported for recognized inline math.
pub const INLINE_MATH: &str = "inline-math";

/// The `\( … \)` construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineMath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineState {
    Start,
    OpenParen,
    Between,
    Data,
    CloseAttempt,
}

/// One run of the inline recognizer.
#[derive(Debug)]
struct InlineRun;

impl<Ctx> StateMachine<Ctx> for InlineRun
where
    Ctx: ScanContext,
{
    type State = InlineState;

    fn start(&self) -> InlineState {
        InlineState::Start
    }

    fn step(&mut self, ctx: &mut Ctx, state: InlineState) -> Step<InlineState> {
        match state {
            InlineState::Start => {
                if ctx.current() != Code::Char('\\') {
                    return Step::Nok;
                }
                ctx.enter(TokenKind::MathContainer);
                ctx.enter(TokenKind::FenceSequence);
                ctx.consume();
                Step::Next(InlineState::OpenParen)
            }
            InlineState::OpenParen => {
                if ctx.current() != Code::Char('(') {
                    return Step::Nok;
                }
                ctx.consume();
                ctx.exit(TokenKind::FenceSequence);
                Step::Next(InlineState::Between)
            }
            InlineState::Between => match ctx.current() {
                Code::Eof => Step::Nok,
                Code::Char(' ') => {
                    one(ctx, TokenKind::Whitespace);
                    Step::Next(InlineState::Between)
                }
                Code::LineEnding => {
                    one(ctx, TokenKind::LineEnding);
                    Step::Next(InlineState::Between)
                }
                Code::Char('\\') => {
                    ctx.enter(TokenKind::FenceSequence);
                    ctx.consume();
                    Step::Next(InlineState::CloseAttempt)
                }
                Code::Char(_) => {
                    ctx.enter(TokenKind::TextData);
                    Step::Next(InlineState::Data)
                }
            },
            InlineState::Data => match ctx.current() {
                Code::Eof | Code::LineEnding | Code::Char(' ') | Code::Char('\\') => {
                    ctx.exit(TokenKind::TextData);
                    Step::Next(InlineState::Between)
                }
                Code::Char(_) => {
                    ctx.consume();
                    Step::Next(InlineState::Data)
                }
            },
            InlineState::CloseAttempt => match ctx.current() {
                Code::Char(')') => {
                    ctx.consume();
                    ctx.exit(TokenKind::FenceSequence);
                    ctx.exit(TokenKind::MathContainer);
                    Step::Ok
                }
                Code::Eof => Step::Nok,
                _ => {
                    // Not a closing fence: the backslash is literal data.
                    ctx.retag_open(TokenKind::TextData);
                    Step::Next(InlineState::Data)
                }
            },
        }
    }
}

impl<Ctx> Construct<Ctx> for InlineMath
where
    Ctx: ScanContext,
{
    fn name(&self) -> &'static str {
        INLINE_MATH
    }

    fn content(&self) -> ContentType {
        ContentType::Text
    }

    fn triggers(&self) -> &'static [Trigger] {
        &[Trigger::Backslash]
    }

    /// Refuses to start right after an escaped backslash (`\\`).
    fn previous(&self, ctx: &Ctx) -> bool {
        !(ctx.previous() == Some(Code::Char('\\'))
            && ctx.previous_unit() == Some(Unit::CharacterEscape))
    }

    fn recognize(&self, ctx: &mut Ctx) -> bool {
        run(ctx, &mut InlineRun)
    }

    fn resolve(&self, events: Vec<Event>) -> Vec<Event> {
        resolve_inline(events)
    }
}
