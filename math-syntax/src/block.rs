//! Block math fenced by `\[` and `\]`.
//!
//! ```text
//! \[ optional meta
//! content lines
//! \]
//! ```
//!
//! The opening line may carry metadata, which must not contain `]`. The
//! block must be closed by a line holding only `\]` (plus indentation and
//! trailing whitespace); an unterminated block is rejected. Lines after the
//! opening are checked against the laziness table before they are taken.

use crate::options::MathOptions;
use crate::partial::{non_lazy_continuation, space_or_tab};
use scan_framework::{
    run, Code, ContentType, Construct, ScanContext, StateMachine, Step, TokenKind, Trigger,
};

/// Name reported for recognized block math.
pub const BLOCK_MATH: &str = "block-math";

/// The `\[ … \]` construct.
#[derive(Debug, Clone, Default)]
pub struct BlockMath {
    options: MathOptions,
}

impl BlockMath {
    pub fn new(options: MathOptions) -> Self {
        Self { options }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Start,
    OpenBracket,
    MetaBefore,
    Meta,
    MetaAfter,
    Continuation,
    ContentStart,
    BeforeChunk,
    Chunk,
    After,
}

/// One run of the block recognizer.
#[derive(Debug)]
struct BlockRun {
    /// Indentation allowed in front of either fence.
    max_indent: usize,
    /// Indentation of the opening fence, stripped from content lines.
    indent: usize,
    found_closing: bool,
}

impl<Ctx> StateMachine<Ctx> for BlockRun
where
    Ctx: ScanContext,
{
    type State = BlockState;

    fn start(&self) -> BlockState {
        BlockState::Start
    }

    fn step(&mut self, ctx: &mut Ctx, state: BlockState) -> Step<BlockState> {
        match state {
            BlockState::Start => {
                ctx.enter(TokenKind::MathContainer);
                self.indent = space_or_tab(ctx, TokenKind::LinePrefix, self.max_indent);
                if ctx.current() != Code::Char('\\') {
                    return Step::Nok;
                }
                ctx.enter(TokenKind::FenceSequence);
                ctx.consume();
                Step::Next(BlockState::OpenBracket)
            }
            BlockState::OpenBracket => {
                if ctx.current() != Code::Char('[') {
                    return Step::Nok;
                }
                ctx.consume();
                ctx.exit(TokenKind::FenceSequence);
                Step::Next(BlockState::MetaBefore)
            }
            BlockState::MetaBefore => {
                space_or_tab(ctx, TokenKind::Whitespace, usize::MAX);
                match ctx.current() {
                    Code::LineEnding | Code::Eof => Step::Next(BlockState::MetaAfter),
                    Code::Char(']') => Step::Nok,
                    Code::Char(_) => {
                        ctx.enter(TokenKind::FenceMeta);
                        Step::Next(BlockState::Meta)
                    }
                }
            }
            BlockState::Meta => match ctx.current() {
                Code::LineEnding | Code::Eof => {
                    ctx.exit(TokenKind::FenceMeta);
                    Step::Next(BlockState::MetaAfter)
                }
                Code::Char(']') => Step::Nok,
                code if code.is_space_or_tab() => {
                    let interior = ctx.check(|ctx| {
                        ctx.cursor_mut().advance_while(Code::is_space_or_tab);
                        !ctx.current().is_line_end()
                    });
                    if interior {
                        ctx.cursor_mut().advance_while(Code::is_space_or_tab);
                        Step::Next(BlockState::Meta)
                    } else {
                        ctx.exit(TokenKind::FenceMeta);
                        Step::Next(BlockState::MetaBefore)
                    }
                }
                Code::Char(_) => {
                    ctx.consume();
                    Step::Next(BlockState::Meta)
                }
            },
            BlockState::MetaAfter => {
                if ctx.interrupt() {
                    ctx.exit(TokenKind::MathContainer);
                    return Step::Ok;
                }
                Step::Next(BlockState::Continuation)
            }
            BlockState::Continuation => {
                if !ctx.attempt(non_lazy_continuation) {
                    return Step::Next(BlockState::After);
                }
                let max_indent = self.max_indent;
                if ctx.attempt(|ctx| closing_fence(ctx, max_indent)) {
                    self.found_closing = true;
                    return Step::Next(BlockState::After);
                }
                Step::Next(BlockState::ContentStart)
            }
            BlockState::ContentStart => {
                space_or_tab(ctx, TokenKind::LinePrefix, self.indent);
                Step::Next(BlockState::BeforeChunk)
            }
            BlockState::BeforeChunk => match ctx.current() {
                Code::Eof => Step::Next(BlockState::After),
                Code::LineEnding => Step::Next(BlockState::Continuation),
                Code::Char(_) => {
                    ctx.enter(TokenKind::ContentChunk);
                    Step::Next(BlockState::Chunk)
                }
            },
            BlockState::Chunk => {
                ctx.cursor_mut().advance_while(|code| !code.is_line_end());
                ctx.exit(TokenKind::ContentChunk);
                Step::Next(BlockState::BeforeChunk)
            }
            BlockState::After => {
                if !self.found_closing {
                    log::trace!("block math without closing fence at {}", ctx.position());
                    return Step::Nok;
                }
                ctx.exit(TokenKind::MathContainer);
                Step::Ok
            }
        }
    }
}

/// Matches `\]` alone on a line, after at most `max_indent` spaces or tabs.
fn closing_fence<Ctx>(ctx: &mut Ctx, max_indent: usize) -> bool
where
    Ctx: ScanContext,
{
    space_or_tab(ctx, TokenKind::LinePrefix, max_indent);
    if ctx.current() != Code::Char('\\') {
        return false;
    }
    ctx.enter(TokenKind::FenceSequence);
    ctx.consume();
    if ctx.current() != Code::Char(']') {
        return false;
    }
    ctx.consume();
    ctx.exit(TokenKind::FenceSequence);
    space_or_tab(ctx, TokenKind::Whitespace, usize::MAX);
    ctx.current().is_line_end()
}

impl<Ctx> Construct<Ctx> for BlockMath
where
    Ctx: ScanContext,
{
    fn name(&self) -> &'static str {
        BLOCK_MATH
    }

    fn content(&self) -> ContentType {
        ContentType::Flow
    }

    fn triggers(&self) -> &'static [Trigger] {
        &[Trigger::Backslash, Trigger::SpaceOrTab]
    }

    fn recognize(&self, ctx: &mut Ctx) -> bool {
        let mut block = BlockRun {
            max_indent: self.options.max_fence_indent(),
            indent: 0,
            found_closing: false,
        };
        run(ctx, &mut block)
    }
}
