//! Pieces shared by the inline and block recognizers.

use scan_framework::{Code, ScanContext, TokenKind};

/// Consumes up to `max` spaces or tabs as one span of `kind`.
///
/// Returns how many were consumed; no span is emitted for zero.
pub(crate) fn space_or_tab<Ctx>(ctx: &mut Ctx, kind: TokenKind, max: usize) -> usize
where
    Ctx: ScanContext,
{
    if max == 0 || !ctx.current().is_space_or_tab() {
        return 0;
    }

    ctx.enter(kind);
    let mut size = 0;
    while size < max && ctx.current().is_space_or_tab() {
        ctx.consume();
        size += 1;
    }
    ctx.exit(kind);
    size
}

/// Emits the current code as a single-code span of `kind`.
pub(crate) fn one<Ctx>(ctx: &mut Ctx, kind: TokenKind)
where
    Ctx: ScanContext,
{
    ctx.enter(kind);
    ctx.consume();
    ctx.exit(kind);
}

/// Consumes a line ending and matches if the line after it is not lazy.
///
/// Run inside [`ScanContext::attempt`] so a lazy line leaves the line ending
/// unconsumed.
pub(crate) fn non_lazy_continuation<Ctx>(ctx: &mut Ctx) -> bool
where
    Ctx: ScanContext,
{
    if ctx.current() != Code::LineEnding {
        return false;
    }
    one(ctx, TokenKind::LineEnding);
    let line = ctx.position().line;
    let lazy = ctx.is_lazy(line);
    if lazy {
        log::trace!("line {line} is a lazy continuation");
    }
    !lazy
}
