//! Math Syntax
//!
//! Recognizers for bracket-delimited math: inline `\( … \)` and block
//! `\[ … \]`. They run on the scan framework and emit enter/exit events for
//! fences, metadata, content and padding; rendering is left to consumers.

pub mod block;
pub mod inline;
pub mod options;
mod partial;
pub mod resolve;

pub use block::{BlockMath, BLOCK_MATH};
pub use inline::{InlineMath, INLINE_MATH};
pub use options::{MathOptions, OptionsError};
pub use resolve::resolve_inline;

use scan_framework::{ConstructTable, ScanContext};

/// Builds a construct table holding the recognizers enabled in `options`.
pub fn math_constructs<Ctx>(options: &MathOptions) -> Result<ConstructTable<Ctx>, OptionsError>
where
    Ctx: ScanContext,
{
    options.validate()?;

    let mut table = ConstructTable::new();
    if options.inline {
        table.register(Box::new(InlineMath));
    }
    if options.block {
        table.register(Box::new(BlockMath::new(options.clone())));
    }
    log::debug!("registered {} math construct(s)", table.len());
    Ok(table)
}
