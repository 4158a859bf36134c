//! Common Framework
//!
//! Data contracts shared by the scanning engine and the recognizers built on
//! it: positions, checkpoints, input codes and the enter/exit event model.

pub mod checkpoint;
pub mod code;
pub mod event;
pub mod position;

pub use checkpoint::Checkpoint;
pub use code::Code;
pub use event::{validate_balanced, Event, EventError, Phase, Span, TokenKind};
pub use position::Position;
