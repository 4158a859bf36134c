//! Scan Framework
//!
//! A small character-level scanning engine with speculative matching.
//! Constructs drive a [`ScanContext`] through enter/exit/consume calls;
//! rejected attempts are rolled back through checkpoints.

pub mod context;
pub mod cursor;
pub mod laziness;
pub mod machine;
pub mod scanner;
pub mod sink;
pub mod table;
pub mod traits;

pub use common_framework::{
    validate_balanced, Code, Event, EventError, Phase, Position, Span, TokenKind,
};
pub use context::{DefaultContext, ScanContext, Snapshot, Unit};
pub use cursor::Cursor;
pub use laziness::{LazinessOracle, NoLaziness};
pub use machine::{run, StateMachine, Step};
pub use scanner::{Extent, Item, Recognized, Scanner};
pub use sink::{EventSink, SinkMark};
pub use table::ConstructTable;
pub use traits::{ContentType, Construct, Trigger};
