use crate::context::ScanContext;
use common_framework::{Code, Event};

/// The scanning context a construct belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Block-level content, offered at the start of a line.
    Flow,
    /// Inline content, offered at any character.
    Text,
}

/// The category of code a construct can start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Backslash,
    SpaceOrTab,
}

impl Trigger {
    /// Classifies the code at the cursor, or returns `None` if no construct
    /// can start on it.
    pub fn of(code: Code) -> Option<Self> {
        match code {
            Code::Char('\\') => Some(Trigger::Backslash),
            Code::Char(' ') | Code::Char('\t') => Some(Trigger::SpaceOrTab),
            _ => None,
        }
    }
}

/// A recognizer registered with the scanner.
///
/// The scanner only calls [`Construct::recognize`] when the current code maps
/// to one of [`Construct::triggers`] and [`Construct::previous`] allows it.
/// On a `false` return the scanner rewinds everything the run did.
pub trait Construct<Ctx>
where
    Ctx: ScanContext,
{
    /// Returns a short name used in logs and in recognized results.
    fn name(&self) -> &'static str;

    fn content(&self) -> ContentType;

    /// Returns the trigger categories this construct can start on.
    fn triggers(&self) -> &'static [Trigger];

    /// Checks the unit before the cursor. Defaults to allowing any.
    fn previous(&self, ctx: &Ctx) -> bool {
        let _ = ctx;
        true
    }

    /// Attempts to recognize the construct at the cursor.
    fn recognize(&self, ctx: &mut Ctx) -> bool;

    /// Rewrites the events of an accepted run. Defaults to the identity.
    fn resolve(&self, events: Vec<Event>) -> Vec<Event> {
        events
    }

    /// Returns the priority of this construct. Higher priority constructs
    /// are tried first. Default priority is 0.
    fn priority(&self) -> i32 {
        0
    }
}
