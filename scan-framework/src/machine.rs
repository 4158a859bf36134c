/// The outcome of one state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<S> {
    /// Continue in the given state.
    Next(S),
    /// The construct is recognized.
    Ok,
    /// The construct does not match here.
    Nok,
}

/// A recognizer expressed as an explicit state machine.
///
/// The implementing struct holds whatever the run needs to remember across
/// states (indent sizes, flags); `State` names where the run currently is.
pub trait StateMachine<Ctx> {
    type State: Copy + std::fmt::Debug;

    /// Returns the entry state.
    fn start(&self) -> Self::State;

    /// Performs one transition from `state`.
    fn step(&mut self, ctx: &mut Ctx, state: Self::State) -> Step<Self::State>;
}

/// Drives `machine` until it reaches a terminal step.
///
/// Returns `true` on [`Step::Ok`]. Rolling back a failed run is the caller's
/// job, usually through [`crate::ScanContext::attempt`].
pub fn run<Ctx, M>(ctx: &mut Ctx, machine: &mut M) -> bool
where
    M: StateMachine<Ctx>,
{
    let mut state = machine.start();
    loop {
        match machine.step(ctx, state) {
            Step::Next(next) => state = next,
            Step::Ok => return true,
            Step::Nok => {
                log::trace!("rejected in state {state:?}");
                return false;
            }
        }
    }
}
