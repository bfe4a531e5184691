//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It must
/// be a pure function: `(State, Intent, Context) -> (State, Effects)`.
/// Anything temporal or fallible (timers, storage) is described by the
/// returned effects and executed by the runtime, never performed inline.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The follow-up work this reducer can request.
    type Effect;

    /// Read-only dependencies supplied per dispatch (sibling state
    /// snapshots, deck source). `()` when the reducer is self-contained.
    type Context<'a>;

    /// Process an intent and return the new state plus effects.
    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        ctx: Self::Context<'_>,
    ) -> (Self::State, Vec<Self::Effect>);
}
