//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// `reduce` must be a pure function: `(State, Intent) -> State`, with
/// side effects (service calls, navigation) handled by the caller based
/// on the returned state.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
