//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The reducer is the only place where selection transitions happen.
/// It takes the previous state by value and returns the next one, so a
/// reducer that leaves the state alone hands back the same snapshot.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state. Must not have side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
