//! Reducer for card selection.

use crate::ui::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::SelectionState;

/// Reducer for selection transitions.
///
/// Pure function: notifying the host about a toggle is the engine's job,
/// done around the dispatch call. The lock gate also lives in the engine.
pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Initialize { selected } => SelectionState::from_ids(selected),

            SelectionIntent::Toggle { record_id } => {
                if record_id.is_empty() {
                    return state;
                }
                let mut ids = state.to_set();
                if !ids.remove(&record_id) {
                    ids.insert(record_id);
                }
                SelectionState::from_set(ids)
            }
        }
    }
}
