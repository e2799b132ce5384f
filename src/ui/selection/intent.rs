//! Intents for the selection reducer.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the selection reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionIntent {
    /// Host supplied its inputs. Replaces the whole selection with `selected`.
    /// Empty identifiers are skipped.
    Initialize { selected: Vec<String> },

    /// A card was clicked. Adds the id if absent, removes it if present.
    /// An empty id leaves the state untouched.
    Toggle { record_id: String },
}

impl Intent for SelectionIntent {}
