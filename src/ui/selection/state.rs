//! Selection snapshot.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::ui::mvi::UiState;

/// Set of selected record identifiers.
///
/// The set lives behind an `Arc` and is never mutated in place: every
/// effective change builds a fresh set. Two states holding the same
/// allocation are the same snapshot, which lets a renderer detect change
/// with [`SelectionState::same_snapshot`] instead of comparing contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    ids: Arc<BTreeSet<String>>,
}

impl UiState for SelectionState {}

impl SelectionState {
    /// Build a snapshot from identifiers, skipping empty ones.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = ids
            .into_iter()
            .map(Into::into)
            .filter(|id: &String| !id.is_empty())
            .collect();
        Self { ids: Arc::new(ids) }
    }

    pub(super) fn from_set(ids: BTreeSet<String>) -> Self {
        Self { ids: Arc::new(ids) }
    }

    pub(super) fn to_set(&self) -> BTreeSet<String> {
        self.ids.as_ref().clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected identifiers in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// True when both states share one allocation.
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ids, &other.ids)
    }
}
