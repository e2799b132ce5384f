//! Base trait for reducer-owned state.

/// Marker trait for state snapshots.
///
/// States are cloned rather than mutated, carry everything a view needs,
/// and compare with `PartialEq` so a host can tell whether a dispatch
/// changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
