//! Base trait for intents dispatched to a reducer.

/// Marker trait for intent objects.
///
/// An intent is either a host lifecycle event (inputs supplied) or a
/// user interaction (a card was clicked). Reducers consume intents to
/// produce the next state.
pub trait Intent: Send + 'static {}
