//! Card selection feature module.
//!
//! Tracks which record identifiers are selected.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Immutable selection snapshot
//! - `intent.rs` - Host and user events (Initialize, Toggle)
//! - `reducer.rs` - State transitions (pure, no notifications)

mod intent;
mod reducer;
mod state;

pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::SelectionState;
