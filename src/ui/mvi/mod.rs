//! Model-View-Intent (MVI) primitives for the card selection layer.
//!
//! # Architecture
//!
//! ```text
//! CardClick ──→ Intent ──→ Reducer ──→ State ──→ CardViewModel
//!     ↑                                              │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced on every change
//! - **Intent**: host lifecycle events and card interactions
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
