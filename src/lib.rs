//! Selection-state manager for a list of toggle-able record cards.
//!
//! A host flow hands over two record collections (already selected and
//! not yet selected). The [`SelectionEngine`](engine::SelectionEngine)
//! shows them as one list of cards, flips selection on clicks, and pushes
//! the current partition back through a [`FlowNotifier`](flow::FlowNotifier).

pub mod config;
pub mod engine;
pub mod flow;
pub mod logging;
pub mod record;
pub mod ui;
