//! Selection engine.
//!
//! Owns the combined record list, the resolved style and the current
//! selection snapshot. Cards are pulled from it; output updates are pushed
//! from it to the host through a [`FlowNotifier`].
//!
//! ```text
//! initialize ──→ publish partition
//! CardClick ──→ toggle ──→ lastToggledId, lastToggledWasSelected ──→ publish partition
//! ```

use crate::config::StyleConfig;
use crate::flow::{FlowAttributeChange, FlowInputs, FlowNotifier};
use crate::record::Record;
use crate::ui::cards::{derive_cards, CardViewModel};
use crate::ui::events::CardClick;
use crate::ui::mvi::Reducer;
use crate::ui::selection::{SelectionIntent, SelectionReducer, SelectionState};

/// Last values pushed to the host, one field per output attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowOutputs {
    pub currently_selected: Vec<Record>,
    pub currently_unselected: Vec<Record>,
    pub last_toggled_id: String,
    pub last_toggled_was_selected: bool,
}

/// Single-instance selection state manager for a list of record cards.
///
/// Every method takes `&self` or `&mut self`; a toggle runs to completion,
/// notifications included, before the next one can start.
pub struct SelectionEngine<N: FlowNotifier> {
    records: Vec<Record>,
    style: StyleConfig,
    selection: SelectionState,
    notifier: N,
    outputs: FlowOutputs,
}

impl<N: FlowNotifier> SelectionEngine<N> {
    /// Build the engine from the host inputs and publish the initial partition.
    ///
    /// Records are displayed selected-first. Every identified record of
    /// `selected_records` starts selected, including ids that also appear
    /// among `unselected_records`.
    pub fn initialize(inputs: FlowInputs, style: StyleConfig, notifier: N) -> Self {
        let FlowInputs {
            selected_records,
            unselected_records,
        } = inputs;

        let selected_ids: Vec<String> = selected_records
            .iter()
            .filter_map(|r| r.id().map(str::to_string))
            .collect();
        let selection = SelectionReducer::reduce(
            SelectionState::default(),
            SelectionIntent::Initialize {
                selected: selected_ids,
            },
        );

        let mut records = selected_records;
        records.extend(unselected_records);

        tracing::info!(
            records = records.len(),
            selected = selection.len(),
            locked = style.selection_locked,
            "selection engine initialized"
        );

        let mut engine = Self {
            records,
            style,
            selection,
            notifier,
            outputs: FlowOutputs::default(),
        };
        engine.recompute_and_publish();
        engine
    }

    /// Cards for every record, in display order.
    pub fn view_models(&self) -> Vec<CardViewModel> {
        derive_cards(&self.records, &self.selection, &self.style)
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn header_text(&self) -> &str {
        &self.style.header_text
    }

    pub fn sub_header_text(&self) -> &str {
        &self.style.sub_header_text
    }

    /// Current selection snapshot. Replaced, never mutated, on each toggle.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Combined records, selected input first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn outputs(&self) -> &FlowOutputs {
        &self.outputs
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    /// Route a card click to [`toggle`](Self::toggle).
    pub fn handle_card_click(&mut self, click: CardClick) -> Option<bool> {
        self.toggle(click.record_id.as_deref().unwrap_or_default())
    }

    /// Flip the selection of `record_id`.
    ///
    /// Returns `Some(true)` if the id was just selected, `Some(false)` if it
    /// was just deselected, and `None` when the toggle was ignored because
    /// selection is locked or the id is empty. Ignored toggles send nothing.
    pub fn toggle(&mut self, record_id: &str) -> Option<bool> {
        if self.style.selection_locked {
            tracing::debug!(record_id, "toggle ignored: selection locked");
            return None;
        }
        if record_id.is_empty() {
            tracing::debug!("toggle ignored: card has no record id");
            return None;
        }

        let previous = std::mem::take(&mut self.selection);
        self.selection = SelectionReducer::reduce(
            previous,
            SelectionIntent::Toggle {
                record_id: record_id.to_string(),
            },
        );
        let was_selected = self.selection.contains(record_id);
        tracing::debug!(record_id, was_selected, "card toggled");

        self.publish(FlowAttributeChange::LastToggledId(record_id.to_string()));
        self.publish(FlowAttributeChange::LastToggledWasSelected(was_selected));
        self.recompute_and_publish();

        Some(was_selected)
    }

    /// Re-derive the partition from scratch and push both halves.
    pub fn recompute_and_publish(&mut self) {
        let (selected, unselected) = partition(&self.records, &self.selection);
        tracing::debug!(
            selected = selected.len(),
            unselected = unselected.len(),
            "publishing partition"
        );
        self.publish(FlowAttributeChange::CurrentlySelected(selected));
        self.publish(FlowAttributeChange::CurrentlyUnselected(unselected));
    }

    fn publish(&mut self, change: FlowAttributeChange) {
        match &change {
            FlowAttributeChange::CurrentlySelected(records) => {
                self.outputs.currently_selected = records.clone();
            }
            FlowAttributeChange::CurrentlyUnselected(records) => {
                self.outputs.currently_unselected = records.clone();
            }
            FlowAttributeChange::LastToggledId(id) => {
                self.outputs.last_toggled_id = id.clone();
            }
            FlowAttributeChange::LastToggledWasSelected(flag) => {
                self.outputs.last_toggled_was_selected = *flag;
            }
        }
        self.notifier.notify(change);
    }
}

/// Split identified records into (selected, unselected), keeping input order.
///
/// Records without an identifier, absent ones included, land in neither half.
pub fn partition(records: &[Record], selection: &SelectionState) -> (Vec<Record>, Vec<Record>) {
    let mut selected = Vec::new();
    let mut unselected = Vec::new();
    for record in records {
        let Some(id) = record.id() else {
            continue;
        };
        if selection.contains(id) {
            selected.push(record.clone());
        } else {
            unselected.push(record.clone());
        }
    }
    (selected, unselected)
}
