//! Shared fixtures for integration tests.

#![allow(dead_code, unused_imports)]

use record_cards::config::StyleConfig;
use record_cards::engine::SelectionEngine;
use record_cards::flow::{FlowAttributeChange, FlowInputs};
use record_cards::record::Record;
use serde_json::{json, Value};

pub type RecordingEngine = SelectionEngine<Vec<FlowAttributeChange>>;

/// Record with an `Id` and a `Name`.
pub fn named(id: &str, name: &str) -> Record {
    Record::new(json!({ "Id": id, "Name": name }))
}

pub fn raw(value: Value) -> Record {
    Record::new(value)
}

pub fn engine(selected: Vec<Record>, unselected: Vec<Record>) -> RecordingEngine {
    engine_with(selected, unselected, StyleConfig::default())
}

pub fn engine_with(
    selected: Vec<Record>,
    unselected: Vec<Record>,
    style: StyleConfig,
) -> RecordingEngine {
    SelectionEngine::initialize(FlowInputs::new(selected, unselected), style, Vec::new())
}

pub fn locked_style() -> StyleConfig {
    StyleConfig {
        selection_locked: true,
        ..StyleConfig::default()
    }
}

/// Identifiers of a record list, in order.
pub fn ids(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.id().unwrap_or_default().to_string())
        .collect()
}

/// The alpha/beta fixture: `a` selected, `b` unselected.
pub fn alpha_beta() -> RecordingEngine {
    engine(vec![named("a", "Alpha")], vec![named("b", "Beta")])
}
