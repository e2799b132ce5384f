//! Outbound notification channel.

use std::sync::mpsc;

use serde::Serialize;

use crate::record::Record;

/// A single named output attribute update.
///
/// Serializes as `{"name": "<attribute>", "value": <json>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", content = "value", rename_all = "camelCase")]
pub enum FlowAttributeChange {
    CurrentlySelected(Vec<Record>),
    CurrentlyUnselected(Vec<Record>),
    LastToggledId(String),
    LastToggledWasSelected(bool),
}

impl FlowAttributeChange {
    /// Attribute name as the host knows it.
    pub fn name(&self) -> &'static str {
        match self {
            FlowAttributeChange::CurrentlySelected(_) => "currentlySelected",
            FlowAttributeChange::CurrentlyUnselected(_) => "currentlyUnselected",
            FlowAttributeChange::LastToggledId(_) => "lastToggledId",
            FlowAttributeChange::LastToggledWasSelected(_) => "lastToggledWasSelected",
        }
    }
}

/// Receiver of output updates.
///
/// Delivery is fire-and-forget: a notifier has no way to report failure
/// back to the engine.
pub trait FlowNotifier {
    fn notify(&mut self, change: FlowAttributeChange);
}

/// Collects every update in order.
impl FlowNotifier for Vec<FlowAttributeChange> {
    fn notify(&mut self, change: FlowAttributeChange) {
        self.push(change);
    }
}

impl FlowNotifier for mpsc::Sender<FlowAttributeChange> {
    fn notify(&mut self, change: FlowAttributeChange) {
        let name = change.name();
        if self.send(change).is_err() {
            tracing::debug!(attribute = name, "flow receiver dropped, update discarded");
        }
    }
}

/// Any `FnMut(FlowAttributeChange)` closure is a notifier.
impl<F> FlowNotifier for F
where
    F: FnMut(FlowAttributeChange),
{
    fn notify(&mut self, change: FlowAttributeChange) {
        self(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_named_pair() {
        let change = FlowAttributeChange::LastToggledId("b".to_string());
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({"name": "lastToggledId", "value": "b"})
        );

        let change =
            FlowAttributeChange::CurrentlySelected(vec![Record::new(json!({"Id": "a"}))]);
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({"name": "currentlySelected", "value": [{"Id": "a"}]})
        );
    }

    #[test]
    fn sender_ignores_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel::<FlowAttributeChange>();
        drop(rx);
        tx.notify(FlowAttributeChange::LastToggledWasSelected(true));
    }

    #[test]
    fn closure_receives_each_update() {
        let mut seen = Vec::new();
        let mut notifier = |change: FlowAttributeChange| seen.push(change.name());
        notifier.notify(FlowAttributeChange::LastToggledId("x".to_string()));
        notifier.notify(FlowAttributeChange::CurrentlyUnselected(vec![]));
        assert_eq!(seen, vec!["lastToggledId", "currentlyUnselected"]);
    }

    #[test]
    fn sender_delivers_in_order() {
        let (mut tx, rx) = mpsc::channel::<FlowAttributeChange>();
        tx.notify(FlowAttributeChange::LastToggledId("x".to_string()));
        tx.notify(FlowAttributeChange::LastToggledWasSelected(false));
        let names: Vec<_> = rx.try_iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["lastToggledId", "lastToggledWasSelected"]);
    }
}
