//! User interaction events coming from rendered cards.

/// A click on a rendered card.
///
/// The identifier comes from the card's markup and may be missing when
/// the card was rendered for a record without one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardClick {
    pub record_id: Option<String>,
}

impl CardClick {
    pub fn on(record_id: impl Into<String>) -> Self {
        Self {
            record_id: Some(record_id.into()),
        }
    }
}
