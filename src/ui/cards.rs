//! Render-ready card view-models.
//!
//! Cards are derived on demand from the records, the current selection
//! snapshot and the resolved style. Nothing here is stored.

use serde::Serialize;

use crate::config::StyleConfig;
use crate::record::Record;
use crate::ui::selection::SelectionState;
use crate::ui::theme::{NEUTRAL_BORDER, SELECTED_TEXT, UNSELECTED_TEXT};

/// One card, fully resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardViewModel {
    /// Stable render key. Empty for records without an identifier.
    pub key: String,
    pub record_id: String,
    pub display_value: String,
    pub is_selected: bool,
    pub card_class: String,
    pub card_style: String,
    pub aria_label: String,
}

/// Derive the card for a single record.
pub fn derive_card(
    record: &Record,
    selection: &SelectionState,
    style: &StyleConfig,
) -> CardViewModel {
    let record_id = record.id().unwrap_or_default().to_string();
    let is_selected = !record_id.is_empty() && selection.contains(&record_id);
    let locked = style.selection_locked;
    let display_value = record.display_value(&style.display_field);

    CardViewModel {
        key: record_id.clone(),
        card_class: card_class(is_selected, locked),
        card_style: card_style(is_selected, style),
        aria_label: aria_label(is_selected, locked, &display_value),
        record_id,
        display_value,
        is_selected,
    }
}

/// Derive cards for records in display order.
pub fn derive_cards<'a, I>(
    records: I,
    selection: &SelectionState,
    style: &StyleConfig,
) -> Vec<CardViewModel>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(|record| derive_card(record, selection, style))
        .collect()
}

fn card_class(is_selected: bool, locked: bool) -> String {
    let mut class = if is_selected {
        String::from("card card-selected")
    } else {
        String::from("card card-unselected")
    };
    if locked {
        class.push_str(" card-locked");
    }
    class
}

fn card_style(is_selected: bool, style: &StyleConfig) -> String {
    let (background, text, border) = if is_selected {
        (style.selected_color.as_str(), SELECTED_TEXT, style.selected_color.as_str())
    } else {
        (style.unselected_color.as_str(), UNSELECTED_TEXT, NEUTRAL_BORDER)
    };
    format!(
        "background-color:{};color:{};border-color:{};min-width:{}px;max-width:{}px;font-size:{}px",
        background,
        text,
        border,
        style.card_min_width,
        style.card_max_width,
        style.card_font_size
    )
}

fn aria_label(is_selected: bool, locked: bool, display_value: &str) -> String {
    format!(
        "{}: {}{}",
        if is_selected { "Selected" } else { "Unselected" },
        display_value,
        if locked { " (locked)" } else { "" }
    )
}
