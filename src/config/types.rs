use serde::{Deserialize, Serialize};

use crate::ui::theme::{
    DEFAULT_CARD_FONT_SIZE, DEFAULT_CARD_MAX_WIDTH, DEFAULT_CARD_MIN_WIDTH,
    DEFAULT_SELECTED_COLOR, DEFAULT_UNSELECTED_COLOR,
};

/// Settings as supplied by the host flow.
///
/// Every field is optional. Keys use the flow's attribute names
/// (`displayFieldApiName`, `cardMinWidth`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSettings {
    /// Record field rendered on each card. An explicit empty string is kept
    /// and renders every card as "Unknown".
    pub display_field_api_name: Option<String>,
    pub selected_color: Option<String>,
    pub unselected_color: Option<String>,
    pub card_min_width: Option<Pixels>,
    pub card_max_width: Option<Pixels>,
    pub card_font_size: Option<Pixels>,
    pub header_text: Option<String>,
    pub sub_header_text: Option<String>,
    /// When true, card clicks are ignored.
    pub selection_locked: bool,
}

/// Pixel size given either as a number or as a numeric string ("120").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pixels {
    Number(u32),
    Text(String),
}

impl Pixels {
    /// Numeric value, `Ok(None)` for a blank string.
    pub fn value(&self) -> Result<Option<u32>, std::num::ParseIntError> {
        match self {
            Pixels::Number(n) => Ok(Some(*n)),
            Pixels::Text(s) if s.trim().is_empty() => Ok(None),
            Pixels::Text(s) => s.trim().parse().map(Some),
        }
    }
}

impl From<u32> for Pixels {
    fn from(n: u32) -> Self {
        Pixels::Number(n)
    }
}

/// Settings with every fallback applied. This is what cards are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub display_field: String,
    pub selected_color: String,
    pub unselected_color: String,
    pub card_min_width: u32,
    pub card_max_width: u32,
    pub card_font_size: u32,
    pub header_text: String,
    pub sub_header_text: String,
    pub selection_locked: bool,
}

pub const DEFAULT_DISPLAY_FIELD: &str = "Name";
pub const DEFAULT_HEADER_TEXT: &str = "Select Records";
pub const DEFAULT_SUB_HEADER_TEXT: &str = "Click cards to toggle selection";

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            display_field: DEFAULT_DISPLAY_FIELD.to_string(),
            selected_color: DEFAULT_SELECTED_COLOR.to_string(),
            unselected_color: DEFAULT_UNSELECTED_COLOR.to_string(),
            card_min_width: DEFAULT_CARD_MIN_WIDTH,
            card_max_width: DEFAULT_CARD_MAX_WIDTH,
            card_font_size: DEFAULT_CARD_FONT_SIZE,
            header_text: DEFAULT_HEADER_TEXT.to_string(),
            sub_header_text: DEFAULT_SUB_HEADER_TEXT.to_string(),
            selection_locked: false,
        }
    }
}

impl StyleConfig {
    /// Apply defaults to unset or blank settings.
    ///
    /// Never fails: a pixel string that does not parse is logged and
    /// replaced by its default. Use [`CardSettings::validate`] to reject
    /// such settings up front.
    pub fn resolve(settings: &CardSettings) -> Self {
        let defaults = Self::default();
        Self {
            display_field: settings
                .display_field_api_name
                .clone()
                .unwrap_or(defaults.display_field),
            selected_color: non_blank(&settings.selected_color)
                .unwrap_or(defaults.selected_color),
            unselected_color: non_blank(&settings.unselected_color)
                .unwrap_or(defaults.unselected_color),
            card_min_width: pixels_or(
                "cardMinWidth",
                &settings.card_min_width,
                defaults.card_min_width,
            ),
            card_max_width: pixels_or(
                "cardMaxWidth",
                &settings.card_max_width,
                defaults.card_max_width,
            ),
            card_font_size: pixels_or(
                "cardFontSize",
                &settings.card_font_size,
                defaults.card_font_size,
            ),
            header_text: settings.header_text.clone().unwrap_or(defaults.header_text),
            sub_header_text: settings
                .sub_header_text
                .clone()
                .unwrap_or(defaults.sub_header_text),
            selection_locked: settings.selection_locked,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn pixels_or(name: &str, value: &Option<Pixels>, default: u32) -> u32 {
    let Some(pixels) = value else {
        return default;
    };
    match pixels.value() {
        Ok(Some(n)) => n,
        Ok(None) => default,
        Err(err) => {
            tracing::warn!(
                setting = name,
                value = ?pixels,
                error = %err,
                default,
                "invalid pixel setting, using default"
            );
            default
        }
    }
}
