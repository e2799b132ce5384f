//! Card palette and sizing defaults.
//!
//! Colors are CSS color strings since cards are styled inline by the host.

pub const DEFAULT_SELECTED_COLOR: &str = "#53c4ee";
pub const DEFAULT_UNSELECTED_COLOR: &str = "#ecebea";

/// Text color on a selected card.
pub const SELECTED_TEXT: &str = "#ffffff";
/// Text color on an unselected card.
pub const UNSELECTED_TEXT: &str = "#3e3e3c";
/// Border color on an unselected card. Selected cards use the selected color.
pub const NEUTRAL_BORDER: &str = "#c9c7c5";

pub const DEFAULT_CARD_MIN_WIDTH: u32 = 100;
pub const DEFAULT_CARD_MAX_WIDTH: u32 = 200;
pub const DEFAULT_CARD_FONT_SIZE: u32 = 13;
