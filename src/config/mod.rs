//! Card settings: raw host values, resolved style, and the TOML loader.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    CardSettings, Pixels, StyleConfig, DEFAULT_DISPLAY_FIELD, DEFAULT_HEADER_TEXT,
    DEFAULT_SUB_HEADER_TEXT,
};
