use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{CardSettings, Pixels, StyleConfig};

/// Errors that can occur when loading card settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl CardSettings {
    /// Returns the path to the settings file.
    ///
    /// Uses `record-cards/config.toml` under `dirs::config_dir()`,
    /// falling back to the current directory if that is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("record-cards").join("config.toml")
    }

    /// Loads settings from the default settings file.
    ///
    /// A missing file yields `CardSettings::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(CardSettings::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates settings from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: CardSettings =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings.
    ///
    /// Checks:
    /// - Pixel settings given as strings are numeric (or blank)
    /// - The resolved minimum card width does not exceed the maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pixels("cardMinWidth", &self.card_min_width)?;
        check_pixels("cardMaxWidth", &self.card_max_width)?;
        check_pixels("cardFontSize", &self.card_font_size)?;

        let style = StyleConfig::resolve(self);
        if style.card_min_width > style.card_max_width {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "cardMinWidth ({}px) is greater than cardMaxWidth ({}px)",
                    style.card_min_width, style.card_max_width
                ),
            });
        }

        Ok(())
    }
}

fn check_pixels(name: &str, value: &Option<Pixels>) -> Result<(), ConfigError> {
    let Some(pixels) = value else {
        return Ok(());
    };
    pixels
        .value()
        .map(|_| ())
        .map_err(|e| ConfigError::ValidationError {
            message: format!(
                "{} must be a whole number of pixels, got {:?}: {}",
                name, pixels, e
            ),
        })
}
