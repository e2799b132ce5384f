//! Inbound record collections.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::record::Record;

/// Errors that can occur when loading flow inputs from a file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read inputs file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse inputs file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The two record collections supplied by the host.
///
/// A missing or `null` collection is treated as empty.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowInputs {
    #[serde(deserialize_with = "null_as_empty")]
    pub selected_records: Vec<Record>,
    #[serde(deserialize_with = "null_as_empty")]
    pub unselected_records: Vec<Record>,
}

impl FlowInputs {
    pub fn new(selected_records: Vec<Record>, unselected_records: Vec<Record>) -> Self {
        Self {
            selected_records,
            unselected_records,
        }
    }

    /// Loads inputs from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path).map_err(|e| InputError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| InputError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}
