//! Host-supplied records.
//!
//! A record is an opaque field mapping handed over by the flow. The engine
//! only ever reads two things from it: the `Id` field and the configured
//! display field. Both reads are defensive, since upstream records arrive in
//! heterogeneous and partially populated shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Field holding the record's stable identifier.
pub const ID_FIELD: &str = "Id";

/// Display text for an absent record or an empty display field name.
pub const UNKNOWN_TEXT: &str = "Unknown";
/// Display text for a missing or null display field.
pub const MISSING_TEXT: &str = "N/A";
/// Display text for a record whose fields cannot be read.
pub const ERROR_TEXT: &str = "Error";

/// Failure while reading a field from a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("record is not a field mapping (found {kind})")]
    NotAMapping { kind: &'static str },
}

/// One selectable record, as supplied by the host.
///
/// `null` entries in the input collections are kept as absent records so
/// they still occupy a card slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// True for a `null` slot.
    pub fn is_absent(&self) -> bool {
        self.0.is_null()
    }

    /// The record identifier, if it carries a non-empty string `Id`.
    pub fn id(&self) -> Option<&str> {
        self.0
            .as_object()?
            .get(ID_FIELD)?
            .as_str()
            .filter(|id| !id.is_empty())
    }

    /// Read a field, treating `null` values like missing ones.
    ///
    /// A record that is not a field mapping (scalar or array) is the one
    /// unreadable shape; it is the failure behind the `"Error"` sentinel.
    pub fn lookup(&self, field: &str) -> Result<Option<&Value>, LookupError> {
        match &self.0 {
            Value::Object(map) => Ok(map.get(field).filter(|v| !v.is_null())),
            Value::Null => Ok(None),
            // Scalars and arrays have no fields; reported as a failed read.
            Value::Bool(_) => Err(LookupError::NotAMapping { kind: "boolean" }),
            Value::Number(_) => Err(LookupError::NotAMapping { kind: "number" }),
            Value::String(_) => Err(LookupError::NotAMapping { kind: "string" }),
            Value::Array(_) => Err(LookupError::NotAMapping { kind: "array" }),
        }
    }

    /// Text shown on the record's card.
    ///
    /// Every failure maps to a sentinel:
    /// [`UNKNOWN_TEXT`] for an absent record or empty field name,
    /// [`MISSING_TEXT`] for a missing or null field,
    /// [`ERROR_TEXT`] when the record cannot be read at all.
    pub fn display_value(&self, field: &str) -> String {
        if self.is_absent() || field.is_empty() {
            return UNKNOWN_TEXT.to_string();
        }
        match self.lookup(field) {
            Ok(Some(value)) => value_text(value),
            Ok(None) => MISSING_TEXT.to_string(),
            Err(err) => {
                tracing::debug!(field, error = %err, "display lookup failed");
                ERROR_TEXT.to_string()
            }
        }
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_requires_non_empty_string() {
        assert_eq!(Record::new(json!({"Id": "a1"})).id(), Some("a1"));
        assert_eq!(Record::new(json!({"Id": ""})).id(), None);
        assert_eq!(Record::new(json!({"Id": 7})).id(), None);
        assert_eq!(Record::new(json!({"Name": "x"})).id(), None);
        assert_eq!(Record::new(Value::Null).id(), None);
    }

    #[test]
    fn display_value_formats_scalars() {
        let record = Record::new(json!({
            "Id": "a",
            "Name": "Alpha",
            "Count": 3,
            "Open": true
        }));
        assert_eq!(record.display_value("Name"), "Alpha");
        assert_eq!(record.display_value("Count"), "3");
        assert_eq!(record.display_value("Open"), "true");
    }

    #[test]
    fn display_value_renders_nested_as_json() {
        let record = Record::new(json!({"Owner": {"Name": "Ada"}}));
        assert_eq!(record.display_value("Owner"), r#"{"Name":"Ada"}"#);
    }

    #[test]
    fn display_value_sentinels() {
        let record = Record::new(json!({"Id": "a", "Name": null}));
        assert_eq!(record.display_value("Name"), MISSING_TEXT);
        assert_eq!(record.display_value("Title"), MISSING_TEXT);
        assert_eq!(record.display_value(""), UNKNOWN_TEXT);
        assert_eq!(Record::new(Value::Null).display_value("Name"), UNKNOWN_TEXT);
        assert_eq!(Record::new(json!("loose")).display_value("Name"), ERROR_TEXT);
        assert_eq!(Record::new(json!([1, 2])).display_value("Name"), ERROR_TEXT);
        assert_eq!(Record::new(json!(42)).display_value("Name"), ERROR_TEXT);
        assert_eq!(Record::new(json!(false)).display_value("Name"), ERROR_TEXT);
    }

    #[test]
    fn lookup_reports_kind() {
        let err = Record::new(json!(12)).lookup("Name").unwrap_err();
        assert_eq!(err, LookupError::NotAMapping { kind: "number" });
    }
}
