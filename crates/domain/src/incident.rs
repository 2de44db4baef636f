//! Incident record — a schema-less, ordered bag of fields.
//!
//! No field is required and no value type is enforced. The only field with
//! meaning to the store is `id`, and only when it holds a JSON string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::IncidentId;

/// Name of the field used to address records.
pub const ID_FIELD: &str = "id";

/// One logged incident.
///
/// Serializes as a plain JSON object. Key order is kept as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentRecord(Map<String, Value>);

impl IncidentRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the record for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The record's identifier, when `id` is present and is a string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Whether this record is addressed by `id`.
    #[must_use]
    pub fn matches(&self, id: &IncidentId) -> bool {
        self.id() == Some(id.as_str())
    }

    /// Look up a single field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Shallow merge: every field of `patch` overwrites or extends `self`.
    ///
    /// Fields already present keep their position; new ones are appended.
    pub fn merge(&mut self, patch: IncidentRecord) {
        for (key, value) in patch.0 {
            self.0.insert(key, value);
        }
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
