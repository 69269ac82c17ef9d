//! Game catalog document
//!
//! Games are schemaless JSON objects. The catalog only cares that a game is
//! an object and knows which fields make up the listing projection.

use serde_json::{Map, Value};

use crate::{errors::DomainError, value_objects::DocumentId};

/// Key under which the document identifier is exposed
pub const ID_FIELD: &str = "_id";

/// Fields kept when listing games
pub const GAME_SUMMARY_FIELDS: [&str; 9] = [
    "Title",
    "Release Date",
    "Developer",
    "Publisher",
    "Genres",
    "Genres Splitted",
    "User Score",
    "User Ratings Count",
    "Platforms Info",
];

/// A stored game
#[derive(Debug, Clone, PartialEq)]
pub struct GameDocument {
    id: DocumentId,
    fields: Map<String, Value>,
}

impl GameDocument {
    /// Build a new game from an arbitrary JSON value
    ///
    /// Only JSON objects are accepted. A caller supplied `_id` is dropped;
    /// identifiers are always generated here.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(mut fields) => {
                fields.remove(ID_FIELD);
                Ok(Self {
                    id: DocumentId::new(),
                    fields,
                })
            }
            other => Err(DomainError::InvalidDocument(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Restore a game loaded from storage
    pub const fn restore(id: DocumentId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    pub const fn id(&self) -> DocumentId {
        self.id
    }

    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Listing projection: `_id` plus the summary fields that are present
    pub fn summary(&self) -> Value {
        let mut out = Map::with_capacity(GAME_SUMMARY_FIELDS.len() + 1);
        out.insert(ID_FIELD.to_string(), Value::String(self.id.to_string()));
        for key in GAME_SUMMARY_FIELDS {
            if let Some(v) = self.fields.get(key) {
                out.insert(key.to_string(), v.clone());
            }
        }
        Value::Object(out)
    }

    /// Full document with `_id` as a string
    pub fn into_json(self) -> Value {
        let mut out = self.fields;
        out.insert(ID_FIELD.to_string(), Value::String(self.id.to_string()));
        Value::Object(out)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
