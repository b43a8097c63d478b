//! Document - the untyped, flat representation aggregates are stored as.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::PrimitivesError;

/// An untyped mapping from field name to primitive value.
///
/// Documents live in a named collection inside a [`DocumentStore`](crate::DocumentStore).
/// The aggregate identifier is carried as an ordinary field named `"id"`.
pub type Document = serde_json::Map<String, Value>;

/// Serialize any `Serialize` type into a [`Document`].
///
/// Fails when the type does not serialize to a JSON object (e.g. a bare
/// number or sequence), since only objects can be stored as documents.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, PrimitivesError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(PrimitivesError::new(format!(
            "expected a document object, got {}",
            type_of(&other)
        ))),
        Err(err) => Err(PrimitivesError::new(err.to_string())),
    }
}

/// Deserialize a [`Document`] into any `DeserializeOwned` type.
pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, PrimitivesError> {
    serde_json::from_value(Value::Object(document)).map_err(|err| PrimitivesError::new(err.to_string()))
}

fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
