//! Entity models and request DTOs, plus their document encoding.

pub mod component;
pub mod project;
pub mod user;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::store::{Document, StoreError};

/// Serialize an entity into a store document.
pub fn to_document<T: Serialize>(entity: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Codec(format!(
            "entity did not serialize to an object: {other}"
        ))),
    }
}

/// Deserialize a stored document, taking the identity from the document id
/// rather than from any `id` field in its body.
pub fn from_document<T: DeserializeOwned>(id: String, mut document: Document) -> Result<T, StoreError> {
    document.insert("id".into(), Value::String(id));
    Ok(serde_json::from_value(Value::Object(document))?)
}
