//! Component entity model and DTOs.

use std::collections::BTreeMap;

use atal_core::types::{DocId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Availability assigned to every newly created component.
pub const DEFAULT_AVAILABILITY: &str = "Available";

/// Open-ended attribute bag (`"operating_voltage" -> "5V"`).
pub type Specifications = BTreeMap<String, String>;

/// A document from the `components` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: DocId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_range: String,
    #[serde(default = "default_availability")]
    pub availability: String,
    #[serde(default, deserialize_with = "deserialize_specifications")]
    pub specifications: Option<Specifications>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

fn default_availability() -> String {
    DEFAULT_AVAILABILITY.to_string()
}

/// Accept specification maps whose values may be `null`, dropping those keys.
fn deserialize_specifications<'de, D>(deserializer: D) -> Result<Option<Specifications>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|map| {
        map.into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect()
    }))
}

impl Component {
    /// Build a new component from a create request.
    pub fn new(id: DocId, input: CreateComponent, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            category: input.category,
            price_range: input.price_range,
            availability: default_availability(),
            specifications: input.specifications,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Replace every caller-editable field, keeping identity, availability
    /// and creation time.
    pub fn replaced_with(self, input: CreateComponent, now: Timestamp) -> Self {
        Self {
            name: input.name,
            description: input.description,
            category: input.category,
            price_range: input.price_range,
            specifications: input.specifications,
            updated_at: Some(now),
            ..self
        }
    }
}

/// DTO for creating or fully replacing a component.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComponent {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    pub price_range: String,
    #[serde(default)]
    pub specifications: Option<Specifications>,
}

/// Query parameters for `GET /api/components`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}
