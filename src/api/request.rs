//! Request and response records exchanged with the API.

use crate::domain::{Icon, PropertyValue};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Body of a create-object call.
///
/// Empty optional fields are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CreateObjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    pub type_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyEntry>,
}

/// Body of an update-object call.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UpdateObjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyEntry>,
}

/// A property value keyed by property key.
///
/// Serialized as `{"key": ..., "<format>": <value>}`, e.g.
/// `{"key": "release_year", "number": 1994}`.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    pub key: String,
    pub value: PropertyValue,
}

impl Serialize for PropertyEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("key", &self.key)?;
        map.serialize_entry(self.value.format().as_str(), &self.value.to_json())?;
        map.end()
    }
}

/// The object as returned by the API after a create or update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectRecord {
    pub id: String,
    pub space_id: String,
    pub name: String,
    pub snippet: String,
    pub layout: String,
}
