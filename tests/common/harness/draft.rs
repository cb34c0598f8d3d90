//! Builder for draft documents.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use serde_json::{Map, Value, json};

/// Builder for draft documents with a fluent API.
///
/// Produces the YAML that the `draft` command reads.
#[derive(Debug, Default)]
pub struct TestDraft {
    fields: Map<String, Value>,
    properties: Map<String, Value>,
    body: Vec<Value>,
}

impl TestDraft {
    /// Creates a draft with the given object name.
    pub fn new(name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.into()));
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Sets the space id.
    pub fn space(mut self, space_id: &str) -> Self {
        self.fields.insert("space_id".to_string(), json!(space_id));
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: &str) -> Self {
        self.fields.insert("description".to_string(), json!(description));
        self
    }

    /// Sets the icon, either an emoji string or an icon mapping.
    pub fn icon(mut self, icon: Value) -> Self {
        self.fields.insert("icon".to_string(), icon);
        self
    }

    /// Sets the type from a YAML schema.
    pub fn schema(mut self, schema_yaml: &str) -> Self {
        let schema: Value = serde_yaml::from_str(schema_yaml).expect("Invalid schema YAML");
        self.fields.insert("type".to_string(), schema);
        self
    }

    /// Sets a property value by alias.
    pub fn property(mut self, alias: &str, value: Value) -> Self {
        self.properties.insert(alias.to_string(), value);
        self
    }

    /// Appends a body block, e.g. `json!({"bullet": "x"})`.
    pub fn block(mut self, block: Value) -> Self {
        self.body.push(block);
        self
    }

    /// Renders the draft as YAML.
    pub fn to_yaml(&self) -> String {
        let mut doc = self.fields.clone();
        if !self.properties.is_empty() {
            doc.insert(
                "properties".to_string(),
                Value::Object(self.properties.clone()),
            );
        }
        if !self.body.is_empty() {
            doc.insert("body".to_string(), Value::Array(self.body.clone()));
        }
        serde_yaml::to_string(&Value::Object(doc)).expect("Failed to render draft")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_renders_fields() {
        let yaml = TestDraft::new("Dune")
            .space("s1")
            .property("pages", json!(412))
            .block(json!({"title1": "Dune"}))
            .to_yaml();

        let doc: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(doc["name"], "Dune");
        assert_eq!(doc["space_id"], "s1");
        assert_eq!(doc["properties"]["pages"], 412);
        assert_eq!(doc["body"][0]["title1"], "Dune");
    }
}
