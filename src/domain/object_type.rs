//! Object types: the schema describing which properties an object carries.

use crate::domain::{Icon, ObjectError, Property, is_system_relation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A type describing the properties objects of that kind may carry.
///
/// Types are usually built from a schema mapping returned by the API (see
/// [`Type::from_schema`]) and are bound to the space they were fetched from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Type {
    id: String,
    key: String,
    name: String,
    plural_name: String,
    layout: String,
    space_id: String,
    template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<Icon>,
    properties: Vec<Property>,
}

impl Type {
    /// Creates an empty type with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Builds a type from a schema mapping, bound to `space_id`.
    ///
    /// A non-empty `space_id` replaces any `space_id` in the schema; an empty
    /// one keeps the schema's own.
    ///
    /// # Errors
    ///
    /// Returns `ObjectError::InvalidType` if `schema` is not a JSON object or
    /// does not describe a type.
    ///
    /// # Examples
    ///
    /// ```
    /// use anytype::domain::Type;
    /// use serde_json::json;
    ///
    /// let ty = Type::from_schema(json!({"key": "page", "properties": []}), "s1").unwrap();
    /// assert_eq!(ty.space_id(), "s1");
    /// ```
    pub fn from_schema(schema: Value, space_id: &str) -> Result<Self, ObjectError> {
        let mut map = match schema {
            Value::Object(map) => map,
            other => {
                return Err(ObjectError::InvalidType(format!(
                    "expected a schema mapping, found {other}"
                )));
            }
        };
        if !space_id.is_empty() {
            map.insert("space_id".to_string(), Value::String(space_id.to_string()));
        }
        serde_json::from_value(Value::Object(map))
            .map_err(|err| ObjectError::InvalidType(err.to_string()))
    }

    /// Adds a property declaration.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Sets the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the default template used for new objects.
    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = template_id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plural_name(&self) -> &str {
        &self.plural_name
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn space_id(&self) -> &str {
        &self.space_id
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Returns every declared property, system relations included.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the declared properties that are not system relations.
    pub fn user_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties
            .iter()
            .filter(|prop| !is_system_relation(prop.key()))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{} [{}]", self.name, self.key)
        }
    }
}

/// A value offered to [`Object::set_type`](crate::domain::Object::set_type).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeInput {
    Schema(serde_json::Map<String, Value>),
    Type(Type),
    Unsupported(Value),
}

impl From<Type> for TypeInput {
    fn from(ty: Type) -> Self {
        TypeInput::Type(ty)
    }
}

impl From<Value> for TypeInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => TypeInput::Schema(map),
            other => TypeInput::Unsupported(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyFormat;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn book_schema() -> Value {
        json!({
            "object": "type",
            "id": "bafytype",
            "key": "book",
            "name": "Book",
            "plural_name": "Books",
            "layout": "basic",
            "icon": {"format": "emoji", "emoji": "📚"},
            "properties": [
                {"key": "name", "name": "Name", "format": "text"},
                {"key": "creator", "name": "Created by", "format": "objects"},
                {"key": "release_year", "name": "Release Year", "format": "number"},
                {"key": "doi", "name": "DOI", "format": "url"}
            ]
        })
    }

    #[test]
    fn from_schema_reads_fields() {
        let ty = Type::from_schema(book_schema(), "space1").unwrap();
        assert_eq!(ty.id(), "bafytype");
        assert_eq!(ty.key(), "book");
        assert_eq!(ty.name(), "Book");
        assert_eq!(ty.plural_name(), "Books");
        assert_eq!(ty.space_id(), "space1");
        assert_eq!(ty.icon().and_then(Icon::emoji), Some("📚"));
        assert_eq!(ty.properties().len(), 4);
    }

    #[test]
    fn from_schema_keeps_schema_space_when_none_given() {
        let ty = Type::from_schema(json!({"key": "page", "space_id": "s1", "properties": []}), "")
            .unwrap();
        assert_eq!(ty.space_id(), "s1");
    }

    #[test]
    fn from_schema_overrides_space() {
        let ty = Type::from_schema(json!({"key": "page", "space_id": "s1"}), "s2").unwrap();
        assert_eq!(ty.space_id(), "s2");
    }

    #[test]
    fn from_schema_rejects_non_mappings() {
        let err = Type::from_schema(json!(42), "s1").unwrap_err();
        assert!(matches!(err, ObjectError::InvalidType(_)));
        assert!(Type::from_schema(json!("page"), "s1").is_err());
    }

    #[test]
    fn from_schema_rejects_malformed_properties() {
        let err = Type::from_schema(json!({"key": "page", "properties": "none"}), "s1").unwrap_err();
        assert!(matches!(err, ObjectError::InvalidType(_)));
    }

    #[test]
    fn user_properties_exclude_system_relations() {
        let ty = Type::from_schema(book_schema(), "").unwrap();
        let keys: Vec<&str> = ty.user_properties().map(Property::key).collect();
        assert_eq!(keys, vec!["release_year", "doi"]);
    }

    #[test]
    fn builder_methods() {
        let ty = Type::new("book")
            .with_name("Book")
            .with_template_id("tpl1")
            .with_property(Property::new("doi", "DOI", PropertyFormat::Url));
        assert_eq!(ty.template_id(), "tpl1");
        assert_eq!(ty.to_string(), "Book [book]");
        assert_eq!(Type::new("page").to_string(), "page");
    }

    #[test]
    fn type_input_from_json() {
        assert!(matches!(
            TypeInput::from(json!({"key": "page"})),
            TypeInput::Schema(_)
        ));
        assert_eq!(TypeInput::from(json!(42)), TypeInput::Unsupported(json!(42)));
    }
}
