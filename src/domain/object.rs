//! Local representation of a remote object.

use crate::api::{CreateObjectRequest, PropertyEntry, Transport, UpdateObjectRequest};
use crate::domain::{
    AliasTable, Body, Icon, IconInput, ObjectError, Property, PropertyValue, SkippedAlias, Type,
    TypeInput, is_emoji,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A record with a type, typed properties, an icon and a markdown body.
///
/// Objects are created empty (or from a [`Type`]), mutated locally, and then
/// submitted through a [`Transport`].
///
/// # Property aliases
///
/// Every non-system property of the type given at construction is reachable
/// through a sanitized alias: a property labelled `Release Year` is read and
/// written as `release_year`. Aliases are fixed at construction time; aliases
/// that would shadow a core attribute (`name`, `icon`, `type`, ...) or repeat
/// an earlier alias are skipped. Skipped properties stay reachable by key.
///
/// # Examples
///
/// ```
/// use anytype::domain::{Object, Property, PropertyFormat, PropertyValue, Type};
///
/// let book = Type::new("book")
///     .with_property(Property::new("release_year", "Release Year", PropertyFormat::Number));
/// let mut object = Object::with_type("Dune", book);
///
/// object.set_property("release_year", 1965).unwrap();
/// assert_eq!(
///     object.get_property("release_year").unwrap(),
///     Some(&PropertyValue::from(1965))
/// );
///
/// object.add_title1("Dune");
/// object.add_bullet("Arrakis");
/// assert_eq!(object.body().as_str(), "# Dune\n- Arrakis\n");
/// ```
#[derive(Clone)]
pub struct Object {
    transport: Option<Rc<dyn Transport>>,

    pub id: String,
    pub source: String,
    pub name: String,
    pub description: String,
    pub layout: String,
    pub root_id: String,
    pub space_id: String,
    pub template_id: String,
    pub snippet: String,
    pub type_key: String,

    body: Body,
    icon: Option<Icon>,
    object_type: Option<Type>,
    properties: Vec<Property>,
    aliases: AliasTable,
    details: BTreeMap<String, Value>,
}

impl Object {
    /// Creates an empty object with no type and no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            transport: None,
            id: String::new(),
            source: String::new(),
            name: name.into(),
            description: String::new(),
            layout: "basic".to_string(),
            root_id: String::new(),
            space_id: String::new(),
            template_id: String::new(),
            snippet: String::new(),
            type_key: String::new(),
            body: Body::new(),
            icon: None,
            object_type: None,
            properties: Vec::new(),
            aliases: AliasTable::default(),
            details: BTreeMap::new(),
        }
    }

    /// Creates an object of type `ty`, registering aliases for its
    /// non-system properties.
    pub fn with_type(name: impl Into<String>, ty: Type) -> Self {
        let mut object = Self::new(name);
        object.properties = ty
            .user_properties()
            .cloned()
            .map(|mut prop| {
                prop.clear();
                prop
            })
            .collect();
        object.aliases = AliasTable::build(&object.properties);
        tracing::debug!(
            type_key = ty.key(),
            properties = object.properties.len(),
            aliases = object.aliases.len(),
            "object initialized from type"
        );
        object.object_type = Some(ty);
        object
    }

    // ===========================================
    // Type and icon
    // ===========================================

    /// Returns the assigned type, if any.
    pub fn object_type(&self) -> Option<&Type> {
        self.object_type.as_ref()
    }

    /// Assigns the object's type.
    ///
    /// Accepts a schema mapping, built into a [`Type`] bound to this
    /// object's space, or a ready [`Type`]. The alias table is not rebuilt.
    ///
    /// # Errors
    ///
    /// Returns `ObjectError::InvalidType` for any other value, or for a
    /// mapping that does not describe a type.
    pub fn set_type(&mut self, value: impl Into<TypeInput>) -> Result<(), ObjectError> {
        let ty = match value.into() {
            TypeInput::Schema(map) => Type::from_schema(Value::Object(map), &self.space_id)?,
            TypeInput::Type(ty) => ty,
            TypeInput::Unsupported(other) => {
                return Err(ObjectError::InvalidType(format!(
                    "expected a schema mapping or a Type, found {other}"
                )));
            }
        };
        self.object_type = Some(ty);
        Ok(())
    }

    /// Copies the type key and default template of `ty` onto the object.
    pub fn add_type(&mut self, ty: &Type) {
        self.template_id = ty.template_id().to_string();
        self.type_key = ty.key().to_string();
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Assigns the object's icon.
    ///
    /// Accepts an icon mapping, a string made only of emoji, or an [`Icon`].
    ///
    /// # Errors
    ///
    /// Returns `ObjectError::InvalidIcon` for text that is not emoji, for
    /// mappings that do not describe an icon, and for any other value.
    pub fn set_icon(&mut self, value: impl Into<IconInput>) -> Result<(), ObjectError> {
        let icon = match value.into() {
            IconInput::Mapping(map) => serde_json::from_value(Value::Object(map))
                .map_err(|err| ObjectError::InvalidIcon(err.to_string()))?,
            IconInput::Emoji(text) if is_emoji(&text) => Icon::Emoji { emoji: text },
            IconInput::Emoji(text) => {
                return Err(ObjectError::InvalidIcon(format!("'{text}' is not an emoji")));
            }
            IconInput::Icon(icon) => icon,
            IconInput::Unsupported(other) => {
                return Err(ObjectError::InvalidIcon(format!(
                    "expected a mapping, an emoji or an Icon, found {other}"
                )));
            }
        };
        self.icon = Some(icon);
        Ok(())
    }

    // ===========================================
    // Properties
    // ===========================================

    /// Returns the object's property slots, in type order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Iterates over registered property aliases in sorted order.
    pub fn property_aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.aliases()
    }

    /// Returns the properties whose alias was not registered.
    pub fn skipped_aliases(&self) -> &[SkippedAlias] {
        self.aliases.skipped()
    }

    /// Returns the property registered under `alias`.
    pub fn property(&self, alias: &str) -> Option<&Property> {
        self.aliases.get(alias).map(|index| &self.properties[index])
    }

    /// Reads the value stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns `ObjectError::AttributeNotFound` if no property is registered
    /// under `alias`.
    pub fn get_property(&self, alias: &str) -> Result<Option<&PropertyValue>, ObjectError> {
        self.property(alias)
            .map(Property::value)
            .ok_or_else(|| ObjectError::AttributeNotFound(alias.to_string()))
    }

    /// Stores a value under `alias`, coerced to the property's format.
    ///
    /// # Errors
    ///
    /// Returns `ObjectError::AttributeNotFound` if no property is registered
    /// under `alias`, or `ObjectError::InvalidValue` if the value cannot be
    /// stored in the property's format.
    pub fn set_property(
        &mut self,
        alias: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), ObjectError> {
        let index = self
            .aliases
            .get(alias)
            .ok_or_else(|| ObjectError::AttributeNotFound(alias.to_string()))?;
        self.properties[index]
            .set_value(value)
            .map_err(|err| ObjectError::invalid_value(alias, err))
    }

    /// Stores a value in the property with the given key, bypassing aliases.
    ///
    /// # Errors
    ///
    /// Returns `ObjectError::AttributeNotFound` if the object has no such
    /// property, or `ObjectError::InvalidValue` on a format mismatch.
    pub fn set_property_by_key(
        &mut self,
        key: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), ObjectError> {
        let prop = self
            .properties
            .iter_mut()
            .find(|prop| prop.key() == key)
            .ok_or_else(|| ObjectError::AttributeNotFound(key.to_string()))?;
        prop.set_value(value)
            .map_err(|err| ObjectError::invalid_value(key, err))
    }

    // ===========================================
    // Dynamic attributes
    // ===========================================

    /// Resolves an attribute by name.
    ///
    /// Resolution order: core attributes, then property aliases, then
    /// free-form details set through [`Object::set_attribute`].
    ///
    /// # Errors
    ///
    /// Returns `ObjectError::AttributeNotFound` if nothing matches.
    pub fn get_attribute(&self, name: &str) -> Result<Value, ObjectError> {
        if let Some(value) = self.core_attribute(name) {
            return Ok(value);
        }
        if let Some(prop) = self.property(name) {
            return Ok(prop.value().map(PropertyValue::to_json).unwrap_or(Value::Null));
        }
        self.details
            .get(name)
            .cloned()
            .ok_or_else(|| ObjectError::AttributeNotFound(name.to_string()))
    }

    /// Assigns an attribute by name.
    ///
    /// Core string attributes accept JSON strings; `icon` and `type` go
    /// through [`Object::set_icon`] and [`Object::set_type`]; `body`,
    /// `properties` and `details` are read-only. Property aliases store the
    /// value in the property (`null` clears it). Any other name is kept as a
    /// free-form detail.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the target attribute.
    pub fn set_attribute(&mut self, name: &str, value: Value) -> Result<(), ObjectError> {
        match name {
            "icon" => return self.set_icon(value),
            "type" => return self.set_type(value),
            "body" | "properties" | "details" => {
                return Err(ObjectError::ReadOnly(name.to_string()));
            }
            _ => {}
        }

        if let Some(field) = self.string_field_mut(name) {
            return match value {
                Value::String(text) => {
                    *field = text;
                    Ok(())
                }
                _ => Err(ObjectError::InvalidAttribute {
                    name: name.to_string(),
                    expected: "a string",
                }),
            };
        }

        if let Some(index) = self.aliases.get(name) {
            return self.properties[index]
                .set_json(&value)
                .map_err(|err| ObjectError::invalid_value(name, err));
        }

        self.details.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the free-form details set on the object.
    pub fn details(&self) -> &BTreeMap<String, Value> {
        &self.details
    }

    fn core_attribute(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => Value::String(self.id.clone()),
            "source" => Value::String(self.source.clone()),
            "name" => Value::String(self.name.clone()),
            "description" => Value::String(self.description.clone()),
            "body" => Value::String(self.body.to_string()),
            "layout" => Value::String(self.layout.clone()),
            "root_id" => Value::String(self.root_id.clone()),
            "space_id" => Value::String(self.space_id.clone()),
            "template_id" => Value::String(self.template_id.clone()),
            "snippet" => Value::String(self.snippet.clone()),
            "type_key" => Value::String(self.type_key.clone()),
            "icon" => self
                .icon
                .as_ref()
                .and_then(|icon| serde_json::to_value(icon).ok())
                .unwrap_or(Value::Null),
            "type" => self
                .object_type
                .as_ref()
                .and_then(|ty| serde_json::to_value(ty).ok())
                .unwrap_or(Value::Null),
            "properties" => {
                let map: Map<String, Value> = self
                    .properties
                    .iter()
                    .map(|prop| {
                        let value = prop.value().map(PropertyValue::to_json);
                        (prop.key().to_string(), value.unwrap_or(Value::Null))
                    })
                    .collect();
                Value::Object(map)
            }
            "details" => Value::Object(
                self.details
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            ),
            _ => return None,
        };
        Some(value)
    }

    fn string_field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "id" => Some(&mut self.id),
            "source" => Some(&mut self.source),
            "name" => Some(&mut self.name),
            "description" => Some(&mut self.description),
            "layout" => Some(&mut self.layout),
            "root_id" => Some(&mut self.root_id),
            "space_id" => Some(&mut self.space_id),
            "template_id" => Some(&mut self.template_id),
            "snippet" => Some(&mut self.snippet),
            "type_key" => Some(&mut self.type_key),
            _ => None,
        }
    }

    // ===========================================
    // Body
    // ===========================================

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn add_title1(&mut self, text: &str) {
        self.body.push_heading(1, text);
    }

    pub fn add_title2(&mut self, text: &str) {
        self.body.push_heading(2, text);
    }

    pub fn add_title3(&mut self, text: &str) {
        self.body.push_heading(3, text);
    }

    pub fn add_text(&mut self, text: &str) {
        self.body.push_text(text);
    }

    /// Adds a fenced code block; pass `""` for no language.
    pub fn add_codeblock(&mut self, code: &str, language: &str) {
        self.body.push_code_block(code, language);
    }

    pub fn add_bullet(&mut self, text: &str) {
        self.body.push_bullet(text);
    }

    pub fn add_checkbox(&mut self, text: &str, checked: bool) {
        self.body.push_checkbox(text, checked);
    }

    /// Adds an image; `alt` and `title` may be empty.
    pub fn add_image(&mut self, url: &str, alt: &str, title: &str) {
        self.body.push_image(url, alt, title);
    }

    // ===========================================
    // Submission
    // ===========================================

    /// Attaches the transport used by auth-gated operations.
    pub fn authenticate(&mut self, transport: Rc<dyn Transport>) {
        self.transport = Some(transport);
    }

    pub fn is_authenticated(&self) -> bool {
        self.transport.is_some()
    }

    fn require_auth(&self, operation: &'static str) -> Result<Rc<dyn Transport>, ObjectError> {
        self.transport
            .clone()
            .ok_or(ObjectError::NotAuthenticated { operation })
    }

    /// Builds the create-object request for the current state.
    ///
    /// The type key falls back to the assigned type's key when
    /// [`Object::add_type`] was not called. Only properties holding a value
    /// are included.
    pub fn to_create_request(&self) -> CreateObjectRequest {
        CreateObjectRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            body: self.body.to_string(),
            source: self.source.clone(),
            type_key: self.effective_type_key(),
            template_id: self.template_id.clone(),
            properties: self.property_entries(),
        }
    }

    /// Builds the update-object request for the current state.
    pub fn to_update_request(&self) -> UpdateObjectRequest {
        UpdateObjectRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            properties: self.property_entries(),
        }
    }

    /// Creates the object remotely and records the returned id.
    ///
    /// # Errors
    ///
    /// Returns `ObjectError::NotAuthenticated` without a transport,
    /// `ObjectError::MissingSpace` without a space id, or the transport error.
    pub fn create(&mut self) -> Result<(), ObjectError> {
        let transport = self.require_auth("create")?;
        if self.space_id.is_empty() {
            return Err(ObjectError::MissingSpace);
        }

        let record = transport.create_object(&self.space_id, &self.to_create_request())?;
        tracing::info!(id = %record.id, space_id = %self.space_id, "object created");
        self.id = record.id;
        if !record.snippet.is_empty() {
            self.snippet = record.snippet;
        }
        if !record.layout.is_empty() {
            self.layout = record.layout;
        }
        Ok(())
    }

    /// Sends the current name, description, icon and properties.
    ///
    /// # Errors
    ///
    /// Returns `ObjectError::NotAuthenticated` without a transport,
    /// `ObjectError::MissingSpace` or `ObjectError::MissingId` before
    /// creation, or the transport error.
    pub fn update(&mut self) -> Result<(), ObjectError> {
        let transport = self.require_auth("update")?;
        if self.space_id.is_empty() {
            return Err(ObjectError::MissingSpace);
        }
        if self.id.is_empty() {
            return Err(ObjectError::MissingId);
        }

        let record = transport.update_object(&self.space_id, &self.id, &self.to_update_request())?;
        tracing::info!(id = %record.id, "object updated");
        if !record.snippet.is_empty() {
            self.snippet = record.snippet;
        }
        Ok(())
    }

    fn effective_type_key(&self) -> String {
        if !self.type_key.is_empty() {
            return self.type_key.clone();
        }
        self.object_type
            .as_ref()
            .map(|ty| ty.key().to_string())
            .unwrap_or_default()
    }

    fn property_entries(&self) -> Vec<PropertyEntry> {
        self.properties
            .iter()
            .filter_map(|prop| {
                prop.value().map(|value| PropertyEntry {
                    key: prop.key().to_string(),
                    value: value.clone(),
                })
            })
            .collect()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object_type {
            Some(ty) if !ty.name().is_empty() => {
                write!(f, "<Object(name={}, type={})>", self.name, ty.name())
            }
            _ => write!(f, "<Object(name={})>", self.name),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("space_id", &self.space_id)
            .field("type_key", &self.type_key)
            .field("icon", &self.icon)
            .field("object_type", &self.object_type.as_ref().map(Type::key))
            .field("properties", &self.properties)
            .field("authenticated", &self.transport.is_some())
            .finish()
    }
}
