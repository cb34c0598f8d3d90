//! Property declarations and their per-object value slots.

use crate::domain::{ParseValueError, PropertyFormat, PropertyValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A property declared on a type, together with the value an object holds for it.
///
/// The declaration (`id`, `key`, `name`, `format`) comes from the type
/// schema. The value slot starts empty and only accepts values that can be
/// coerced into the declared format.
///
/// # Examples
///
/// ```
/// use anytype::domain::{Property, PropertyFormat, PropertyValue};
///
/// let mut year = Property::new("release_year", "Release Year", PropertyFormat::Number);
/// year.set_value(1994).unwrap();
/// assert_eq!(year.value(), Some(&PropertyValue::from(1994)));
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    id: String,
    key: String,
    #[serde(default)]
    name: String,
    format: PropertyFormat,
    #[serde(skip)]
    value: Option<PropertyValue>,
}

impl Property {
    /// Creates a property declaration with an empty value slot.
    pub fn new(key: impl Into<String>, name: impl Into<String>, format: PropertyFormat) -> Self {
        Self {
            id: String::new(),
            key: key.into(),
            name: name.into(),
            format,
            value: None,
        }
    }

    /// Sets the remote id of the property.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the human-readable label shown in the application.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> PropertyFormat {
        self.format
    }

    /// Returns the stored value, if any.
    pub fn value(&self) -> Option<&PropertyValue> {
        self.value.as_ref()
    }

    /// Stores a value, coercing it into the declared format.
    ///
    /// # Errors
    ///
    /// Returns `ParseValueError` if the value cannot be stored in this format.
    /// The previous value is kept in that case.
    pub fn set_value(&mut self, value: impl Into<PropertyValue>) -> Result<(), ParseValueError> {
        self.value = Some(value.into().coerce(self.format)?);
        Ok(())
    }

    /// Stores a JSON value; `null` clears the slot.
    ///
    /// # Errors
    ///
    /// Returns `ParseValueError` if the JSON shape cannot be stored in this format.
    pub fn set_json(&mut self, value: &Value) -> Result<(), ParseValueError> {
        self.value = PropertyValue::from_json(self.format, value)?;
        Ok(())
    }

    /// Empties the value slot.
    pub fn clear(&mut self) {
        self.value = None;
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {})", self.name, self.key, self.format)
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("format", &self.format)
            .field("value", &self.value)
            .finish()
    }
}
