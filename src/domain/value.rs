//! Property formats and the typed value stored for each format.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// The declared format of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyFormat {
    Text,
    Number,
    Select,
    MultiSelect,
    Date,
    Files,
    Checkbox,
    Url,
    Email,
    Phone,
    Objects,
}

impl PropertyFormat {
    /// All formats, in declaration order.
    pub const ALL: [PropertyFormat; 11] = [
        PropertyFormat::Text,
        PropertyFormat::Number,
        PropertyFormat::Select,
        PropertyFormat::MultiSelect,
        PropertyFormat::Date,
        PropertyFormat::Files,
        PropertyFormat::Checkbox,
        PropertyFormat::Url,
        PropertyFormat::Email,
        PropertyFormat::Phone,
        PropertyFormat::Objects,
    ];

    /// Returns the wire name of the format (`multi_select`, `url`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyFormat::Text => "text",
            PropertyFormat::Number => "number",
            PropertyFormat::Select => "select",
            PropertyFormat::MultiSelect => "multi_select",
            PropertyFormat::Date => "date",
            PropertyFormat::Files => "files",
            PropertyFormat::Checkbox => "checkbox",
            PropertyFormat::Url => "url",
            PropertyFormat::Email => "email",
            PropertyFormat::Phone => "phone",
            PropertyFormat::Objects => "objects",
        }
    }

    fn is_list(&self) -> bool {
        matches!(
            self,
            PropertyFormat::MultiSelect | PropertyFormat::Files | PropertyFormat::Objects
        )
    }
}

impl fmt::Display for PropertyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyFormat {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ParseValueError::new(ParseValueErrorKind::UnknownFormat(s.to_string())))
    }
}

/// The kind of error that occurred when converting a property value.
#[derive(Debug, Clone, PartialEq)]
enum ParseValueErrorKind {
    UnknownFormat(String),
    InvalidNumber(String),
    InvalidCheckbox(String),
    InvalidDate(String),
    Mismatch {
        from: PropertyFormat,
        to: PropertyFormat,
    },
    UnsupportedJson {
        format: PropertyFormat,
        found: &'static str,
    },
}

/// Error returned when a value cannot be stored in a property of a given format.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseValueError {
    kind: ParseValueErrorKind,
}

impl ParseValueError {
    fn new(kind: ParseValueErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseValueErrorKind::UnknownFormat(s) => write!(f, "unknown property format '{s}'"),
            ParseValueErrorKind::InvalidNumber(s) => write!(f, "'{s}' is not a number"),
            ParseValueErrorKind::InvalidCheckbox(s) => {
                write!(f, "'{s}' is not a checkbox value (expected true or false)")
            }
            ParseValueErrorKind::InvalidDate(s) => {
                write!(f, "'{s}' is not a date (expected RFC 3339 or YYYY-MM-DD)")
            }
            ParseValueErrorKind::Mismatch { from, to } => {
                write!(f, "cannot store a {from} value in a {to} property")
            }
            ParseValueErrorKind::UnsupportedJson { format, found } => {
                write!(f, "cannot store a JSON {found} in a {format} property")
            }
        }
    }
}

impl std::error::Error for ParseValueError {}

/// A property value, one variant per [`PropertyFormat`].
///
/// Numbers keep their JSON representation, so integers stay integers.
/// Select values hold the tag id (or name) of the chosen option. Files and
/// objects hold ids of the referenced objects.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(Number),
    Select(String),
    MultiSelect(Vec<String>),
    Date(DateTime<Utc>),
    Files(Vec<String>),
    Checkbox(bool),
    Url(String),
    Email(String),
    Phone(String),
    Objects(Vec<String>),
}

impl PropertyValue {
    /// Returns the format this value belongs to.
    pub fn format(&self) -> PropertyFormat {
        match self {
            PropertyValue::Text(_) => PropertyFormat::Text,
            PropertyValue::Number(_) => PropertyFormat::Number,
            PropertyValue::Select(_) => PropertyFormat::Select,
            PropertyValue::MultiSelect(_) => PropertyFormat::MultiSelect,
            PropertyValue::Date(_) => PropertyFormat::Date,
            PropertyValue::Files(_) => PropertyFormat::Files,
            PropertyValue::Checkbox(_) => PropertyFormat::Checkbox,
            PropertyValue::Url(_) => PropertyFormat::Url,
            PropertyValue::Email(_) => PropertyFormat::Email,
            PropertyValue::Phone(_) => PropertyFormat::Phone,
            PropertyValue::Objects(_) => PropertyFormat::Objects,
        }
    }

    /// Parses a textual value for a property of the given format.
    ///
    /// # Errors
    ///
    /// Returns `ParseValueError` if the text is not a valid number, checkbox
    /// or date for those formats.
    pub fn parse(format: PropertyFormat, text: &str) -> Result<Self, ParseValueError> {
        PropertyValue::Text(text.to_string()).coerce(format)
    }

    /// Converts this value so it can be stored in a property of `format`.
    ///
    /// - Values already in `format` are returned unchanged
    /// - String-like values (text, select, url, email, phone) convert freely
    /// - Text parses into number, checkbox and date
    /// - A single string becomes a one-element list for list formats
    /// - List formats (multi_select, files, objects) convert among each other
    ///
    /// # Errors
    ///
    /// Returns `ParseValueError` for any other combination, or when parsing
    /// text fails.
    pub fn coerce(self, format: PropertyFormat) -> Result<Self, ParseValueError> {
        if self.format() == format {
            return Ok(self);
        }

        let from = self.format();
        match self {
            PropertyValue::Text(s)
            | PropertyValue::Select(s)
            | PropertyValue::Url(s)
            | PropertyValue::Email(s)
            | PropertyValue::Phone(s) => match format {
                PropertyFormat::Text => Ok(PropertyValue::Text(s)),
                PropertyFormat::Select => Ok(PropertyValue::Select(s)),
                PropertyFormat::Url => Ok(PropertyValue::Url(s)),
                PropertyFormat::Email => Ok(PropertyValue::Email(s)),
                PropertyFormat::Phone => Ok(PropertyValue::Phone(s)),
                PropertyFormat::MultiSelect => Ok(PropertyValue::MultiSelect(vec![s])),
                PropertyFormat::Files => Ok(PropertyValue::Files(vec![s])),
                PropertyFormat::Objects => Ok(PropertyValue::Objects(vec![s])),
                PropertyFormat::Number if from == PropertyFormat::Text => parse_number(&s),
                PropertyFormat::Checkbox if from == PropertyFormat::Text => parse_checkbox(&s),
                PropertyFormat::Date if from == PropertyFormat::Text => parse_date(&s),
                _ => Err(mismatch(from, format)),
            },
            PropertyValue::MultiSelect(items)
            | PropertyValue::Files(items)
            | PropertyValue::Objects(items) => match format {
                PropertyFormat::MultiSelect => Ok(PropertyValue::MultiSelect(items)),
                PropertyFormat::Files => Ok(PropertyValue::Files(items)),
                PropertyFormat::Objects => Ok(PropertyValue::Objects(items)),
                _ => Err(mismatch(from, format)),
            },
            PropertyValue::Number(_) | PropertyValue::Date(_) | PropertyValue::Checkbox(_) => {
                Err(mismatch(from, format))
            }
        }
    }

    /// Converts a JSON value into a property value of the given format.
    ///
    /// `null` clears the property and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns `ParseValueError` if the JSON shape cannot be stored in `format`.
    pub fn from_json(format: PropertyFormat, value: &Value) -> Result<Option<Self>, ParseValueError> {
        let converted = match value {
            Value::Null => return Ok(None),
            Value::String(s) => PropertyValue::Text(s.clone()),
            Value::Bool(b) => PropertyValue::Checkbox(*b),
            Value::Number(n) => PropertyValue::Number(n.clone()),
            Value::Array(items) if format.is_list() => {
                let mut ids = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => ids.push(s.clone()),
                        other => {
                            return Err(ParseValueError::new(
                                ParseValueErrorKind::UnsupportedJson {
                                    format,
                                    found: json_kind(other),
                                },
                            ));
                        }
                    }
                }
                PropertyValue::MultiSelect(ids)
            }
            other => {
                return Err(ParseValueError::new(ParseValueErrorKind::UnsupportedJson {
                    format,
                    found: json_kind(other),
                }));
            }
        };

        converted.coerce(format).map(Some)
    }

    /// Converts the value into its JSON wire representation.
    ///
    /// Dates are rendered as RFC 3339 strings.
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Text(s)
            | PropertyValue::Select(s)
            | PropertyValue::Url(s)
            | PropertyValue::Email(s)
            | PropertyValue::Phone(s) => Value::String(s.clone()),
            PropertyValue::Number(n) => Value::Number(n.clone()),
            PropertyValue::MultiSelect(items)
            | PropertyValue::Files(items)
            | PropertyValue::Objects(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            PropertyValue::Date(date) => Value::String(date.to_rfc3339()),
            PropertyValue::Checkbox(b) => Value::Bool(*b),
        }
    }

    /// Returns the number, if this is a number value.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            PropertyValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the string, if this is a string-like value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s)
            | PropertyValue::Select(s)
            | PropertyValue::Url(s)
            | PropertyValue::Email(s)
            | PropertyValue::Phone(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the checkbox state, if this is a checkbox value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Checkbox(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<Number> for PropertyValue {
    fn from(value: Number) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value.into())
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(value.into())
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        PropertyValue::Number(value.into())
    }
}

impl TryFrom<f64> for PropertyValue {
    type Error = ParseValueError;

    /// Fails for NaN and infinities, which JSON cannot carry.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Number::from_f64(value).map(PropertyValue::Number).ok_or_else(|| {
            ParseValueError::new(ParseValueErrorKind::InvalidNumber(value.to_string()))
        })
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Checkbox(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        PropertyValue::Date(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::MultiSelect(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::Checkbox(b) => write!(f, "{b}"),
            PropertyValue::Date(date) => write!(f, "{}", date.to_rfc3339()),
            PropertyValue::MultiSelect(items)
            | PropertyValue::Files(items)
            | PropertyValue::Objects(items) => write!(f, "{}", items.join(", ")),
            PropertyValue::Text(s)
            | PropertyValue::Select(s)
            | PropertyValue::Url(s)
            | PropertyValue::Email(s)
            | PropertyValue::Phone(s) => f.write_str(s),
        }
    }
}

fn mismatch(from: PropertyFormat, to: PropertyFormat) -> ParseValueError {
    ParseValueError::new(ParseValueErrorKind::Mismatch { from, to })
}

fn parse_number(s: &str) -> Result<PropertyValue, ParseValueError> {
    let trimmed = s.trim();
    let number = if let Ok(n) = trimmed.parse::<i64>() {
        Some(Number::from(n))
    } else if let Ok(n) = trimmed.parse::<u64>() {
        Some(Number::from(n))
    } else {
        trimmed.parse::<f64>().ok().and_then(Number::from_f64)
    };
    number
        .map(PropertyValue::Number)
        .ok_or_else(|| ParseValueError::new(ParseValueErrorKind::InvalidNumber(s.to_string())))
}

fn parse_checkbox(s: &str) -> Result<PropertyValue, ParseValueError> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(PropertyValue::Checkbox(true)),
        "false" | "no" | "0" => Ok(PropertyValue::Checkbox(false)),
        _ => Err(ParseValueError::new(ParseValueErrorKind::InvalidCheckbox(
            s.to_string(),
        ))),
    }
}

fn parse_date(s: &str) -> Result<PropertyValue, ParseValueError> {
    let trimmed = s.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(PropertyValue::Date(date.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| PropertyValue::Date(datetime.and_utc()))
        .ok_or_else(|| ParseValueError::new(ParseValueErrorKind::InvalidDate(s.to_string())))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
