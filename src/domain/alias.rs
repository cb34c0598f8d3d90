//! Forwarding table from sanitized aliases to property slots.

use crate::domain::{Property, sanitize_property_name};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Attribute names owned by the object itself.
///
/// An alias equal to one of these is never registered.
pub const CORE_ATTRIBUTES: &[&str] = &[
    "id",
    "source",
    "name",
    "description",
    "body",
    "layout",
    "icon",
    "type",
    "properties",
    "details",
    "root_id",
    "space_id",
    "template_id",
    "snippet",
    "type_key",
];

/// Returns true if `name` is an attribute owned by the object.
pub fn is_core_attribute(name: &str) -> bool {
    CORE_ATTRIBUTES.contains(&name)
}

/// Why an alias was not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The alias equals a core attribute name.
    CoreAttribute,
    /// An earlier property already registered the same alias.
    Duplicate,
    /// The label sanitized to an empty string.
    Empty,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::CoreAttribute => write!(f, "shadows a core attribute"),
            SkipReason::Duplicate => write!(f, "duplicates an earlier alias"),
            SkipReason::Empty => write!(f, "label is empty"),
        }
    }
}

/// A property whose alias could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedAlias {
    pub key: String,
    pub alias: String,
    pub reason: SkipReason,
}

/// Maps sanitized aliases to positions in an object's property list.
///
/// Built once from the property list; first registration of an alias wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, usize>,
    skipped: Vec<SkippedAlias>,
}

impl AliasTable {
    /// Builds the table for `properties`, in order.
    pub fn build(properties: &[Property]) -> Self {
        let mut table = Self::default();

        for (index, prop) in properties.iter().enumerate() {
            let alias = sanitize_property_name(prop.name());
            let reason = if alias.is_empty() {
                Some(SkipReason::Empty)
            } else if is_core_attribute(&alias) {
                Some(SkipReason::CoreAttribute)
            } else if table.entries.contains_key(&alias) {
                Some(SkipReason::Duplicate)
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    tracing::warn!(
                        key = prop.key(),
                        alias = %alias,
                        %reason,
                        "property alias not registered"
                    );
                    table.skipped.push(SkippedAlias {
                        key: prop.key().to_string(),
                        alias,
                        reason,
                    });
                }
                None => {
                    tracing::debug!(key = prop.key(), alias = %alias, "registered property alias");
                    table.entries.insert(alias, index);
                }
            }
        }

        table
    }

    /// Returns the property index registered for `alias`.
    pub fn get(&self, alias: &str) -> Option<usize> {
        self.entries.get(alias).copied()
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Iterates over registered aliases in sorted order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the alias registered for the property at `index`, if any.
    pub fn alias_of(&self, index: usize) -> Option<&str> {
        self.entries
            .iter()
            .find(|&(_, &i)| i == index)
            .map(|(alias, _)| alias.as_str())
    }

    pub fn skipped(&self) -> &[SkippedAlias] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
