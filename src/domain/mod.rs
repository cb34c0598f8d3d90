//! Core types: Object, Type, Property, PropertyValue, Icon, Body

mod alias;
mod body;
mod error;
mod icon;
mod object;
mod object_type;
mod property;
mod property_name;
mod system_relations;
mod value;

pub use alias::{AliasTable, CORE_ATTRIBUTES, SkipReason, SkippedAlias, is_core_attribute};
pub use body::Body;
pub use error::ObjectError;
pub use icon::{Icon, IconInput, is_emoji};
pub use object::Object;
pub use object_type::{Type, TypeInput};
pub use property::Property;
pub use property_name::{is_reserved_word, sanitize_property_name};
pub use system_relations::is_system_relation;
pub use value::{ParseValueError, PropertyFormat, PropertyValue};
