//! Draft documents: YAML or JSON files describing an object to build.

use crate::domain::{Object, ObjectError, Type};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while loading or applying a draft document.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("failed to read draft {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid draft document: {0}")]
    InvalidDocument(#[from] serde_yaml::Error),

    #[error("property '{alias}': {source}")]
    Property {
        alias: String,
        #[source]
        source: ObjectError,
    },

    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// One fragment of a draft body, applied in order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyBlock {
    Title1(String),
    Title2(String),
    Title3(String),
    Text(String),
    Bullet(String),
    Code {
        code: String,
        #[serde(default)]
        language: String,
    },
    Checkbox {
        text: String,
        #[serde(default)]
        checked: bool,
    },
    Image {
        url: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        title: String,
    },
}

impl BodyBlock {
    fn apply(&self, object: &mut Object) {
        match self {
            BodyBlock::Title1(text) => object.add_title1(text),
            BodyBlock::Title2(text) => object.add_title2(text),
            BodyBlock::Title3(text) => object.add_title3(text),
            BodyBlock::Text(text) => object.add_text(text),
            BodyBlock::Bullet(text) => object.add_bullet(text),
            BodyBlock::Code { code, language } => object.add_codeblock(code, language),
            BodyBlock::Checkbox { text, checked } => object.add_checkbox(text, *checked),
            BodyBlock::Image { url, alt, title } => object.add_image(url, alt, title),
        }
    }
}

/// A draft document.
///
/// # Format
/// ```yaml
/// name: Dune
/// space_id: bafyspace
/// icon: "📚"
/// description: Desert planet
/// type:
///   key: book
///   properties:
///     - key: release_year
///       name: Release Year
///       format: number
/// properties:
///   release_year: 1965
/// body:
///   - title1: Dune
///   - bullet: Arrakis
///   - code: { code: "spice()", language: rust }
///   - checkbox: { text: Read it, checked: true }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Draft {
    pub name: String,
    pub space_id: Option<String>,
    pub description: Option<String>,
    pub icon: Option<Value>,
    #[serde(rename = "type")]
    pub object_type: Option<Value>,
    pub properties: BTreeMap<String, Value>,
    pub body: Vec<BodyBlock>,
}

impl Draft {
    /// Builds an object from the draft.
    ///
    /// `space_override` takes precedence over the draft's `space_id`.
    ///
    /// # Errors
    ///
    /// Returns `DraftError` if the type, icon or any property value is rejected.
    pub fn build(&self, space_override: Option<&str>) -> Result<Object, DraftError> {
        let space_id = space_override
            .map(str::to_string)
            .or_else(|| self.space_id.clone())
            .unwrap_or_default();

        let mut object = match &self.object_type {
            Some(schema) => {
                let ty = Type::from_schema(schema.clone(), &space_id)?;
                let mut object = Object::with_type(self.name.clone(), ty.clone());
                object.add_type(&ty);
                object
            }
            None => Object::new(self.name.clone()),
        };
        object.space_id = space_id;

        if let Some(description) = &self.description {
            object.description = description.clone();
        }
        if let Some(icon) = &self.icon {
            object.set_icon(icon.clone())?;
        }
        for (alias, value) in &self.properties {
            object
                .set_attribute(alias, value.clone())
                .map_err(|source| DraftError::Property {
                    alias: alias.clone(),
                    source,
                })?;
        }
        for block in &self.body {
            block.apply(&mut object);
        }

        Ok(object)
    }
}

/// Parses a draft document from YAML (or JSON) text.
///
/// # Errors
///
/// Returns `DraftError::InvalidDocument` if the text is not a valid draft.
pub fn parse_draft(content: &str) -> Result<Draft, DraftError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Reads and parses a draft document from disk.
///
/// # Errors
///
/// Returns `DraftError::Io` if the file cannot be read, or
/// `DraftError::InvalidDocument` if it is not a valid draft.
pub fn load_draft(path: &Path) -> Result<Draft, DraftError> {
    let content = std::fs::read_to_string(path).map_err(|source| DraftError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_draft(&content)
}

/// Reads a type schema (YAML or JSON) from disk.
///
/// # Errors
///
/// Returns `DraftError::Io` if the file cannot be read, or
/// `DraftError::InvalidDocument` if it is not valid YAML.
pub fn load_schema(path: &Path) -> Result<Value, DraftError> {
    let content = std::fs::read_to_string(path).map_err(|source| DraftError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Icon, PropertyValue};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BOOK_DRAFT: &str = r#"
name: Dune
space_id: bafyspace
icon: "📚"
description: Desert planet
type:
  key: book
  name: Book
  template_id: tpl-book
  properties:
    - key: release_year
      name: Release Year
      format: number
    - key: genre
      name: Genre
      format: multi_select
properties:
  release_year: 1965
  genre: [scifi, classic]
body:
  - title1: Dune
  - text: A novel.
  - code: { code: "spice()", language: rust }
  - bullet: Arrakis
  - checkbox: { text: Read it, checked: true }
  - image: { url: "https://x/dune.png", alt: cover }
"#;

    // ===========================================
    // Phase 1: Parsing
    // ===========================================

    #[test]
    fn parses_full_draft() {
        let draft = parse_draft(BOOK_DRAFT).unwrap();
        assert_eq!(draft.name, "Dune");
        assert_eq!(draft.space_id.as_deref(), Some("bafyspace"));
        assert_eq!(draft.body.len(), 6);
        assert_eq!(
            draft.body[2],
            BodyBlock::Code {
                code: "spice()".to_string(),
                language: "rust".to_string()
            }
        );
    }

    #[test]
    fn parses_json_draft() {
        let draft = parse_draft(r#"{"name": "Note", "body": [{"bullet": "x"}]}"#).unwrap();
        assert_eq!(draft.name, "Note");
        assert_eq!(draft.body, vec![BodyBlock::Bullet("x".to_string())]);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            parse_draft("name: x\ncolour: red\n"),
            Err(DraftError::InvalidDocument(_))
        ));
    }

    #[test]
    fn rejects_unknown_block_kinds() {
        assert!(parse_draft("body:\n  - quote: hi\n").is_err());
    }

    // ===========================================
    // Phase 2: Building
    // ===========================================

    #[test]
    fn builds_object_from_draft() {
        let object = parse_draft(BOOK_DRAFT).unwrap().build(None).unwrap();

        assert_eq!(object.name, "Dune");
        assert_eq!(object.space_id, "bafyspace");
        assert_eq!(object.type_key, "book");
        assert_eq!(object.template_id, "tpl-book");
        assert_eq!(object.description, "Desert planet");
        assert_eq!(
            object.icon(),
            Some(&Icon::Emoji {
                emoji: "📚".to_string()
            })
        );
        assert_eq!(
            object.get_property("release_year").unwrap(),
            Some(&PropertyValue::from(1965))
        );
        assert_eq!(
            object.get_property("genre").unwrap(),
            Some(&PropertyValue::MultiSelect(vec![
                "scifi".to_string(),
                "classic".to_string()
            ]))
        );
        assert_eq!(
            object.body().as_str(),
            "# Dune\nA novel.\n``` rust\nspice()\n```\n- Arrakis\n- [x] Read it\n![cover](https://x/dune.png)\n"
        );
    }

    #[test]
    fn space_override_wins() {
        let object = parse_draft(BOOK_DRAFT).unwrap().build(Some("other")).unwrap();
        assert_eq!(object.space_id, "other");
        assert_eq!(object.object_type().unwrap().space_id(), "other");
    }

    #[test]
    fn invalid_icon_fails() {
        let draft = parse_draft("name: x\nicon: not-an-emoji\n").unwrap();
        assert!(matches!(
            draft.build(None),
            Err(DraftError::Object(ObjectError::InvalidIcon(_)))
        ));
    }

    #[test]
    fn invalid_type_fails() {
        let draft = parse_draft("name: x\ntype: 42\n").unwrap();
        assert!(matches!(
            draft.build(None),
            Err(DraftError::Object(ObjectError::InvalidType(_)))
        ));
    }

    #[test]
    fn bad_property_value_names_the_alias() {
        let draft = parse_draft(
            "name: x\ntype:\n  key: book\n  properties:\n    - {key: pages, name: Pages, format: number}\nproperties:\n  pages: many\n",
        )
        .unwrap();
        let err = draft.build(None).unwrap_err();
        assert!(err.to_string().starts_with("property 'pages'"));
    }

    #[test]
    fn unknown_properties_become_details() {
        let draft = parse_draft("name: x\nproperties:\n  mood: calm\n").unwrap();
        let object = draft.build(None).unwrap();
        assert_eq!(object.details()["mood"], Value::String("calm".to_string()));
    }

    // ===========================================
    // Phase 3: Loading
    // ===========================================

    #[test]
    fn load_draft_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"name: From disk\n").unwrap();
        let draft = load_draft(file.path()).unwrap();
        assert_eq!(draft.name, "From disk");
    }

    #[test]
    fn load_draft_missing_file() {
        let err = load_draft(Path::new("/nonexistent/draft.yaml")).unwrap_err();
        assert!(matches!(err, DraftError::Io { .. }));
    }

    #[test]
    fn load_schema_reads_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"key: page\nproperties: []\n").unwrap();
        let schema = load_schema(file.path()).unwrap();
        assert_eq!(schema["key"], Value::String("page".to_string()));
    }
}
