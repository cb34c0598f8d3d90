//! Test fixture utilities for integration tests.

pub mod harness;

/// A type schema with a property whose alias collides with a core attribute.
pub const BOOK_SCHEMA: &str = r#"
key: book
name: Book
template_id: tpl-book
properties:
  - key: creator
    name: Creator
    format: objects
  - key: release_year
    name: Release Year
    format: number
  - key: genre
    name: Genre
    format: multi_select
  - key: cover_name
    name: Name
    format: text
"#;
