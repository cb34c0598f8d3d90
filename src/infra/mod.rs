//! Draft documents and schema files on disk

mod draft;

pub use draft::{BodyBlock, Draft, DraftError, load_draft, load_schema, parse_draft};
