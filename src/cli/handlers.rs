//! Command handlers for the CLI.

mod completions;
mod draft;
mod properties;
mod sanitize;

pub use completions::handle_completions;
pub use draft::{build_draft, handle_draft};
pub use properties::{handle_properties, type_listing};
pub use sanitize::{alias_listings, handle_sanitize};
