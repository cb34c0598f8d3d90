//! Sanitize command handler.

use anyhow::Result;

use crate::cli::SanitizeArgs;
use crate::cli::output::{AliasListing, Output, OutputFormat};
use crate::domain::sanitize_property_name;

/// Pairs each label with its alias.
pub fn alias_listings(labels: &[String]) -> Vec<AliasListing> {
    labels
        .iter()
        .map(|label| AliasListing {
            label: label.clone(),
            alias: sanitize_property_name(label),
        })
        .collect()
}

pub fn handle_sanitize(args: &SanitizeArgs) -> Result<()> {
    let listings = alias_listings(&args.labels);

    match args.format {
        OutputFormat::Human => {
            for listing in &listings {
                println!("{}", listing.alias);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}
