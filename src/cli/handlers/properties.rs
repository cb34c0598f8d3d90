//! Properties command handler.

use anyhow::{Context, Result};

use crate::cli::PropertiesArgs;
use crate::cli::output::{Output, OutputFormat, PropertyListing, TypeListing};
use crate::domain::{AliasTable, Property, Type};
use crate::infra::load_schema;

/// Lists the user properties of `ty` with the alias each one is reachable under.
pub fn type_listing(ty: &Type) -> TypeListing {
    let properties: Vec<Property> = ty.user_properties().cloned().collect();
    let aliases = AliasTable::build(&properties);

    TypeListing {
        key: ty.key().to_string(),
        properties: properties
            .iter()
            .enumerate()
            .map(|(index, prop)| PropertyListing {
                key: prop.key().to_string(),
                name: prop.name().to_string(),
                format: prop.format().to_string(),
                alias: aliases.alias_of(index).map(str::to_string),
            })
            .collect(),
        skipped: aliases.skipped().to_vec(),
    }
}

pub fn handle_properties(args: &PropertiesArgs) -> Result<()> {
    let schema = load_schema(&args.schema)
        .with_context(|| format!("failed to load type schema: {}", args.schema.display()))?;
    let ty = Type::from_schema(schema, "")?;
    let listing = type_listing(&ty);

    match args.format {
        OutputFormat::Human => {
            if listing.properties.is_empty() {
                println!("Type '{}' has no user properties.", listing.key);
                return Ok(());
            }

            println!("{:<24}  {:<24}  {:<12}  {}", "Alias", "Name", "Format", "Key");
            println!(
                "{:<24}  {:<24}  {:<12}  {}",
                "------------------------", "------------------------", "------------", "---"
            );
            for prop in &listing.properties {
                println!(
                    "{:<24}  {:<24}  {:<12}  {}",
                    prop.alias.as_deref().unwrap_or("-"),
                    prop.name,
                    prop.format,
                    prop.key
                );
            }

            for skipped in &listing.skipped {
                println!();
                println!(
                    "note: '{}' has no alias: '{}' {}",
                    skipped.key, skipped.alias, skipped.reason
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PropertyFormat, SkipReason};
    use pretty_assertions::assert_eq;

    #[test]
    fn listing_marks_skipped_aliases() {
        let ty = Type::new("book")
            .with_property(Property::new("creator", "Creator", PropertyFormat::Objects))
            .with_property(Property::new("release_year", "Release Year", PropertyFormat::Number))
            .with_property(Property::new("cover", "Icon", PropertyFormat::Files));

        let listing = type_listing(&ty);
        assert_eq!(listing.key, "book");
        assert_eq!(listing.properties.len(), 2);
        assert_eq!(listing.properties[0].alias.as_deref(), Some("release_year"));
        assert_eq!(listing.properties[1].alias, None);
        assert_eq!(listing.skipped[0].reason, SkipReason::CoreAttribute);
    }
}
