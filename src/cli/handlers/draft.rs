//! Draft command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::rc::Rc;

use crate::api::HttpTransport;
use crate::cli::DraftArgs;
use crate::cli::config::{API_KEY_ENV, Config};
use crate::domain::Object;
use crate::infra::load_draft;

/// Loads a draft file and builds the object it describes.
///
/// The space is resolved from the CLI argument, the draft, then the config.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid draft, or the
/// draft's type, icon or property values are rejected.
pub fn build_draft(path: &Path, cli_space: Option<&str>, config: &Config) -> Result<Object> {
    let draft = load_draft(path)
        .with_context(|| format!("failed to load draft: {}", path.display()))?;
    let space = config.space(cli_space, draft.space_id.as_deref());
    let object = draft
        .build(space.as_deref())
        .with_context(|| format!("invalid draft: {}", path.display()))?;
    Ok(object)
}

pub fn handle_draft(args: &DraftArgs, config: &Config) -> Result<()> {
    let mut object = build_draft(&args.draft, args.space.as_deref(), config)?;

    if !args.submit {
        println!("{}", serde_json::to_string_pretty(&object.to_create_request())?);
        return Ok(());
    }

    if object.space_id.is_empty() {
        bail!("no space to create the object in: pass --space, set space_id in the draft, or set space in the config");
    }
    let Some(api_key) = config.api_key() else {
        bail!("no API key: set api_key in the config or ${API_KEY_ENV}");
    };

    let transport = HttpTransport::new(config.api_url(), api_key)?;
    object.authenticate(Rc::new(transport));
    object
        .create()
        .with_context(|| format!("failed to create '{}'", object.name))?;

    println!("{}", object.id);
    Ok(())
}
