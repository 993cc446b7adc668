//! Browse command - classify a directory listing

use crate::cli::output;
use anyhow::{Context, Result};
use framewalk_parser::{browse, BrowseOptions};
use std::path::Path;
use tracing::info;

pub fn run(
    path: &Path,
    recursive: bool,
    follow_symlinks: bool,
    include_hidden: bool,
    json: bool,
) -> Result<()> {
    let options = BrowseOptions {
        recursive,
        follow_symlinks,
        include_hidden,
    };
    let items = browse(path, &options)
        .with_context(|| format!("Failed to browse {}", path.display()))?;
    info!(items = items.len(), "browse finished");

    if json {
        println!("{}", output::items_json(&items)?);
    } else if items.is_empty() {
        println!("No entries under {}", path.display());
    } else {
        println!("{}", output::items_table(&items));
    }
    Ok(())
}
