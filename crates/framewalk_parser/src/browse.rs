//! Directory browsing built on the parser
//!
//! The filesystem-facing collaborator: walk a directory (flat or
//! recursive), feed every entry's path through the [`Parser`], and
//! reclassify the single files that turn out to be directories on disk.
//! The parser itself never stats, opens, or reads anything.

use crate::error::{BrowseError, Result};
use crate::parser::Parser;
use framewalk_sequence::BrowseItem;
use std::path::Path;
use tracing::info;
use walkdir::{DirEntry, WalkDir};

/// Options controlling a browse walk.
#[derive(Debug, Clone)]
pub struct BrowseOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Follow symbolic links while walking.
    pub follow_symlinks: bool,
    /// Include entries whose name starts with a dot.
    pub include_hidden: bool,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            follow_symlinks: false,
            include_hidden: true,
        }
    }
}

/// Walk `directory` and classify every entry it contains.
pub fn browse(directory: &Path, options: &BrowseOptions) -> Result<Vec<BrowseItem>> {
    if !directory.exists() {
        return Err(BrowseError::NotFound(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(BrowseError::NotADirectory(directory.to_path_buf()));
    }

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let include_hidden = options.include_hidden;
    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(options.follow_symlinks)
        .into_iter()
        .filter_entry(move |entry| include_hidden || !is_hidden(entry));

    let mut parser = Parser::new();
    let mut walked = 0usize;
    for entry in walker {
        let entry = entry?;
        parser.insert(&entry.path().to_string_lossy());
        walked += 1;
    }

    let mut items = parser.into_results();
    for item in &mut items {
        reclassify_folder(item);
    }
    info!(
        directory = %directory.display(),
        entries = walked,
        items = items.len(),
        "browse complete"
    );
    Ok(items)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// The parser sees directory entries as bare names; an entry classified
/// as a unit file that is a directory on disk becomes a folder.
fn reclassify_folder(item: &mut BrowseItem) {
    if let BrowseItem::UnitFile { path } = item {
        if path.is_dir() {
            *item = BrowseItem::folder(std::mem::take(path));
        }
    }
}
