//! Output formatting for CLI commands

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use framewalk_sequence::BrowseItem;

/// Render classified items as a terminal table.
pub fn items_table(items: &[BrowseItem]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["TYPE", "ITEM", "RANGE", "STEP", "FRAMES"]);

    for item in items {
        match item {
            BrowseItem::Undefined => {
                table.add_row(vec!["?", "", "", "", ""]);
            }
            BrowseItem::Folder { path } => {
                table.add_row(vec![
                    Cell::new("folder"),
                    Cell::new(path.display()),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                ]);
            }
            BrowseItem::UnitFile { path } => {
                table.add_row(vec![
                    Cell::new("file"),
                    Cell::new(path.display()),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                ]);
            }
            BrowseItem::Sequence { path, sequence } => {
                let item = if path.as_os_str().is_empty() {
                    sequence.pattern.to_string()
                } else {
                    format!("{}/{}", path.display(), sequence.pattern)
                };
                table.add_row(vec![
                    Cell::new("sequence"),
                    Cell::new(item),
                    Cell::new(sequence.range),
                    Cell::new(sequence.step),
                    Cell::new(frame_count(sequence.range, sequence.step)),
                ]);
            }
        }
    }

    table
}

/// Serialize items as pretty JSON.
pub fn items_json(items: &[BrowseItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

/// Number of frames a range covers at a given step.
fn frame_count(range: framewalk_sequence::Range, step: u32) -> u64 {
    let span = u64::from(range.last - range.first);
    span / u64::from(step.max(1)) + 1
}
