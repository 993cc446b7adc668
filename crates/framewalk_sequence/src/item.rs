//! Classified directory entries
//!
//! `BrowseItem` is the parser's output unit: every ingested path ends up
//! as exactly one folder, unit file, or member of a sequence item. Items
//! are plain value objects; only the item builder constructs them.

use crate::pattern::{Sequence, SequencePattern};
use crate::range::Range;
use crate::FrameNumber;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One entry of a browsed listing, classified.
///
/// For `Sequence` items the path is the parent directory; the pattern
/// inside the descriptor is relative to it. For the other variants the
/// path is the entry itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BrowseItem {
    /// Not yet classified. Never produced by the parser.
    #[default]
    Undefined,
    /// A directory.
    Folder { path: PathBuf },
    /// A file belonging to no sequence.
    UnitFile { path: PathBuf },
    /// A numbered file family under one directory.
    Sequence { path: PathBuf, sequence: Sequence },
}

impl BrowseItem {
    pub fn folder(path: impl Into<PathBuf>) -> Self {
        Self::Folder { path: path.into() }
    }

    pub fn unit_file(path: impl Into<PathBuf>) -> Self {
        Self::UnitFile { path: path.into() }
    }

    pub fn sequence(
        path: impl Into<PathBuf>,
        pattern: SequencePattern,
        range: Range,
        step: FrameNumber,
    ) -> Self {
        Self::Sequence {
            path: path.into(),
            sequence: Sequence::new(pattern, range, step),
        }
    }

    /// The item's path; the parent directory for sequences.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Undefined => None,
            Self::Folder { path } | Self::UnitFile { path } | Self::Sequence { path, .. } => {
                Some(path)
            }
        }
    }

    /// Lowercased extension of the entry, when it has one. Sequences
    /// report the extension of their suffix.
    pub fn extension(&self) -> Option<String> {
        let name = match self {
            Self::Undefined => return None,
            Self::Folder { path } | Self::UnitFile { path } => {
                path.extension()?.to_string_lossy().into_owned()
            }
            Self::Sequence { sequence, .. } => {
                let suffix = &sequence.pattern.suffix;
                suffix.rsplit_once('.')?.1.to_string()
            }
        };
        Some(name.to_ascii_lowercase())
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence { .. })
    }
}
