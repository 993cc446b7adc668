//! Human-readable formatting for descriptors

use crate::item::BrowseItem;
use crate::pattern::{Sequence, SequencePattern, PADDING_CHAR};
use crate::range::Range;
use std::fmt;

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.first, self.last)
    }
}

impl fmt::Display for SequencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        for _ in 0..self.padding {
            write!(f, "{}", PADDING_CHAR)?;
        }
        f.write_str(&self.suffix)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pattern, self.range)?;
        if self.step != 1 {
            write!(f, " step {}", self.step)?;
        }
        Ok(())
    }
}

impl fmt::Display for BrowseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowseItem::Undefined => f.write_str("undefined"),
            BrowseItem::Folder { path } => write!(f, "{}/", path.display()),
            BrowseItem::UnitFile { path } => write!(f, "{}", path.display()),
            BrowseItem::Sequence { path, sequence } => {
                if path.as_os_str().is_empty() {
                    write!(f, "{}", sequence)
                } else {
                    write!(f, "{}/{}", path.display(), sequence)
                }
            }
        }
    }
}
