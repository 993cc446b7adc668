//! Error types for sequence descriptors

use crate::FrameNumber;
use thiserror::Error;

/// Errors raised when constructing or rendering descriptors.
///
/// These cover bad caller input only. Internal pipeline inconsistencies
/// (a tuple/column mismatch, an unsplit multi-counter pattern reaching
/// item emission) are bugs and abort via assertions instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A range was requested with `first` greater than `last`.
    #[error("invalid range: first {first} is greater than last {last}")]
    InvalidRange {
        first: FrameNumber,
        last: FrameNumber,
    },

    /// A frame's decimal representation is wider than the pattern padding.
    #[error("frame {frame} does not fit in pattern '{pattern}'")]
    PatternOverflow { frame: FrameNumber, pattern: String },

    /// A filename offered as a pattern contains no `#` marker.
    #[error("no '#' marker in filename '{0}'")]
    MissingPaddingMarker(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SequenceError>;
