//! Sequence patterns and the sequences built from them
//!
//! A `SequencePattern` is the literal shape of a numbered filename:
//! `shot01.####.exr` is prefix `shot01.`, suffix `.exr`, padding 4.
//! Rendering a frame into a pattern is the inverse of the parser's
//! extraction step and round-trips through it for any frame that fits
//! the padding width.

use crate::error::{Result, SequenceError};
use crate::range::Range;
use crate::FrameNumber;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder character standing in for a counter digit.
pub const PADDING_CHAR: char = '#';

/// The literal shape of a numbered filename: everything before the
/// counter, everything after it, and the counter's zero-padded width.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequencePattern {
    pub prefix: String,
    pub suffix: String,
    pub padding: usize,
}

impl SequencePattern {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, padding: usize) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            padding,
        }
    }

    /// Parse `dir/name.####.ext` into its parent directory and pattern.
    ///
    /// The first `#` run in the basename becomes the counter; anything
    /// after it (further `#` runs included) is suffix. Fails when the
    /// basename carries no marker at all.
    pub fn parse(path: &str) -> Result<(PathBuf, SequencePattern)> {
        let (parent, filename) = split_path(path);
        let start = filename
            .find(PADDING_CHAR)
            .ok_or_else(|| SequenceError::MissingPaddingMarker(filename.to_string()))?;
        let end = filename[start..]
            .find(|c| c != PADDING_CHAR)
            .map(|i| start + i)
            .unwrap_or(filename.len());
        let pattern = SequencePattern::new(&filename[..start], &filename[end..], end - start);
        Ok((PathBuf::from(parent), pattern))
    }

    /// Render `frame` into the pattern, left-zero-padded to the padding
    /// width. Fails when the frame's decimal representation is wider.
    pub fn render(&self, frame: FrameNumber) -> Result<String> {
        if decimal_width(frame) > self.padding {
            return Err(SequenceError::PatternOverflow {
                frame,
                pattern: self.to_string(),
            });
        }
        Ok(format!(
            "{}{:0width$}{}",
            self.prefix,
            frame,
            self.suffix,
            width = self.padding
        ))
    }

    /// True when `filename` instantiates this pattern at some frame.
    pub fn matches(&self, filename: &str) -> bool {
        let Some(counter) = filename
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_suffix(self.suffix.as_str()))
        else {
            return false;
        };
        counter.len() == self.padding && counter.bytes().all(|b| b.is_ascii_digit())
    }
}

/// A family of numbered files: pattern, frame range, and step.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequence {
    pub pattern: SequencePattern,
    pub range: Range,
    pub step: FrameNumber,
}

impl Sequence {
    pub fn new(pattern: SequencePattern, range: Range, step: FrameNumber) -> Self {
        Self {
            pattern,
            range,
            step,
        }
    }

    /// Render one frame of the sequence.
    pub fn render(&self, frame: FrameNumber) -> Result<String> {
        self.pattern.render(frame)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self {
            pattern: SequencePattern::default(),
            range: Range::default(),
            step: 1,
        }
    }
}

/// Split a path at its last separator into `(parent, basename)`.
///
/// The parent is empty when the path holds no separator; both `/` and
/// `\` count, so listings from either platform aggregate the same way.
pub fn split_path(path: &str) -> (&str, &str) {
    match path.rfind(['/', '\\']) {
        Some(index) => (&path[..index], &path[index + 1..]),
        None => ("", path),
    }
}

fn decimal_width(mut value: FrameNumber) -> usize {
    let mut width = 1;
    while value >= 10 {
        value /= 10;
        width += 1;
    }
    width
}
