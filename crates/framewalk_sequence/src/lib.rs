//! Framewalk Sequence - Shared Descriptor Types
//!
//! The value types every Framewalk crate speaks: frame ranges, sequence
//! patterns (`name.####.exr`), and classified browse items. This crate
//! holds no inference logic; the parser produces these descriptors and
//! downstream consumers (CLI, playback helpers) read them.
//!
//! # Core Concepts
//!
//! - **Range**: closed `[first, last]` frame interval with playback helpers
//! - **SequencePattern**: prefix/suffix/padding triple around a counter
//! - **Sequence**: pattern + range + step, one numbered file family
//! - **BrowseItem**: a classified directory entry (folder, file, sequence)

pub mod error;
pub mod item;
pub mod pattern;
pub mod range;

mod display;

pub use error::{Result, SequenceError};
pub use item::BrowseItem;
pub use pattern::{split_path, Sequence, SequencePattern, PADDING_CHAR};
pub use range::{interpolate_source, FrameMove, Range};

/// Numeric type of frame counters found in filenames.
///
/// Counters wider than this type are out of contract: parsing wraps
/// rather than failing, matching the fixed-width integers the rest of
/// the pipeline stores.
pub type FrameNumber = u32;
