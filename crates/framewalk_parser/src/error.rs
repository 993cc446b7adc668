//! Error types for the parser crate

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking a directory tree.
///
/// Ingestion and resolution themselves never fail on input: a basename
/// without digits is simply a unit file. Only the filesystem-facing
/// browse path can error.
#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BrowseError>;
