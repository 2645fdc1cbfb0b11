//! Error types for modlint.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModlintError {
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read file: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ModlintError>;
