/// Tag-editing errors
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `TagsError`
pub type Result<T> = std::result::Result<T, TagsError>;

/// Errors from metadata field reading/writing and directory scanning.
#[derive(Debug, Error)]
pub enum TagsError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Scan target is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The tag container could not be read
    #[error("Failed to read tags from {path}: {source}")]
    ReadTags {
        /// Audio file being read
        path: PathBuf,
        /// Underlying tagging-library error
        source: lofty::error::LoftyError,
    },

    /// The tag container could not be written back
    #[error("Failed to write tags to {path}: {source}")]
    WriteTags {
        /// Audio file being rewritten
        path: PathBuf,
        /// Underlying tagging-library error
        source: lofty::error::LoftyError,
    },

    /// Directory traversal failed mid-scan
    #[error("Directory scan failed: {0}")]
    Io(#[from] std::io::Error),
}
