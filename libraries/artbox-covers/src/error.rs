use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `CoversError`
pub type Result<T> = std::result::Result<T, CoversError>;

/// Hard failures from cover-art operations.
///
/// Skips (no tags, no picture, unsupported format) are not errors; they
/// are reported through [`artbox_core::Outcome`].
#[derive(Debug, Error)]
pub enum CoversError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

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

    /// The replacement image could not be read
    #[error("Failed to read image {path}: {source}")]
    ReadImage {
        /// Image file being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The extracted picture could not be written
    #[error("Failed to write image {path}: {source}")]
    WriteImage {
        /// Output file being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The replacement image has no usable extension
    #[error("Cannot determine an image type for {0}")]
    UnknownImageType(PathBuf),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
