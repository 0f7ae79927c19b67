//! Per-file operation results.
//!
//! Skips are ordinary outcomes, not errors: a file with no tags or no
//! embedded picture is a normal case in any real library. Hard failures
//! (I/O, codec) use each crate's error type instead, so callers can
//! branch without string-matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The operation that produced an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    /// Copy the first embedded picture out of the file
    Copy,
    /// Remove all embedded pictures
    Delete,
    /// Copy, then remove (move the picture out of the file)
    Extract,
    /// Replace all embedded pictures with a new one
    Replace,
    /// Write metadata fields
    EditTags,
}

/// Why an operation was skipped rather than performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The file has no tag container at all
    NoTags,
    /// A tag container exists but holds no embedded picture
    NoCoverArt,
    /// The tag format does not support removing pictures
    UnsupportedFormat,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoTags => f.write_str("No tags"),
            SkipReason::NoCoverArt => f.write_str("No cover art"),
            SkipReason::UnsupportedFormat => {
                f.write_str("Tag format does not support cover deletion")
            }
        }
    }
}

/// Result of a single operation against a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The operation ran to completion.
    Done {
        /// Which operation completed
        kind: OpKind,
        /// File written by the operation, if any (extracted picture path)
        output: Option<PathBuf>,
    },
    /// The operation had nothing to do for this file.
    Skipped(SkipReason),
}

impl Outcome {
    /// Shorthand for a completed operation with no output file.
    pub fn done(kind: OpKind) -> Self {
        Outcome::Done { kind, output: None }
    }

    /// Shorthand for a skip.
    pub fn skipped(reason: SkipReason) -> Self {
        Outcome::Skipped(reason)
    }

    /// Returns `true` if the operation completed rather than skipped.
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done { .. })
    }

    /// The output file path, if the operation produced one.
    pub fn output(&self) -> Option<&PathBuf> {
        match self {
            Outcome::Done { output, .. } => output.as_ref(),
            Outcome::Skipped(_) => None,
        }
    }
}
