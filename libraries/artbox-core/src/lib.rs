//! Artbox Core
//!
//! Shared types for the Artbox cover-art and tag tools.
//!
//! This crate defines:
//! - **Field Types**: [`TrackFields`], the editable metadata field set
//! - **Outcome Types**: [`Outcome`], [`OpKind`], [`SkipReason`] — the
//!   structured per-file result model returned by every operation
//! - **Format Filter**: the supported audio extension set used for batch
//!   selection
//!
//! Operations never print; they return an [`Outcome`] (or a hard error)
//! and leave presentation to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod formats;
pub mod types;

// Re-export commonly used types
pub use formats::{is_audio_file, AUDIO_EXTENSIONS};
pub use types::{OpKind, Outcome, SkipReason, TrackFields};
