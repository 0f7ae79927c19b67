//! Artbox Tags
//!
//! Metadata field editing and batch file discovery.
//!
//! This crate provides:
//! - Field reading from audio files into
//!   [`TrackFields`](artbox_core::TrackFields)
//! - Selective field writing (populated fields only; absent fields are
//!   left untouched)
//! - Non-recursive, extension-filtered directory scanning
//!
//! # Example
//!
//! ```rust,no_run
//! use artbox_core::TrackFields;
//! use std::path::Path;
//! # fn example() -> artbox_tags::Result<()> {
//! let fields = artbox_tags::read_fields(Path::new("/music/song.mp3"))?;
//! println!("{:?}", fields.title);
//!
//! let update = TrackFields {
//!     genre: Some("Jazz".to_string()),
//!     ..TrackFields::default()
//! };
//! artbox_tags::apply_fields(Path::new("/music/song.mp3"), &update)?;
//! # Ok(())
//! # }
//! ```

mod editor;
mod error;
mod scanner;

pub use editor::{apply_fields, read_fields};
pub use error::{Result, TagsError};
pub use scanner::scan_audio_files;
