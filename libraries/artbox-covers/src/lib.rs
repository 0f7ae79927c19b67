//! Artbox Covers
//!
//! Cover-art operations for audio files, built on the Lofty tagging
//! library. Supports MP3 (ID3v2 APIC frames), FLAC
//! (METADATA_BLOCK_PICTURE), and the other containers Lofty tags.
//!
//! Four operations, all single-shot and stateless:
//!
//! - **copy** — save the first embedded picture to the output directory
//! - **delete** — remove all embedded pictures, rewriting the file
//! - **extract** — copy, then delete
//! - **replace** — swap all embedded pictures for a new front cover
//!
//! Operations return a structured [`Outcome`](artbox_core::Outcome);
//! missing tags or pictures are skips, not errors, so batch callers can
//! keep going without string-matching.
//!
//! # Example
//!
//! ```no_run
//! use artbox_covers::CoverOps;
//! use std::path::Path;
//!
//! # fn main() -> artbox_covers::Result<()> {
//! let ops = CoverOps::new("cover_art");
//! ops.init()?; // create the output directory once
//!
//! let outcome = ops.copy(Path::new("music/track.mp3"))?;
//! if let Some(output) = outcome.output() {
//!     println!("cover saved to {}", output.display());
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod ops;

// Re-export public API
pub use error::{CoversError, Result};
pub use ops::CoverOps;
