//! Non-recursive audio file discovery.

use crate::error::{Result, TagsError};
use std::path::{Path, PathBuf};

/// List the audio files directly inside `dir`, sorted by path.
///
/// Non-recursive by design: subdirectories are not entered. Entries are
/// filtered by the supported extension set (case-insensitive).
pub fn scan_audio_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(TagsError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir).max_depth(1).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if path.is_file() && artbox_core::is_audio_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.mp3"), b"x").unwrap();
        fs::write(dir.path().join("a.FLAC"), b"x").unwrap();
        fs::write(dir.path().join("cover.jpg"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let files = scan_audio_files(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("a.FLAC"), dir.path().join("b.mp3")]
        );
    }

    #[test]
    fn scan_does_not_recurse() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("top.mp3"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.mp3"), b"x").unwrap();

        let files = scan_audio_files(dir.path()).unwrap();

        assert_eq!(files, vec![dir.path().join("top.mp3")]);
    }

    #[test]
    fn traversal_failures_surface_as_io_errors() {
        let err = TagsError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        assert!(matches!(err, TagsError::Io(_)));
        assert!(err.to_string().starts_with("Directory scan failed"));
    }

    #[test]
    fn scan_rejects_non_directories() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("song.mp3");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(
            scan_audio_files(&file),
            Err(TagsError::NotADirectory(_))
        ));
    }
}
