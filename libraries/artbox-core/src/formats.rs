//! Supported audio container formats.

use std::path::Path;

/// File extensions accepted for batch selection.
///
/// Matches the formats the tagging library can read and tag in place.
pub const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "flac", "ogg", "m4a", "mp4", "wav"];

/// Returns `true` if `path` has a supported audio extension
/// (case-insensitive).
pub fn is_audio_file(path: &Path) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy().to_lowercase();
    AUDIO_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_extensions() {
        assert!(is_audio_file(Path::new("song.mp3")));
        assert!(is_audio_file(Path::new("song.flac")));
        assert!(is_audio_file(Path::new("/music/track.wav")));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_audio_file(Path::new("SONG.MP3")));
        assert!(is_audio_file(Path::new("song.Flac")));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!is_audio_file(Path::new("cover.jpg")));
        assert!(!is_audio_file(Path::new("notes.txt")));
        assert!(!is_audio_file(Path::new("no_extension")));
    }
}
