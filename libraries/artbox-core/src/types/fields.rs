//! Editable metadata field set.

use serde::{Deserialize, Serialize};

/// The metadata fields the editor reads and writes.
///
/// `None` means "leave this field untouched" on write; readers populate
/// `None` for fields absent from the tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackFields {
    /// Track title
    pub title: Option<String>,

    /// Artist name
    pub artist: Option<String>,

    /// Album name
    pub album: Option<String>,

    /// Genre
    pub genre: Option<String>,

    /// Release date, kept as a free-form string
    pub date: Option<String>,
}

impl TrackFields {
    /// Returns `true` if no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.genre.is_none()
            && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(TrackFields::default().is_empty());
    }

    #[test]
    fn any_field_makes_it_non_empty() {
        let fields = TrackFields {
            genre: Some("Jazz".to_string()),
            ..TrackFields::default()
        };
        assert!(!fields.is_empty());
    }
}
