//! Metadata field reading and writing using lofty.

use crate::error::{Result, TagsError};
use artbox_core::{OpKind, Outcome, TrackFields};
use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::tag::{Accessor, ItemKey, Tag, TagExt};
use std::path::Path;

/// Read the editable field set from `path`.
///
/// A file without any tag container yields an all-`None` field set;
/// missing individual fields come back as `None`.
pub fn read_fields(path: &Path) -> Result<TrackFields> {
    let tagged = read_tagged(path)?;

    let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
        return Ok(TrackFields::default());
    };

    Ok(TrackFields {
        title: tag.title().map(|s| s.into_owned()),
        artist: tag.artist().map(|s| s.into_owned()),
        album: tag.album().map(|s| s.into_owned()),
        genre: tag.genre().map(|s| s.into_owned()),
        date: tag.get_string(&ItemKey::RecordingDate).map(str::to_string),
    })
}

/// Write the populated fields of `fields` to `path`.
///
/// Only `Some`, non-blank values are written; everything else in the tag
/// is left untouched. A tag container is created when the file has none.
/// Passing a field set with nothing to write succeeds without touching
/// the file.
pub fn apply_fields(path: &Path, fields: &TrackFields) -> Result<Outcome> {
    let tagged = read_tagged(path)?;

    let mut tag = match tagged.primary_tag().or_else(|| tagged.first_tag()) {
        Some(tag) => tag.clone(),
        None => Tag::new(tagged.primary_tag_type()),
    };

    let mut changed = false;
    if let Some(title) = non_blank(&fields.title) {
        tag.set_title(title.to_string());
        changed = true;
    }
    if let Some(artist) = non_blank(&fields.artist) {
        tag.set_artist(artist.to_string());
        changed = true;
    }
    if let Some(album) = non_blank(&fields.album) {
        tag.set_album(album.to_string());
        changed = true;
    }
    if let Some(genre) = non_blank(&fields.genre) {
        tag.set_genre(genre.to_string());
        changed = true;
    }
    if let Some(date) = non_blank(&fields.date) {
        tag.insert_text(ItemKey::RecordingDate, date.to_string());
        changed = true;
    }

    if !changed {
        return Ok(Outcome::done(OpKind::EditTags));
    }

    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| TagsError::WriteTags {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(Outcome::done(OpKind::EditTags))
}

fn read_tagged(path: &Path) -> Result<lofty::file::TaggedFile> {
    if !path.exists() {
        return Err(TagsError::FileNotFound(path.to_path_buf()));
    }

    lofty::read_from_path(path).map_err(|e| TagsError::ReadTags {
        path: path.to_path_buf(),
        source: e,
    })
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
