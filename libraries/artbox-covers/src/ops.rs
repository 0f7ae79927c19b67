//! Cover-art operations against a single audio file.

use crate::error::{CoversError, Result};
use artbox_core::{OpKind, Outcome, SkipReason};
use lofty::config::WriteOptions;
use lofty::error::ErrorKind;
use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::tag::{Tag, TagExt};
use std::fs;
use std::path::{Path, PathBuf};

/// Executes cover-art operations, writing extracted pictures to a fixed
/// output directory.
///
/// Construction has no side effects; call [`CoverOps::init`] once before
/// running operations to create the output directory.
///
/// Read operations ([`copy`](CoverOps::copy), the copy phase of
/// [`extract`](CoverOps::extract)) address only the first picture in tag
/// order. Write operations ([`delete`](CoverOps::delete),
/// [`replace`](CoverOps::replace)) clear the entire picture set. The
/// asymmetry is deliberate and kept as documented behavior.
#[derive(Debug, Clone)]
pub struct CoverOps {
    output_dir: PathBuf,
}

impl CoverOps {
    /// Create an executor that extracts pictures into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The configured output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory if it does not exist.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Copy the first embedded picture to
    /// `<output_dir>/<basename>.<ext>` without touching the source file.
    ///
    /// `<ext>` comes from the picture's MIME type; known types use their
    /// conventional extension (`image/jpeg` -> `jpg`). Running twice
    /// overwrites the same output file.
    pub fn copy(&self, path: &Path) -> Result<Outcome> {
        let tagged = read_tagged(path)?;

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return Ok(Outcome::skipped(SkipReason::NoTags));
        };
        let Some(picture) = tag.pictures().first() else {
            return Ok(Outcome::skipped(SkipReason::NoCoverArt));
        };

        let stem = path
            .file_stem()
            .map_or_else(|| String::from("cover"), |s| s.to_string_lossy().into_owned());
        let output = self
            .output_dir
            .join(format!("{stem}.{}", picture_extension(picture)));

        fs::write(&output, picture.data()).map_err(|e| CoversError::WriteImage {
            path: output.clone(),
            source: e,
        })?;

        Ok(Outcome::Done {
            kind: OpKind::Copy,
            output: Some(output),
        })
    }

    /// Remove every embedded picture and rewrite the file in place.
    ///
    /// Tags with zero pictures succeed vacuously without rewriting the
    /// file. A tag format that cannot be written back reports
    /// [`SkipReason::UnsupportedFormat`].
    pub fn delete(&self, path: &Path) -> Result<Outcome> {
        let tagged = read_tagged(path)?;

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return Ok(Outcome::skipped(SkipReason::NoTags));
        };

        if tag.pictures().is_empty() {
            // Nothing to remove; leave the file bytes untouched.
            return Ok(Outcome::done(OpKind::Delete));
        }

        let mut tag = tag.clone();
        clear_pictures(&mut tag);

        match tag.save_to_path(path, WriteOptions::default()) {
            Ok(()) => Ok(Outcome::done(OpKind::Delete)),
            Err(e) if matches!(e.kind(), ErrorKind::UnsupportedTag) => {
                Ok(Outcome::skipped(SkipReason::UnsupportedFormat))
            }
            Err(e) => Err(CoversError::WriteTags {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Copy the first picture out of the file, then delete all pictures.
    ///
    /// If the copy phase finds nothing, the skip is returned without
    /// attempting the delete. If the delete phase skips, that skip is the
    /// result (the copied picture stays on disk).
    pub fn extract(&self, path: &Path) -> Result<Outcome> {
        match self.copy(path)? {
            Outcome::Done { output, .. } => match self.delete(path)? {
                Outcome::Done { .. } => Ok(Outcome::Done {
                    kind: OpKind::Extract,
                    output,
                }),
                skipped => Ok(skipped),
            },
            skipped => Ok(skipped),
        }
    }

    /// Replace all embedded pictures with the image at `image_path`.
    ///
    /// The MIME type is derived from the image file's extension. A tag
    /// container is created when the file has none. The tag is persisted
    /// with the ID3v2.3 compatibility policy.
    pub fn replace(&self, path: &Path, image_path: &Path) -> Result<Outcome> {
        let data = fs::read(image_path).map_err(|e| CoversError::ReadImage {
            path: image_path.to_path_buf(),
            source: e,
        })?;
        let mime = image_mime_type(image_path)?;

        let tagged = read_tagged(path)?;
        let mut tag = match tagged.primary_tag().or_else(|| tagged.first_tag()) {
            Some(tag) => tag.clone(),
            None => Tag::new(tagged.primary_tag_type()),
        };

        clear_pictures(&mut tag);
        tag.push_picture(Picture::new_unchecked(
            PictureType::CoverFront,
            Some(mime),
            Some(String::from("Cover")),
            data,
        ));

        tag.save_to_path(path, WriteOptions::default().use_id3v23(true))
            .map_err(|e| CoversError::WriteTags {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Outcome::done(OpKind::Replace))
    }
}

fn read_tagged(path: &Path) -> Result<lofty::file::TaggedFile> {
    if !path.exists() {
        return Err(CoversError::FileNotFound(path.to_path_buf()));
    }

    lofty::read_from_path(path).map_err(|e| CoversError::ReadTags {
        path: path.to_path_buf(),
        source: e,
    })
}

fn clear_pictures(tag: &mut Tag) {
    while !tag.pictures().is_empty() {
        tag.remove_picture(0);
    }
}

/// Extension for an extracted picture file.
///
/// Known MIME types map to their conventional extension; unknown ones
/// fall back to the raw MIME subtype.
fn picture_extension(picture: &Picture) -> String {
    match picture.mime_type() {
        Some(mime) => match mime.ext() {
            Some(ext) => ext.to_string(),
            None => mime
                .as_str()
                .rsplit('/')
                .next()
                .unwrap_or("bin")
                .to_string(),
        },
        None => String::from("bin"),
    }
}

/// MIME type for a replacement image, derived from its file extension.
fn image_mime_type(image_path: &Path) -> Result<MimeType> {
    let ext = image_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .ok_or_else(|| CoversError::UnknownImageType(image_path.to_path_buf()))?;

    // "image/jpg" normalizes to MimeType::Jpeg
    Ok(MimeType::from_str(&format!("image/{ext}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_pictures_use_jpg_extension() {
        let picture = Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::Jpeg),
            None,
            vec![0xFF, 0xD8],
        );
        assert_eq!(picture_extension(&picture), "jpg");
    }

    #[test]
    fn unknown_mime_falls_back_to_subtype() {
        let picture = Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::Unknown("image/webp".to_string())),
            None,
            vec![0x00],
        );
        assert_eq!(picture_extension(&picture), "webp");
    }

    #[test]
    fn image_mime_comes_from_extension() {
        assert_eq!(
            image_mime_type(Path::new("cover.png")).unwrap(),
            MimeType::Png
        );
        assert_eq!(
            image_mime_type(Path::new("cover.JPG")).unwrap(),
            MimeType::Jpeg
        );
        assert_eq!(
            image_mime_type(Path::new("front.jpeg")).unwrap(),
            MimeType::Jpeg
        );
    }

    #[test]
    fn extensionless_image_is_rejected() {
        assert!(matches!(
            image_mime_type(Path::new("cover")),
            Err(CoversError::UnknownImageType(_))
        ));
    }

    #[test]
    fn copy_nonexistent_file_returns_error() {
        let ops = CoverOps::new("cover_art");
        let result = ops.copy(Path::new("/nonexistent/file.mp3"));
        assert!(matches!(result, Err(CoversError::FileNotFound(_))));
    }
}
