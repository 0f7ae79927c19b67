//! Per-file result presentation.
//!
//! Libraries return structured outcomes; this module alone decides how
//! they are printed — classic bracketed lines, or one JSON object per
//! file when `--json` is given.

use artbox_core::{OpKind, Outcome, SkipReason, TrackFields};
use serde::Serialize;
use std::path::Path;

/// Prints per-file results in the selected output mode.
pub struct Reporter {
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
enum ReportBody<'a> {
    Done {
        kind: OpKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<&'a Path>,
    },
    Skipped {
        reason: SkipReason,
    },
    Error {
        message: String,
    },
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: &'a Path,
    #[serde(flatten)]
    body: ReportBody<'a>,
}

impl Reporter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Report a completed or skipped operation.
    pub fn outcome(&self, path: &Path, outcome: &Outcome) {
        if self.json {
            let body = match outcome {
                Outcome::Done { kind, output } => ReportBody::Done {
                    kind: *kind,
                    output: output.as_deref(),
                },
                Outcome::Skipped(reason) => ReportBody::Skipped { reason: *reason },
            };
            self.emit(path, body);
        } else {
            println!("{}", human_line(path, outcome));
        }
    }

    /// Report a hard failure. The batch continues after this.
    pub fn error(&self, path: &Path, error: &anyhow::Error) {
        if self.json {
            self.emit(
                path,
                ReportBody::Error {
                    message: format!("{error:#}"),
                },
            );
        } else {
            eprintln!("[ERROR] Failed on \"{}\": {error:#}", path.display());
        }
    }

    /// Report the metadata field set of a file (`show` command).
    pub fn fields(&self, path: &Path, fields: &TrackFields) {
        if self.json {
            let line = serde_json::json!({ "path": path, "fields": fields });
            println!("{line}");
        } else {
            println!("{}", path.display());
            println!("  title:  {}", fields.title.as_deref().unwrap_or(""));
            println!("  artist: {}", fields.artist.as_deref().unwrap_or(""));
            println!("  album:  {}", fields.album.as_deref().unwrap_or(""));
            println!("  genre:  {}", fields.genre.as_deref().unwrap_or(""));
            println!("  date:   {}", fields.date.as_deref().unwrap_or(""));
        }
    }

    fn emit(&self, path: &Path, body: ReportBody<'_>) {
        let report = FileReport { path, body };
        match serde_json::to_string(&report) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("[ERROR] Could not serialize report: {e}"),
        }
    }
}

fn human_line(path: &Path, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Done { kind, output } => {
            let target = output.as_deref().unwrap_or(path);
            match kind {
                OpKind::Copy => format!("[COPY] Cover art saved to \"{}\"", target.display()),
                OpKind::Delete => {
                    format!("[DELETE] Cover art removed from \"{}\"", path.display())
                }
                OpKind::Extract => format!("[EXTRACT] Cover art moved to \"{}\"", target.display()),
                OpKind::Replace => {
                    format!("[REPLACE] Cover art replaced in \"{}\"", path.display())
                }
                OpKind::EditTags => format!("[UPDATE] Metadata saved in \"{}\"", path.display()),
            }
        }
        Outcome::Skipped(reason) => format!("[SKIP] {reason}: \"{}\"", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn copy_line_names_the_output_file() {
        let outcome = Outcome::Done {
            kind: OpKind::Copy,
            output: Some(PathBuf::from("cover_art/song.jpg")),
        };
        assert_eq!(
            human_line(Path::new("song.mp3"), &outcome),
            "[COPY] Cover art saved to \"cover_art/song.jpg\""
        );
    }

    #[test]
    fn skip_line_contains_the_reason() {
        let line = human_line(
            Path::new("song.mp3"),
            &Outcome::Skipped(SkipReason::NoTags),
        );
        assert_eq!(line, "[SKIP] No tags: \"song.mp3\"");
    }

    #[test]
    fn delete_line_names_the_source_file() {
        let line = human_line(Path::new("a/b.mp3"), &Outcome::done(OpKind::Delete));
        assert_eq!(line, "[DELETE] Cover art removed from \"a/b.mp3\"");
    }

    #[test]
    fn json_report_is_flat() {
        let report = FileReport {
            path: Path::new("song.mp3"),
            body: ReportBody::Skipped {
                reason: SkipReason::NoCoverArt,
            },
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["path"], "song.mp3");
        assert_eq!(value["status"], "skipped");
        assert_eq!(value["reason"], "no_cover_art");
    }

    #[test]
    fn json_error_report_carries_the_message() {
        let report = FileReport {
            path: Path::new("song.mp3"),
            body: ReportBody::Error {
                message: "boom".to_string(),
            },
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "boom");
    }
}
