/// Artbox - batch cover-art and metadata tag manager
use anyhow::Context as _;
use artbox_core::{Outcome, TrackFields};
use artbox_covers::CoverOps;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod report;

use report::Reporter;

#[derive(Parser)]
#[command(name = "artbox")]
#[command(about = "Manage embedded cover art and metadata tags in audio files", long_about = None)]
struct Cli {
    /// Emit one JSON object per file instead of human-readable lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save each file's first embedded picture to the output directory
    Copy {
        #[command(flatten)]
        output: OutputDirArg,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Remove all embedded pictures, rewriting files in place
    Delete {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Copy each file's first embedded picture, then remove all pictures
    Extract {
        #[command(flatten)]
        output: OutputDirArg,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Replace all embedded pictures with a new front cover image
    Replace {
        /// Replacement image (jpg/jpeg/png)
        #[arg(short, long)]
        image: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Print the metadata fields of a file
    Show {
        /// Audio file
        path: PathBuf,
    },
    /// Write metadata fields; omitted fields are left untouched
    Set {
        /// Track title
        #[arg(long)]
        title: Option<String>,

        /// Artist name
        #[arg(long)]
        artist: Option<String>,

        /// Album name
        #[arg(long)]
        album: Option<String>,

        /// Genre
        #[arg(long)]
        genre: Option<String>,

        /// Release date
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        selection: SelectionArgs,
    },
}

#[derive(Args)]
struct OutputDirArg {
    /// Directory for extracted pictures (created if absent)
    #[arg(short = 'o', long, default_value = "cover_art")]
    output_dir: PathBuf,
}

#[derive(Args)]
struct SelectionArgs {
    /// Audio files, or directories searched non-recursively
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artbox=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let reporter = Reporter::new(cli.json);

    match cli.command {
        Commands::Copy { output, selection } => {
            let ops = init_cover_ops(output)?;
            run_batch(&reporter, &selection, |path| {
                ops.copy(path).map_err(Into::into)
            })
        }
        Commands::Delete { selection } => {
            // delete never writes extracted pictures; the output dir is unused
            let ops = CoverOps::new("cover_art");
            run_batch(&reporter, &selection, |path| {
                ops.delete(path).map_err(Into::into)
            })
        }
        Commands::Extract { output, selection } => {
            let ops = init_cover_ops(output)?;
            run_batch(&reporter, &selection, |path| {
                ops.extract(path).map_err(Into::into)
            })
        }
        Commands::Replace { image, selection } => {
            let ops = CoverOps::new("cover_art");
            run_batch(&reporter, &selection, |path| {
                ops.replace(path, &image).map_err(Into::into)
            })
        }
        Commands::Show { path } => {
            let fields = artbox_tags::read_fields(&path)
                .with_context(|| format!("could not read \"{}\"", path.display()))?;
            reporter.fields(&path, &fields);
            Ok(())
        }
        Commands::Set {
            title,
            artist,
            album,
            genre,
            date,
            selection,
        } => {
            let fields = TrackFields {
                title,
                artist,
                album,
                genre,
                date,
            };
            if fields.is_empty() {
                anyhow::bail!("nothing to write: pass at least one of --title/--artist/--album/--genre/--date");
            }
            run_batch(&reporter, &selection, |path| {
                artbox_tags::apply_fields(path, &fields).map_err(Into::into)
            })
        }
    }
}

fn init_cover_ops(output: OutputDirArg) -> anyhow::Result<CoverOps> {
    let ops = CoverOps::new(output.output_dir);
    ops.init().with_context(|| {
        format!(
            "could not create output directory \"{}\"",
            ops.output_dir().display()
        )
    })?;
    Ok(ops)
}

/// Run one operation over every selected file.
///
/// A per-file failure is reported and counted, never fatal; the batch
/// always finishes its whole file list. The process fails at the end iff
/// at least one file failed hard (skips are not failures).
fn run_batch(
    reporter: &Reporter,
    selection: &SelectionArgs,
    op: impl Fn(&Path) -> anyhow::Result<Outcome>,
) -> anyhow::Result<()> {
    let files = expand_paths(&selection.paths)?;
    if files.is_empty() {
        anyhow::bail!("no audio files selected");
    }
    tracing::debug!(files = files.len(), "starting batch");

    let mut failures = 0usize;
    for file in &files {
        match op(file) {
            Ok(outcome) => reporter.outcome(file, &outcome),
            Err(error) => {
                failures += 1;
                reporter.error(file, &error);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file(s) failed", files.len());
    }
    Ok(())
}

/// Expand the positional paths: directories become their audio files
/// (non-recursive, extension-filtered), files pass through as given.
fn expand_paths(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = artbox_tags::scan_audio_files(path)
                .with_context(|| format!("could not scan \"{}\"", path.display()))?;
            tracing::debug!(dir = %path.display(), files = found.len(), "expanded directory");
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn expand_keeps_explicit_files_and_expands_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.mp3"), b"x").unwrap();
        fs::write(dir.path().join("a.wav"), b"x").unwrap();
        fs::write(dir.path().join("skip.txt"), b"x").unwrap();
        let explicit = dir.path().join("explicit.weird");
        fs::write(&explicit, b"x").unwrap();

        let files = expand_paths(&[dir.path().to_path_buf(), explicit.clone()]).unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("a.wav"), dir.path().join("b.mp3"), explicit]
        );
    }
}
