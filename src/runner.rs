// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::config::options::ExportOptions;
use crate::core::Deunicode;
use crate::error::{ExportError, Result};
use crate::game::{self, Game};
use crate::progress::Progress;
use crate::{csv, file, html5, images};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub games: usize,
    pub files_written: Vec<PathBuf>,
}

/// Reads and sorts the games from the configured export file.
pub fn load_games(opts: &ExportOptions) -> Result<Vec<Game>> {
    if !opts.input.is_file() {
        return Err(ExportError::InputNotFound(opts.input.clone()));
    }
    let delimiter = opts.delimiter_byte().ok_or(ExportError::BadDelimiter(opts.delimiter))?;

    let rows = csv::read_rows(&opts.input, delimiter)?;
    let total = rows.len();
    let images_dir = file::to_url_path(&opts.images_dir);
    let games = game::collect_games(rows, &images_dir, &Deunicode)?;
    info!(rows = total, games = games.len(), "export loaded");
    Ok(games)
}

/// Top-level runner: load once, then produce each requested output.
pub fn run(opts: &ExportOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let games = load_games(opts)?;
    let mut summary = RunSummary { games: games.len(), files_written: Vec::new() };

    if opts.actions.image_list {
        let listed = images::write_image_list(&games, &opts.images_dir, &opts.image_list)?;
        if listed == 0 {
            progress.log("No new images to download");
        } else {
            progress.log(&format!(
                "Image list exported, it's suggested to download with `wget -nc -P {} -i \"{}\"`",
                file::to_url_path(&opts.images_dir),
                opts.image_list.display()
            ));
            summary.files_written.push(opts.image_list.clone());
        }
    }

    if opts.actions.html5 {
        summary.files_written.push(html5::export(&games, opts, progress)?);
    }

    progress.finish();
    Ok(summary)
}
