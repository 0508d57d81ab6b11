// src/game.rs
// One library entry, built from a CSV row.

use tracing::{debug, warn};

use crate::config::consts::IMAGE_COLUMNS;
use crate::core::search::{self, SearchKeys};
use crate::core::Transliterator;
use crate::csv::Row;
use crate::error::{ExportError, Result};
use crate::images;

#[derive(Clone, Debug)]
pub struct Game {
    /// Title with the export's typographic leftovers fixed.
    pub title: String,
    /// Transliterated, article-last title; the sort key.
    pub sort_title: String,
    pub search: SearchKeys,
    /// Cover URL from the first non-empty image column.
    pub image_url: String,
    /// Local candidates for the cover, primary first.
    pub image_paths: Vec<String>,
    row: Row,
}

impl Game {
    /// `Ok(None)` for rows without any cover image; those are not listed.
    /// A missing image *column* means the export (or the delimiter) is wrong;
    /// rows always carry every header, so only the header can lack one.
    pub fn from_row(row: Row, images_dir: &str, translit: &dyn Transliterator) -> Result<Option<Game>> {
        let mut image_url = None;
        for column in IMAGE_COLUMNS {
            let value = row.get(column).ok_or_else(|| ExportError::MissingImageColumns(s!(column)))?;
            if !value.is_empty() {
                image_url = Some(value.clone());
                break;
            }
        }
        let Some(image_url) = image_url else {
            debug!(title = row.get("title").map_or("", String::as_str), "no cover image, skipping");
            return Ok(None);
        };

        let image_paths = images::path_from_url(&image_url, images_dir);
        if image_paths.is_empty() {
            warn!(url = %image_url, "cover URL has no file name, skipping");
            return Ok(None);
        }

        let title = row.get("title").map_or_else(String::new, |t| t.replace("...", "…"));
        let sort_title = search::sortable_title(&title, translit);
        let search = search::generate_keys_with(&title, translit);

        Ok(Some(Game { title, sort_title, search, image_url, image_paths, row }))
    }

    /// Raw row field; absent columns read as empty.
    pub fn field(&self, name: &str) -> &str {
        self.row.get(name).map_or("", String::as_str)
    }
}

/// Builds games from rows and sorts them naturally by `sort_title`.
pub fn collect_games(rows: Vec<Row>, images_dir: &str, translit: &dyn Transliterator) -> Result<Vec<Game>> {
    let mut games = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(game) = Game::from_row(row, images_dir, translit)? {
            games.push(game);
        }
    }
    games.sort_by(|a, b| natord::compare(&a.sort_title, &b.sort_title));
    Ok(games)
}
