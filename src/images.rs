// src/images.rs
// Cover image bookkeeping: local paths derived from URLs, the download list,
// and tidying up wget's query-suffixed file names.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::file;
use crate::game::Game;

static FILE_NAME: LazyLock<Regex> = regex!(r"/([^/]+?)(?:\?([^/]+))?$");

/// Local candidates for an image URL, primary first.
///
/// `…/abc.jpg` → `["images/abc.jpg"]`;
/// `…/abc.jpg?ns=x` → `["images/abc.jpg", "images/abc.jpg@ns=x"]` (wget's name).
/// Paths use `/` because the primary one also ends up in CSS.
pub fn path_from_url(url: &str, images_dir: &str) -> Vec<String> {
    let Some(caps) = FILE_NAME.captures(url) else {
        return Vec::new();
    };
    let name = caps.get(1).map_or("", |m| m.as_str());
    let dir = images_dir.trim_end_matches(['/', '\\']);

    let mut paths = vec![format!("{dir}/{name}")];
    if let Some(query) = caps.get(2) {
        paths.push(format!("{dir}/{name}@{}", query.as_str()));
    }
    paths
}

/// URLs of every game with no local copy under any candidate path.
pub fn missing_images(games: &[Game]) -> Vec<&str> {
    games
        .iter()
        .filter(|g| !g.image_paths.iter().any(|p| Path::new(p).exists()))
        .map(|g| g.image_url.as_str())
        .collect()
}

/// Writes the download list, one URL per line. Returns how many were listed.
pub fn write_image_list(games: &[Game], images_dir: &Path, out: &Path) -> Result<usize> {
    file::ensure_directory(images_dir)?;

    let urls = missing_images(games);
    if urls.is_empty() {
        return Ok(0);
    }
    file::write_text(out, &urls.join("\n"))?;
    Ok(urls.len())
}

/// Moves an alternate download (`name@query`) onto the primary path.
pub fn promote_alternates(game: &Game) -> Result<()> {
    let Some((primary, alternates)) = game.image_paths.split_first() else {
        return Ok(());
    };
    for alt in alternates {
        let alt = Path::new(alt);
        if alt.exists() {
            debug!(from = %alt.display(), to = %primary, "renaming image");
            std::fs::rename(alt, primary)
                .map_err(|source| ExportError::Io { path: alt.to_path_buf(), source })?;
        }
    }
    Ok(())
}
