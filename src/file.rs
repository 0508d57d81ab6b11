// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::CUSTOM_MARKER;
use crate::error::{ExportError, Result};

/// Writes `contents` to `path`, creating missing parent directories.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|source| ExportError::Write { path: path.to_path_buf(), source })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    let io_err = |source| ExportError::Io { path: dir.to_path_buf(), source };
    if dir.exists() && !dir.is_dir() {
        return Err(io_err(std::io::Error::other("path exists but is not a directory")));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(io_err)?; }
    Ok(())
}

/// `<dir>/<stem>.custom<ext>` when it exists, else `<dir>/<stem><ext>`.
pub fn resolve_template(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let custom = dir.join(join!(stem, CUSTOM_MARKER, ext));
    if custom.is_file() { custom } else { dir.join(join!(stem, ext)) }
}

/// Path as it should appear in an `href`/`src` attribute.
pub fn to_url_path(p: &Path) -> String {
    p.to_string_lossy().replace('\\', "/")
}
