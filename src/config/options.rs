// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Which outputs a run produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Actions {
    pub image_list: bool,
    pub html5: bool,
}

impl Actions {
    pub fn any(&self) -> bool { self.image_list || self.html5 }
}

/// Fully resolved run configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub actions: Actions,
    pub delimiter: char,
    pub input: PathBuf,
    pub image_list: PathBuf,
    pub html: PathBuf,
    pub title: String,
    /// Inline CSS/JS instead of linking the template files.
    pub embed: bool,
    pub templates_dir: PathBuf,
    /// Directory cover images are downloaded into.
    pub images_dir: PathBuf,
    /// Render only these entry ids (and skip the per-game image CSS).
    pub debug_ids: Option<Vec<usize>>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            actions: Actions::default(),
            delimiter: DEFAULT_DELIMITER,
            input: PathBuf::from(DEFAULT_INPUT),
            image_list: PathBuf::from(DEFAULT_IMAGE_LIST),
            html: PathBuf::from(DEFAULT_OUTPUT),
            title: s!(DEFAULT_TITLE),
            embed: false,
            templates_dir: PathBuf::from(TEMPLATES_DIR),
            images_dir: PathBuf::from(IMAGES_DIR),
            debug_ids: None,
        }
    }
}

impl ExportOptions {
    /// The CSV reader wants a single byte.
    pub fn delimiter_byte(&self) -> Option<u8> {
        u8::try_from(u32::from(self.delimiter)).ok().filter(u8::is_ascii)
    }

    pub fn is_debug_id(&self, id: usize) -> bool {
        self.debug_ids.as_ref().is_none_or(|ids| ids.contains(&id))
    }
}
