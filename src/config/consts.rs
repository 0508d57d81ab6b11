// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "gameDB.csv";
pub const DEFAULT_DELIMITER: char = ',';

/// Cover columns, best first. All three must exist in the export.
pub const IMAGE_COLUMNS: [&str; 3] = ["verticalCover", "backgroundImage", "squareIcon"];

// Image list
pub const DEFAULT_IMAGE_LIST: &str = "imagelist.txt";
pub const IMAGES_DIR: &str = "images";

// HTML5
pub const DEFAULT_OUTPUT: &str = "index.html";
pub const DEFAULT_TITLE: &str = "GOG Galaxy 2 game library";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const TEMPLATES_DIR: &str = "templates";
/// `templates/<name>.custom<ext>` wins over `templates/<name><ext>`.
pub const CUSTOM_MARKER: &str = ".custom";

/// Entry ids are rounded up to the next multiple of this past the game count.
pub const ID_ROUNDING: usize = 1000;
