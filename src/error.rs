// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unable to find “{}”, make sure to specify the proper path with “-i” (see --help)", .0.display())]
    InputNotFound(PathBuf),

    #[error("unable to find images: forgot to select a delimiter or to export them? (missing column “{0}”)")]
    MissingImageColumns(String),

    #[error("delimiter {0:?} is not a single ASCII character")]
    BadDelimiter(char),

    #[error("CSV error in “{}”: {source}", path.display())]
    Csv { path: PathBuf, #[source] source: ::csv::Error },

    #[error("unable to read template “{}”: {source}", path.display())]
    Template { path: PathBuf, #[source] source: std::io::Error },

    #[error("unable to write to “{}”, make sure that the path exists and that you have the write permissions: {source}", path.display())]
    Write { path: PathBuf, #[source] source: std::io::Error },

    #[error("I/O error on “{}”: {source}", path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, ExportError>;
