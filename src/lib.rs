// src/lib.rs
// GOG Galaxy 2 export → cover list + searchable HTML5 catalogue.

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod game;
pub mod html5;
pub mod images;
pub mod progress;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use error::{ExportError, Result};
