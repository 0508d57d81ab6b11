// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};

use crate::config::consts::*;
use crate::config::options::{Actions, ExportOptions};
use crate::progress::Progress;
use crate::runner;

/// GOG Galaxy 2 export converter: parses the “GOG Galaxy 2 exporter” CSV to
/// generate a list of cover images and/or a searchable HTML5 list of games.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// CSV field separator
    #[arg(short = 'd', value_name = "CHARACTER", default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// CSV file path
    #[arg(short = 'i', long = "input", value_name = "FN", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Pathname of the generated list of cover URLs
    #[arg(short = 'l', long = "list", value_name = "FN", default_value = DEFAULT_IMAGE_LIST)]
    pub list: PathBuf,

    /// Pathname of the generated HTML5 games list
    #[arg(short = 'o', long = "output", value_name = "FN", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Create an image list
    #[arg(long = "image-list")]
    pub image_list: bool,

    /// Export the game list in HTML5 format
    #[arg(long = "html5")]
    pub html5: bool,

    /// Title of the HTML5 file
    #[arg(long, value_name = "TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Embed CSS & JS instead of linking the resources
    #[arg(long)]
    pub embed: bool,

    /// Directory holding index/game/style/script templates
    #[arg(long, value_name = "DIR", default_value = TEMPLATES_DIR)]
    pub templates: PathBuf,

    /// Only render these entry ids
    #[arg(long = "debug", num_args = 1.., value_name = "ID", hide = true)]
    pub debug: Option<Vec<usize>>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_options(self) -> ExportOptions {
        ExportOptions {
            actions: Actions { image_list: self.image_list, html5: self.html5 },
            delimiter: self.delimiter,
            input: self.input,
            image_list: self.list,
            html: self.output,
            title: self.title,
            embed: self.embed,
            templates_dir: self.templates,
            debug_ids: self.debug,
            ..ExportOptions::default()
        }
    }
}

/// Prints status lines as-is on stdout.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let opts = args.into_options();
    if !opts.actions.any() {
        Args::command().print_help()?;
        return Ok(());
    }

    runner::run(&opts, &mut ConsoleProgress)?;
    Ok(())
}
