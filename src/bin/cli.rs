// src/bin/cli.rs
use galaxy_export::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
