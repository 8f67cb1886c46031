// Replays the tour pages and prints each snippet next to its value.
//
// Usage: guided_tour [PAGE...] [--json] [--no-color] [--config PATH]

use anyhow::{Context, Result};
use std::env;

use guided_tour::config::{CliArgs, OutputFormat, TourConfig};
use guided_tour::logging::init_logging;
use guided_tour::render::{render_json, render_text};
use guided_tour::tour::run_pages;

fn main() -> Result<()> {
    init_logging();

    let args = CliArgs::parse(env::args().skip(1)).context("invalid arguments")?;

    let config = match &args.config_path {
        Some(path) => TourConfig::load(path)
            .with_context(|| format!("could not load config from {}", path.display()))?,
        None => TourConfig::default(),
    }
    .with_overrides(&args);

    let transcripts = run_pages(&config.pages);

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&transcripts, config.color)),
        OutputFormat::Json => println!("{}", render_json(&transcripts)?),
    }

    Ok(())
}
