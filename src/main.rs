//! Cardpress - build tooling for card art crops and set symbol bundles.

mod art;
mod cli;
mod config;
mod frame;
mod logger;
mod symbol;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Crop { args } => cli::crop::run(args),
        Commands::Symbols { args } => cli::symbols::run(args),
    }
}
