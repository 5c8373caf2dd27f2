//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Cardpress card asset build CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Crop the art region out of full card scans
    #[command(visible_alias = "c")]
    Crop {
        #[command(flatten)]
        args: CropArgs,
    },

    /// Minify set symbol SVGs and pack them into a zip
    #[command(visible_alias = "s")]
    Symbols {
        #[command(flatten)]
        args: SymbolsArgs,
    },
}

/// Crop command arguments.
///
/// The crop geometry is derived from the declared `--width`/`--height`,
/// not probed per image, so a batch must share one resolution.
#[derive(clap::Args, Debug, Clone)]
pub struct CropArgs {
    /// Directory containing *.full.jpg card scans
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub src: PathBuf,

    /// Pixel width of the input scans
    #[arg(long)]
    pub width: u32,

    /// Pixel height of the input scans
    #[arg(long)]
    pub height: u32,

    /// Output directory for cropped art
    #[arg(short, long, default_value = "dist", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Symbols command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SymbolsArgs {
    /// Directory containing *.svg set symbols
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub src: PathBuf,

    /// Output directory for minified symbols and the archive
    #[arg(short, long, default_value = "dist", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
