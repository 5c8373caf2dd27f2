//! Command-line interface module.

mod args;
pub mod crop;
pub mod symbols;

pub use args::{Cli, Commands, CropArgs, SymbolsArgs};
