//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// depaudit - Check that the desktop app's system dependencies are installed.
#[derive(Debug, Parser)]
#[command(name = "depaudit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print debug logging to standard output
    #[arg(short, long)]
    pub verbose: bool,

    /// Batch mode: never prompt and never run the install command
    #[arg(short, long)]
    pub batch: bool,

    /// Path to config file (overrides ~/.config/depaudit/config.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
