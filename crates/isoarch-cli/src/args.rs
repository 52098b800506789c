//! Command-line argument definitions for the Isoarch CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, check-only mode, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Isoarch diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Isoarch file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output JSON file; the model goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Only parse and validate; write no output
    #[arg(long)]
    pub check: bool,
}
