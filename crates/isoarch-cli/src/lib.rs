//! CLI logic for the Isoarch diagram tool.
//!
//! This module contains the core CLI logic: load configuration, parse and
//! validate the input, and emit the diagram model as JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write as _},
};

use log::info;

use isoarch::{DiagramBuilder, IsoarchError};

/// Run the Isoarch CLI application
///
/// Parses and validates the input file. Unless `--check` is given, the
/// diagram model is written as JSON to the output file, or to stdout when no
/// output path is set.
///
/// # Errors
///
/// Returns `IsoarchError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Syntax errors
/// - Validation errors
pub fn run(args: &Args) -> Result<(), IsoarchError> {
    info!(
        input_path = args.input,
        output_path:? = args.output,
        check = args.check;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source)?;

    if args.check {
        info!(input_path = args.input; "Diagram is valid");
        return Ok(());
    }

    let json = builder.to_json(&diagram)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!(output_file = path; "Diagram model written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
