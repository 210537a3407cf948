//! spanfit CLI library
//!
//! This module contains the core CLI logic for the spanfit placement tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use spanfit::{LayoutBuilder, SpanfitError};

/// Run the spanfit CLI application
///
/// Reads the layout file, solves it, writes the SVG diagram to the output
/// path and prints the plan summary to standard output.
///
/// # Errors
///
/// Returns `SpanfitError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed layout files
/// - Invalid placement inputs and rejected counts
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SpanfitError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing layout"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = LayoutBuilder::new(app_config);
    let mut input = builder.parse(&source)?;
    if let Some(count) = args.count {
        info!(count = count; "Count overridden from the command line");
        input = input.with_count(Some(count));
    }

    let mut session = builder.new_session();
    let plan = builder.plan(&input, &mut session)?;
    let svg = builder.render_svg(&plan)?;

    fs::write(&args.output, svg)?;
    print!("{}", builder.summarize(&plan));

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
