//! CLI logic for the Callout scene renderer.
//!
//! This module contains the core CLI logic: load the configuration, parse a
//! scene file and write the rendered SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use callout::{CalloutBuilder, CalloutError};

/// Run the Callout CLI application
///
/// This function processes the input scene through the Callout pipeline
/// and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `CalloutError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CalloutError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = CalloutBuilder::new(app_config);
    let scene = builder.parse(&source)?;
    let svg = builder.render_svg(&scene)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
