//! Limits command handler for listing the planning tables.

use anyhow::{Context, Result};

use crate::output::{format_json, format_limits_text, LimitsReport, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the limits subcommand.
///
/// Prints the payload maxima per aircraft and season and the standard passenger weights.
pub fn handle_limits(format: OutputFormat, palette: &ColorPalette) -> Result<()> {
    let report = LimitsReport::current();
    match format {
        OutputFormat::Text => println!("{}", format_limits_text(&report, palette)),
        OutputFormat::Json => {
            let json = format_json(&report).context("failed to serialize limit tables")?;
            println!("{json}");
        }
    }
    Ok(())
}
