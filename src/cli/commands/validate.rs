//! Validate command implementation

use super::{load_input, render_json};
use crate::cli::error::CliError;
use crate::config::EngineConfig;
use crate::model::DocumentLoader;

/// Handle the validate command
///
/// Prints the report as JSON. Warnings alone do not fail the command.
pub fn handle_validate(input: &str, config: &EngineConfig) -> Result<(), CliError> {
    let content = load_input(input)?;
    let report = DocumentLoader::with_options(config.validation_options()).validate_text(&content);

    println!("{}", render_json(&report, config)?);

    if !report.valid {
        return Err(CliError::ValidationFailed(report.errors.len()));
    }
    if report.has_warnings() {
        eprintln!("Validation successful with {} warning(s)", report.warnings.len());
    } else {
        eprintln!("Validation successful");
    }
    Ok(())
}
