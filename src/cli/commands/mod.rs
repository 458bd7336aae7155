//! CLI command implementations

pub mod inspect;
pub mod translations;
pub mod validate;

use crate::cli::error::CliError;
use crate::config::EngineConfig;
use crate::model::{DocumentLoader, DocumentSaver};
use crate::models::Document;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Load input content from file or stdin
pub fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load and parse a typed document from file or stdin
pub fn load_document(input: &str, config: &EngineConfig) -> Result<Document, CliError> {
    let content = load_input(input)?;
    let loader = DocumentLoader::with_options(config.validation_options());
    Ok(loader.parse(&content)?)
}

/// Write a document as JSON to `output`, or to stdout when no path is given
pub fn write_document(
    doc: &Document,
    output: Option<&Path>,
    config: &EngineConfig,
) -> Result<(), CliError> {
    let text = DocumentSaver::to_json_string(doc, config.output.pretty)?;
    match output {
        Some(path) => std::fs::write(path, format!("{}\n", text))
            .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string())),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

/// Render any serializable value as JSON text using the configured style
pub fn render_json<T: serde::Serialize>(value: &T, config: &EngineConfig) -> Result<String, CliError> {
    let rendered = if config.output.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| CliError::InvalidArgument(format!("Failed to render output: {}", e)))
}
