//! Inspection commands: layer usage and translation keys

use super::{load_document, render_json};
use crate::cli::error::CliError;
use crate::config::EngineConfig;
use crate::references::{collect_translation_keys, get_layer_usage, unused_layer_ids};

/// Handle the usage command: where a layer is referenced
pub fn handle_usage(input: &str, layer_id: &str, config: &EngineConfig) -> Result<(), CliError> {
    let doc = load_document(input, config)?;
    if doc.layer(layer_id).is_none() {
        eprintln!("Layer '{}' is not defined in the document", layer_id);
    }

    let usages = get_layer_usage(&doc, layer_id);
    println!("{}", render_json(&usages, config)?);

    if usages.is_empty() && unused_layer_ids(&doc).contains(layer_id) {
        eprintln!("Layer '{}' is not used by any feature", layer_id);
    }
    Ok(())
}

/// Handle the keys command: translation keys in use, one per line
pub fn handle_keys(input: &str, config: &EngineConfig) -> Result<(), CliError> {
    let doc = load_document(input, config)?;
    for key in collect_translation_keys(&doc) {
        println!("{}", key);
    }
    Ok(())
}
