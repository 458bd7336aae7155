//! Validation functionality
//!
//! Provides validation logic for:
//! - Whole documents (structure, required fields, referential gaps)
//! - Single entities before they are committed from a draft (feature groups, items, layers,
//!   sub-layers, basemaps)
//!
//! Validators are total: malformed input is reported in the [`ValidationReport`], never as a
//! panic or `Err`.

pub mod basemaps;
pub mod document;
mod fields;
pub mod features;
pub mod layers;
pub mod report;

pub use basemaps::{validate_basemap, validate_basemap_value};
pub use document::{
    ValidationOptions, validate_document, validate_document_with, validate_value,
    validate_value_with,
};
pub use features::{
    validate_feature_group, validate_feature_group_value, validate_feature_item,
    validate_feature_item_value,
};
pub use layers::{
    validate_layer_config, validate_layer_config_value, validate_layer_entry,
    validate_layer_entry_value,
};
pub use report::ValidationReport;

use serde::Serialize;

/// Serialize a typed entity for the raw validators, or report why it could not be
pub(crate) fn to_entity_value<T: Serialize>(
    entity: &T,
    kind: &str,
) -> Result<serde_json::Value, ValidationReport> {
    serde_json::to_value(entity).map_err(|e| {
        ValidationReport::from_error(format!("Failed to serialize {}: {}", kind, e))
    })
}
