//! Layer entry and layer configuration validation
//!
//! The whole-document pass only requires a non-blank `type` and `source` on each sub-layer.
//! Basemap sub-layers additionally check `type` and `sourceKind` membership, and a layer being
//! committed from the editor gets the full option rules.

use super::fields::{non_blank_string, non_empty_array, object, optional_string, required_string};
use super::report::ValidationReport;
use super::to_entity_value;
use crate::models::layer::{OPTION_LAYER_ID, OPTION_LAYER_NAMES, OPTION_OPACITY};
use crate::models::{LayerConfig, LayerEntry, LayerType, SourceKind};
use serde_json::Value;

/// Which sub-layer rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LayerRules {
    /// `type` must be one of the known layer types
    pub known_type: bool,
    /// `sourceKind`, when present, must be one of the known kinds
    pub source_kind: bool,
    /// Numeric fields and `options` are checked
    pub options: bool,
}

impl LayerRules {
    /// Whole-document pass over `layers`
    pub const DOCUMENT: LayerRules = LayerRules {
        known_type: false,
        source_kind: false,
        options: false,
    };

    /// Whole-document pass over basemap layers
    pub const BASEMAP: LayerRules = LayerRules {
        known_type: true,
        source_kind: true,
        options: false,
    };

    /// A single entity about to be committed
    pub const ENTITY: LayerRules = LayerRules {
        known_type: true,
        source_kind: true,
        options: true,
    };
}

/// Check one sub-layer configuration
pub(crate) fn check_layer_config(
    report: &mut ValidationReport,
    prefix: &str,
    value: &Value,
    rules: LayerRules,
) {
    let Some(obj) = object(report, prefix, value) else {
        return;
    };

    let layer_type = non_blank_string(report, prefix, obj, "type").map(|t| {
        // Infallible: unknown values become LayerType::Other
        t.parse::<LayerType>().unwrap_or_default()
    });
    if rules.known_type
        && let Some(LayerType::Other(unknown)) = &layer_type
    {
        report.error(format!("{}: unknown layer type '{}'", prefix, unknown));
    }

    non_blank_string(report, prefix, obj, "source");

    if rules.source_kind {
        match obj.get("sourceKind") {
            None | Some(Value::Null) => {}
            Some(kind)
                if kind
                    .as_str()
                    .is_some_and(|k| SourceKind::VALUES.contains(&k)) => {}
            Some(_) => report.error(format!(
                "{}: 'sourceKind' must be \"{}\" or \"{}\"",
                prefix,
                SourceKind::VALUES[0],
                SourceKind::VALUES[1]
            )),
        }
    }

    if !rules.options {
        return;
    }

    if let Some(interval) = obj.get("refreshInterval")
        && !interval.is_null()
        && !interval.is_u64()
    {
        report.error(format!(
            "{}: 'refreshInterval' must be a non-negative integer",
            prefix
        ));
    }
    if let Some(z_index) = obj.get("zIndex")
        && !z_index.is_null()
        && !z_index.is_i64()
        && !z_index.is_u64()
    {
        report.error(format!("{}: 'zIndex' must be an integer", prefix));
    }

    check_layer_options(report, prefix, obj.get("options"), layer_type.as_ref());
}

fn check_layer_options(
    report: &mut ValidationReport,
    prefix: &str,
    options: Option<&Value>,
    layer_type: Option<&LayerType>,
) {
    let empty = serde_json::Map::new();
    let options = match options {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(options)) => options,
        Some(_) => {
            report.error(format!("{}: 'options' must be an object", prefix));
            return;
        }
    };

    if let Some(opacity) = options.get(OPTION_OPACITY) {
        let in_range = opacity.as_f64().is_some_and(|o| (0.0..=1.0).contains(&o));
        if !in_range {
            report.error(format!(
                "{}: 'options.opacity' must be a number between 0 and 1",
                prefix
            ));
        }
    }

    let layer_names = options.get(OPTION_LAYER_NAMES);
    let names_are_strings = layer_names
        .and_then(Value::as_array)
        .is_some_and(|names| names.iter().all(|n| n.as_str().is_some_and(|s| !s.trim().is_empty())));
    if layer_type == Some(&LayerType::Wms) {
        let has_names = names_are_strings
            && layer_names
                .and_then(Value::as_array)
                .is_some_and(|names| !names.is_empty());
        if !has_names {
            report.error(format!(
                "{}: 'options.layerNames' is required for wms layers",
                prefix
            ));
        }
    } else if layer_names.is_some() && !names_are_strings {
        report.error(format!(
            "{}: 'options.layerNames' must be an array of strings",
            prefix
        ));
    }

    let layer_id = options.get(OPTION_LAYER_ID);
    let layer_id_ok = match layer_id {
        Some(Value::String(id)) => !id.trim().is_empty(),
        Some(Value::Number(_)) | Some(Value::Bool(_)) => true,
        _ => false,
    };
    if layer_type == Some(&LayerType::PortalItem) && !layer_id_ok {
        report.error(format!(
            "{}: 'options.layerId' is required for portalItem layers",
            prefix
        ));
    } else if layer_id.is_some() && !layer_id_ok {
        report.error(format!(
            "{}: 'options.layerId' must be a non-blank string or a number",
            prefix
        ));
    }

    for (key, value) in options {
        if matches!(key.as_str(), OPTION_OPACITY | OPTION_LAYER_NAMES | OPTION_LAYER_ID) {
            continue;
        }
        if !(value.is_string() || value.is_number() || value.is_boolean()) {
            report.error(format!(
                "{}: option '{}' must be a string, number or boolean",
                prefix, key
            ));
        }
    }
}

/// Check one layer entry and its sub-layers
pub(crate) fn check_layer_entry(
    report: &mut ValidationReport,
    prefix: &str,
    value: &Value,
    rules: LayerRules,
) {
    let Some(obj) = object(report, prefix, value) else {
        return;
    };

    required_string(report, prefix, obj, "id");

    if rules.options {
        optional_string(report, prefix, obj, "category");
        optional_string(report, prefix, obj, "copyright");
        if let Some(country) = obj.get("country")
            && !country.is_null()
            && !country
                .as_array()
                .is_some_and(|codes| codes.iter().all(Value::is_string))
        {
            report.error(format!("{}: 'country' must be an array of strings", prefix));
        }
    }

    if let Some(layers) = non_empty_array(report, prefix, obj, "layers") {
        for (index, layer) in layers.iter().enumerate() {
            let layer_prefix = format!("{}, sub-layer {}", prefix, index + 1);
            check_layer_config(report, &layer_prefix, layer, rules);
        }
    }
}

/// Validate a layer entry before it is committed.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::models::{LayerConfig, LayerEntry};
/// use map_config_sdk::validation::validate_layer_entry;
///
/// let entry = LayerEntry::new("radar", vec![LayerConfig::wms("https://maps.example.org/wms", &["radar"])]);
/// assert!(validate_layer_entry(&entry).valid);
///
/// let empty = LayerEntry::new("radar", vec![]);
/// assert_eq!(
///     validate_layer_entry(&empty).errors,
///     vec!["Layer: 'layers' must be a non-empty array"]
/// );
/// ```
pub fn validate_layer_entry(entry: &LayerEntry) -> ValidationReport {
    match to_entity_value(entry, "layer") {
        Ok(value) => validate_layer_entry_value(&value),
        Err(report) => report,
    }
}

/// Validate a layer entry in its raw JSON form (used for drafts)
pub fn validate_layer_entry_value(value: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_layer_entry(&mut report, "Layer", value, LayerRules::ENTITY);
    report
}

/// Validate a single sub-layer configuration with the full option rules
pub fn validate_layer_config(config: &LayerConfig) -> ValidationReport {
    match to_entity_value(config, "layer config") {
        Ok(value) => validate_layer_config_value(&value),
        Err(report) => report,
    }
}

/// Validate a sub-layer configuration in its raw JSON form
pub fn validate_layer_config_value(value: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_layer_config(&mut report, "Layer config", value, LayerRules::ENTITY);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_rules_only_check_type_and_source() {
        let mut report = ValidationReport::new();
        check_layer_entry(
            &mut report,
            "Layer 1",
            &json!({"id": "radar", "layers": [{"type": "heatmap", "source": " "}, {"source": "x"}]}),
            LayerRules::DOCUMENT,
        );
        assert_eq!(
            report.errors,
            vec![
                "Layer 1, sub-layer 1: 'source' must be a non-blank string",
                "Layer 1, sub-layer 2: 'type' must be a non-blank string",
            ]
        );
    }

    #[test]
    fn test_wms_requires_layer_names() {
        let layer = LayerConfig::new(LayerType::Wms, "https://maps.example.org/wms");
        assert_eq!(
            validate_layer_config(&layer).errors,
            vec!["Layer config: 'options.layerNames' is required for wms layers"]
        );
    }

    #[test]
    fn test_portal_item_requires_layer_id() {
        let mut layer = LayerConfig::new(LayerType::PortalItem, "a1b2c3");
        assert_eq!(
            validate_layer_config(&layer).errors,
            vec!["Layer config: 'options.layerId' is required for portalItem layers"]
        );
        layer.options.set_from_input("layerId", "3").unwrap();
        assert!(validate_layer_config(&layer).valid);
    }

    #[test]
    fn test_entity_option_rules() {
        let report = validate_layer_config_value(&json!({
            "type": "radar",
            "source": "https://maps.example.org",
            "sourceKind": "ftp",
            "refreshInterval": -1,
            "zIndex": 1.5,
            "options": {"opacity": 1.5, "layerNames": "radar", "style": {"fill": "red"}}
        }));
        assert_eq!(
            report.errors,
            vec![
                "Layer config: unknown layer type 'radar'",
                "Layer config: 'sourceKind' must be \"uri\" or \"portalItem\"",
                "Layer config: 'refreshInterval' must be a non-negative integer",
                "Layer config: 'zIndex' must be an integer",
                "Layer config: 'options.opacity' must be a number between 0 and 1",
                "Layer config: 'options.layerNames' must be an array of strings",
                "Layer config: option 'style' must be a string, number or boolean",
            ]
        );
    }

    #[test]
    fn test_valid_tiled_layer() {
        let report = validate_layer_config_value(&json!({
            "type": "tiled",
            "source": "https://tiles.example.org",
            "refreshInterval": 60000,
            "options": {"opacity": 0.8, "transparent": true}
        }));
        assert!(report.valid, "{:?}", report.errors);
    }
}
