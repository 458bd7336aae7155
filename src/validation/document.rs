//! Whole-document validation
//!
//! Runs over the raw JSON value so that documents which do not fit the typed model (a list
//! that is an object, a number where a string belongs) are still reported field by field.
//!
//! Order of checks, which is also the order of messages:
//! 1. root shape and the three required lists
//! 2. `intl` and its language dictionaries
//! 3. feature groups and their items, weather features first
//! 4. layer entries
//! 5. referential gaps between items and layers
//! 6. basemaps

use super::basemaps::check_basemap_list;
use super::features::check_feature_group;
use super::layers::{LayerRules, check_layer_entry};
use super::report::ValidationReport;
use crate::models::{Document, FeatureCategory, Language};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashSet};

/// Options for whole-document validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Report referential gaps as errors instead of warnings
    pub strict_layer_references: bool,
}

/// Validate a typed document.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::models::{Document, FeatureGroup, FeatureItem};
/// use map_config_sdk::validation::validate_document;
///
/// let mut doc = Document::new();
/// let mut group = FeatureGroup::new("wind");
/// group.items.push(FeatureItem::new("w60", "60 min", vec!["wind_layer".to_string()]));
/// doc.weather_features.push(group);
///
/// let report = validate_document(&doc);
/// assert!(report.valid);
/// assert_eq!(report.warnings, vec!["Missing layer definitions: wind_layer"]);
/// ```
pub fn validate_document(doc: &Document) -> ValidationReport {
    validate_document_with(doc, ValidationOptions::default())
}

/// Validate a typed document with explicit options
pub fn validate_document_with(doc: &Document, options: ValidationOptions) -> ValidationReport {
    validate_value_with(&doc.to_value(), options)
}

/// Validate a raw document value
pub fn validate_value(value: &Value) -> ValidationReport {
    validate_value_with(value, ValidationOptions::default())
}

/// Validate a raw document value with explicit options
pub fn validate_value_with(value: &Value, options: ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    let Some(root) = value.as_object() else {
        report.error("Configuration must be a JSON object");
        return report;
    };

    for field in ["weatherFeatures", "features", "layers"] {
        if !root.get(field).is_some_and(Value::is_array) {
            report.error(format!("Missing or invalid '{}' array", field));
        }
    }

    check_intl(&mut report, root.get("intl"));

    for category in FeatureCategory::ALL {
        let Some(groups) = root.get(category.field()).and_then(Value::as_array) else {
            continue;
        };
        for (index, group) in groups.iter().enumerate() {
            let prefix = format!("{} {}", category.label(), index + 1);
            check_feature_group(&mut report, &prefix, group);
        }
    }

    if let Some(layers) = root.get("layers").and_then(Value::as_array) {
        let mut seen_ids = HashSet::new();
        for (index, layer) in layers.iter().enumerate() {
            let prefix = format!("Layer {}", index + 1);
            check_layer_entry(&mut report, &prefix, layer, LayerRules::DOCUMENT);

            if let Some(id) = layer.get("id").and_then(Value::as_str)
                && !id.trim().is_empty()
                && !seen_ids.insert(id)
            {
                report.error(format!("{}: duplicate id '{}'", prefix, id));
            }
        }
    }

    let missing = missing_layer_ids_in_value(root);
    if !missing.is_empty() {
        let message = format!(
            "Missing layer definitions: {}",
            missing.into_iter().collect::<Vec<_>>().join(", ")
        );
        if options.strict_layer_references {
            report.error(message);
        } else {
            report.warning(message);
        }
    }

    if let Some(basemaps) = root.get("baseMaps")
        && !basemaps.is_null()
    {
        check_basemap_list(&mut report, basemaps);
    }

    report
}

fn check_intl(report: &mut ValidationReport, intl: Option<&Value>) {
    let Some(intl) = intl.and_then(Value::as_object) else {
        report.error("Missing or invalid 'intl' object");
        return;
    };

    for language in Language::ALL {
        match intl.get(language.code()) {
            None | Some(Value::Null) => report.warning(format!(
                "Missing translations for language '{}'",
                language.code()
            )),
            Some(Value::Object(dictionary)) => {
                for (key, text) in dictionary {
                    if !text.is_string() {
                        report.error(format!(
                            "'intl.{}': value for '{}' must be a string",
                            language.code(),
                            key
                        ));
                    }
                }
            }
            Some(_) => report.error(format!("'intl.{}' must be an object", language.code())),
        }
    }
}

/// Referenced-but-undefined layer ids, read from the raw document
fn missing_layer_ids_in_value(root: &Map<String, Value>) -> BTreeSet<String> {
    let defined: HashSet<&str> = root
        .get("layers")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|layer| layer.get("id").and_then(Value::as_str))
        .collect();

    FeatureCategory::ALL
        .iter()
        .filter_map(|category| root.get(category.field()).and_then(Value::as_array))
        .flatten()
        .filter_map(|group| group.get("items").and_then(Value::as_array))
        .flatten()
        .filter_map(|item| item.get("layersIds").and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_str)
        .filter(|id| !id.trim().is_empty() && !defined.contains(id))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn intl() -> Value {
        json!({"en": {}, "da": {}, "nb": {}, "sv": {}})
    }

    #[test]
    fn test_root_must_be_object() {
        let report = validate_value(&json!([1, 2]));
        assert_eq!(report.errors, vec!["Configuration must be a JSON object"]);
        assert!(!report.valid);
    }

    #[test]
    fn test_missing_lists_and_languages() {
        let report = validate_value(&json!({
            "features": {},
            "intl": {"en": {}, "da": [], "sv": {"wind": 4}}
        }));
        assert_eq!(
            report.errors,
            vec![
                "Missing or invalid 'weatherFeatures' array",
                "Missing or invalid 'features' array",
                "Missing or invalid 'layers' array",
                "'intl.da' must be an object",
                "'intl.sv': value for 'wind' must be a string",
            ]
        );
        assert_eq!(report.warnings, vec!["Missing translations for language 'nb'"]);
    }

    #[test]
    fn test_duplicate_layer_ids() {
        let report = validate_value(&json!({
            "weatherFeatures": [],
            "features": [],
            "layers": [
                {"id": "radar", "layers": [{"type": "wms", "source": "a"}]},
                {"id": "radar", "layers": [{"type": "wms", "source": "b"}]}
            ],
            "intl": intl()
        }));
        assert_eq!(report.errors, vec!["Layer 2: duplicate id 'radar'"]);
    }

    #[test]
    fn test_strict_references_promote_gap_to_error() {
        let value = json!({
            "weatherFeatures": [{
                "id": "wind",
                "presentation": "single",
                "items": [{"id": "w60", "name": "60 min", "layersIds": ["ghost", "wind_layer", "ghost"]}]
            }],
            "features": [],
            "layers": [],
            "intl": intl()
        });

        let lenient = validate_value(&value);
        assert!(lenient.valid);
        assert_eq!(
            lenient.warnings,
            vec!["Missing layer definitions: ghost, wind_layer"]
        );

        let strict = validate_value_with(
            &value,
            ValidationOptions {
                strict_layer_references: true,
            },
        );
        assert!(!strict.valid);
        assert_eq!(
            strict.errors,
            vec!["Missing layer definitions: ghost, wind_layer"]
        );
    }

    #[test]
    fn test_messages_are_numbered_per_collection() {
        let report = validate_value(&json!({
            "weatherFeatures": [{"presentation": "single", "items": []}],
            "features": [
                {"presentation": "multiple", "items": [{"id": "a", "name": "A", "layersIds": ["l"]}]},
                {"items": [{"id": "b", "name": "", "layersIds": ["l"]}]}
            ],
            "layers": [{"id": "l", "layers": [{"type": "wms", "source": "s"}]}],
            "intl": intl()
        }));
        assert_eq!(
            report.errors,
            vec![
                "Weather feature 1: 'items' must contain at least one item",
                "Feature 2: 'presentation' must be \"single\" or \"multiple\"",
                "Feature 2, item 1: 'name' must not be blank",
            ]
        );
    }
}
