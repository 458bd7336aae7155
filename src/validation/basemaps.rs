//! Basemap validation

use super::fields::{non_empty_array, object, optional_string, required_string};
use super::layers::{LayerRules, check_layer_config};
use super::report::ValidationReport;
use super::to_entity_value;
use crate::models::{BasemapEntity, Country, UnitType};
use serde_json::Value;
use std::collections::HashSet;

/// Check the `baseMaps` list of a document, including duplicate ids across it
pub(crate) fn check_basemap_list(report: &mut ValidationReport, value: &Value) {
    let Some(basemaps) = value.as_array() else {
        report.error("'baseMaps' must be an array");
        return;
    };

    let mut seen_ids = HashSet::new();
    for (index, basemap) in basemaps.iter().enumerate() {
        let prefix = format!("Basemap {}", index + 1);
        check_basemap(report, &prefix, basemap, LayerRules::BASEMAP);

        if let Some(id) = basemap.get("id").and_then(Value::as_str)
            && !id.trim().is_empty()
            && !seen_ids.insert(id)
        {
            report.error(format!("{}: duplicate id '{}'", prefix, id));
        }
    }
}

/// Check a single basemap entity
pub(crate) fn check_basemap(
    report: &mut ValidationReport,
    prefix: &str,
    value: &Value,
    rules: LayerRules,
) {
    let Some(obj) = object(report, prefix, value) else {
        return;
    };

    required_string(report, prefix, obj, "id");
    required_string(report, prefix, obj, "name");

    if let Some(base_layers) = non_empty_array(report, prefix, obj, "baseLayers") {
        for (index, layer) in base_layers.iter().enumerate() {
            let layer_prefix = format!("{}, base layer {}", prefix, index + 1);
            check_layer_config(report, &layer_prefix, layer, rules);
        }
    }

    match obj.get("referenceLayers") {
        None | Some(Value::Null) => {}
        Some(Value::Array(reference_layers)) => {
            for (index, layer) in reference_layers.iter().enumerate() {
                let layer_prefix = format!("{}, reference layer {}", prefix, index + 1);
                check_layer_config(report, &layer_prefix, layer, rules);
            }
        }
        Some(_) => report.error(format!("{}: 'referenceLayers' must be an array", prefix)),
    }

    let url = optional_string(report, prefix, obj, "thumbnailUrl").filter(|u| !u.is_empty());
    let data = optional_string(report, prefix, obj, "thumbnailData").filter(|d| !d.is_empty());
    if url.is_some() && data.is_some() {
        report.error(format!(
            "{}: thumbnail must be either inline data or a URL, not both",
            prefix
        ));
    }

    // Membership checks are advisory
    match obj.get("countries") {
        None | Some(Value::Null) => {}
        Some(Value::Array(countries)) => {
            for country in countries {
                let known = country.as_str().and_then(Country::from_code).is_some();
                if !known {
                    report.warning(format!("{}: unknown country {}", prefix, country));
                }
            }
        }
        Some(_) => report.warning(format!("{}: 'countries' should be an array", prefix)),
    }

    match obj.get("unitType") {
        None | Some(Value::Null) => {}
        Some(unit) => {
            let known = unit.as_str().and_then(UnitType::from_value).is_some();
            if !known {
                report.warning(format!("{}: unknown unit type {}", prefix, unit));
            }
        }
    }
}

/// Validate a basemap before it is committed.
///
/// Sub-layers get the full layer rules here, not only the type and source checks of the
/// whole-document pass.
pub fn validate_basemap(basemap: &BasemapEntity) -> ValidationReport {
    match to_entity_value(basemap, "basemap") {
        Ok(value) => validate_basemap_value(&value),
        Err(report) => report,
    }
}

/// Validate a basemap in its raw JSON form (used for drafts)
pub fn validate_basemap_value(value: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_basemap(&mut report, "Basemap", value, LayerRules::ENTITY);
    report
}
