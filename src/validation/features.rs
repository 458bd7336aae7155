//! Feature group and feature item validation

use super::fields::{object, optional_bool, optional_string, required_string};
use super::report::ValidationReport;
use super::to_entity_value;
use crate::models::{FeatureGroup, FeatureItem, Presentation};
use serde_json::Value;
use std::collections::HashSet;

/// Check one feature group and all of its items.
///
/// `prefix` names the group in messages, e.g. `"Weather feature 2"`.
pub(crate) fn check_feature_group(report: &mut ValidationReport, prefix: &str, value: &Value) {
    let Some(obj) = object(report, prefix, value) else {
        return;
    };

    optional_string(report, prefix, obj, "id");
    optional_string(report, prefix, obj, "name");

    let presentation_ok = obj
        .get("presentation")
        .and_then(Value::as_str)
        .is_some_and(|p| p.parse::<Presentation>().is_ok());
    if !presentation_ok {
        report.error(format!(
            "{}: 'presentation' must be \"{}\" or \"{}\"",
            prefix,
            Presentation::VALUES[0],
            Presentation::VALUES[1]
        ));
    }

    optional_bool(report, prefix, obj, "mutuallyExclusive");

    let items = match obj.get("items") {
        Some(Value::Array(items)) => items,
        _ => {
            report.error(format!("{}: missing or invalid 'items' array", prefix));
            return;
        }
    };
    if items.is_empty() {
        report.error(format!("{}: 'items' must contain at least one item", prefix));
        return;
    }

    let mut seen_ids = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        let item_prefix = format!("{}, item {}", prefix, index + 1);
        check_feature_item(report, &item_prefix, item);

        if let Some(id) = item.get("id").and_then(Value::as_str)
            && !id.trim().is_empty()
            && !seen_ids.insert(id)
        {
            report.error(format!("{}: duplicate id '{}'", item_prefix, id));
        }
    }
}

/// Check one feature item
pub(crate) fn check_feature_item(report: &mut ValidationReport, prefix: &str, value: &Value) {
    let Some(obj) = object(report, prefix, value) else {
        return;
    };

    required_string(report, prefix, obj, "id");
    required_string(report, prefix, obj, "name");
    optional_bool(report, prefix, obj, "showLegend");
    optional_string(report, prefix, obj, "legendUrl");
    optional_string(report, prefix, obj, "legendDescription");

    match obj.get("layersIds") {
        Some(Value::Array(ids)) if ids.is_empty() => {
            report.error(format!(
                "{}: 'layersIds' must contain at least one layer id",
                prefix
            ));
        }
        Some(Value::Array(ids)) => {
            for (index, id) in ids.iter().enumerate() {
                let blank = id.as_str().is_none_or(|s| s.trim().is_empty());
                if blank {
                    report.error(format!(
                        "{}: 'layersIds' entry {} must be a non-blank string",
                        prefix,
                        index + 1
                    ));
                }
            }
        }
        _ => report.error(format!("{}: 'layersIds' must be an array", prefix)),
    }
}

/// Validate a feature group before it is committed.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::models::{FeatureGroup, FeatureItem};
/// use map_config_sdk::validation::validate_feature_group;
///
/// let mut group = FeatureGroup::new("wind");
/// group.items.push(FeatureItem::new("w60", "60 min", vec!["wind_layer".to_string()]));
/// assert!(validate_feature_group(&group).valid);
///
/// group.items.clear();
/// let report = validate_feature_group(&group);
/// assert_eq!(report.errors, vec!["Feature group: 'items' must contain at least one item"]);
/// ```
pub fn validate_feature_group(group: &FeatureGroup) -> ValidationReport {
    match to_entity_value(group, "feature group") {
        Ok(value) => validate_feature_group_value(&value),
        Err(report) => report,
    }
}

/// Validate a feature group in its raw JSON form (used for drafts)
pub fn validate_feature_group_value(value: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_feature_group(&mut report, "Feature group", value);
    report
}

/// Validate a single feature item
pub fn validate_feature_item(item: &FeatureItem) -> ValidationReport {
    match to_entity_value(item, "feature item") {
        Ok(value) => validate_feature_item_value(&value),
        Err(report) => report,
    }
}

/// Validate a feature item in its raw JSON form
pub fn validate_feature_item_value(value: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_feature_item(&mut report, "Item", value);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_field_errors() {
        let item = FeatureItem::new("", "X", vec![]);
        let report = validate_feature_item(&item);
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![
                "Item: 'id' must not be blank",
                "Item: 'layersIds' must contain at least one layer id",
            ]
        );
    }

    #[test]
    fn test_raw_item_type_errors() {
        let report = validate_feature_item_value(&json!({
            "id": 7,
            "layersIds": ["ok", " ", 3],
            "showLegend": "yes"
        }));
        assert_eq!(
            report.errors,
            vec![
                "Item: 'id' must be a string",
                "Item: 'name' is required",
                "Item: 'showLegend' must be a boolean",
                "Item: 'layersIds' entry 2 must be a non-blank string",
                "Item: 'layersIds' entry 3 must be a non-blank string",
            ]
        );
    }

    #[test]
    fn test_group_presentation_and_items() {
        let report = validate_feature_group_value(&json!({"presentation": "grid"}));
        assert_eq!(
            report.errors,
            vec![
                "Feature group: 'presentation' must be \"single\" or \"multiple\"",
                "Feature group: missing or invalid 'items' array",
            ]
        );
    }

    #[test]
    fn test_duplicate_item_ids() {
        let report = validate_feature_group_value(&json!({
            "id": "wind",
            "presentation": "multiple",
            "items": [
                {"id": "w60", "name": "60 min", "layersIds": ["a"]},
                {"id": "w60", "name": "Again", "layersIds": ["b"]}
            ]
        }));
        assert_eq!(
            report.errors,
            vec!["Feature group, item 2: duplicate id 'w60'"]
        );
    }

    #[test]
    fn test_non_object_group() {
        let mut report = ValidationReport::new();
        check_feature_group(&mut report, "Feature 3", &json!("wind"));
        assert_eq!(report.errors, vec!["Feature 3: must be an object"]);
    }
}
