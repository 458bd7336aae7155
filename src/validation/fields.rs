//! Field-level checks over raw JSON values
//!
//! Every check pushes messages of the form `"{prefix}: {field} {reason}"` into a report.

use super::report::ValidationReport;
use serde_json::{Map, Value};

/// Require `field` to be present, a string, and non-blank after trimming.
///
/// Each failure mode has its own message. Returns the value when all three hold.
pub(crate) fn required_string<'a>(
    report: &mut ValidationReport,
    prefix: &str,
    obj: &'a Map<String, Value>,
    field: &str,
) -> Option<&'a str> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            report.error(format!("{}: '{}' is required", prefix, field));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            report.error(format!("{}: '{}' must not be blank", prefix, field));
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            report.error(format!("{}: '{}' must be a string", prefix, field));
            None
        }
    }
}

/// Require `field` to be a non-blank string, with a single message for every failure mode
pub(crate) fn non_blank_string<'a>(
    report: &mut ValidationReport,
    prefix: &str,
    obj: &'a Map<String, Value>,
    field: &str,
) -> Option<&'a str> {
    match obj.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Some(s),
        _ => {
            report.error(format!("{}: '{}' must be a non-blank string", prefix, field));
            None
        }
    }
}

/// If `field` is present (and not null) it must be a string
pub(crate) fn optional_string<'a>(
    report: &mut ValidationReport,
    prefix: &str,
    obj: &'a Map<String, Value>,
    field: &str,
) -> Option<&'a str> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            report.error(format!("{}: '{}' must be a string", prefix, field));
            None
        }
    }
}

/// If `field` is present (and not null) it must be a boolean
pub(crate) fn optional_bool(
    report: &mut ValidationReport,
    prefix: &str,
    obj: &Map<String, Value>,
    field: &str,
) {
    if let Some(value) = obj.get(field)
        && !value.is_null()
        && !value.is_boolean()
    {
        report.error(format!("{}: '{}' must be a boolean", prefix, field));
    }
}

/// Require `field` to be an array with at least one element
pub(crate) fn non_empty_array<'a>(
    report: &mut ValidationReport,
    prefix: &str,
    obj: &'a Map<String, Value>,
    field: &str,
) -> Option<&'a Vec<Value>> {
    match obj.get(field).and_then(Value::as_array) {
        Some(list) if !list.is_empty() => Some(list),
        _ => {
            report.error(format!("{}: '{}' must be a non-empty array", prefix, field));
            None
        }
    }
}

/// Require `value` to be an object, reporting `"{prefix}: must be an object"` otherwise
pub(crate) fn object<'a>(
    report: &mut ValidationReport,
    prefix: &str,
    value: &'a Value,
) -> Option<&'a Map<String, Value>> {
    let obj = value.as_object();
    if obj.is_none() {
        report.error(format!("{}: must be an object", prefix));
    }
    obj
}
