//! Layer entry and layer configuration models
//!
//! A `LayerEntry` is a reusable, identifiable bundle of one or more `LayerConfig`
//! sub-layers. Feature items reference entries by id.
//!
//! `LayerConfig.options` is modelled as a closed set of known fields (`opacity`,
//! `layerNames`, `layerId`) plus an `extra` map of scalar values. Values typed by hand in an
//! editor are converted with [`OptionValue::coerce`].

use super::enums::{LayerType, SourceKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved option key for layer opacity (0.0 - 1.0)
pub const OPTION_OPACITY: &str = "opacity";
/// Reserved option key for WMS layer names
pub const OPTION_LAYER_NAMES: &str = "layerNames";
/// Reserved option key for the sub-layer id of a portal item
pub const OPTION_LAYER_ID: &str = "layerId";

/// Scalar value of a user-defined layer option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl OptionValue {
    /// Convert raw editor input into a typed value.
    ///
    /// - `"true"` / `"false"` become booleans
    /// - text that parses as a finite number (after trimming) becomes a number
    /// - anything else is kept as text, untrimmed
    ///
    /// # Example
    ///
    /// ```rust
    /// use map_config_sdk::models::layer::OptionValue;
    ///
    /// assert_eq!(OptionValue::coerce("true"), OptionValue::Bool(true));
    /// assert_eq!(OptionValue::coerce(" 42 "), OptionValue::Number(42.into()));
    /// assert_eq!(OptionValue::coerce("EPSG:3857"), OptionValue::Text("EPSG:3857".to_string()));
    /// ```
    pub fn coerce(raw: &str) -> OptionValue {
        match raw {
            "true" => return OptionValue::Bool(true),
            "false" => return OptionValue::Bool(false),
            _ => {}
        }

        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(int) = trimmed.parse::<i64>() {
                return OptionValue::Number(int.into());
            }
            if let Ok(float) = trimmed.parse::<f64>()
                && let Some(number) = serde_json::Number::from_f64(float)
            {
                // from_f64 rejects NaN and infinities
                return OptionValue::Number(number);
            }
        }

        OptionValue::Text(raw.to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Options of a sub-layer: known typed fields plus user-defined extras
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Required and non-empty for `wms` layers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_names: Option<Vec<String>>,
    /// Required for `portalItem` layers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_id: Option<OptionValue>,
    /// User-defined options
    #[serde(flatten)]
    pub extra: BTreeMap<String, OptionValue>,
}

impl LayerOptions {
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none()
            && self.layer_names.is_none()
            && self.layer_id.is_none()
            && self.extra.is_empty()
    }

    /// Set an option from raw editor input.
    ///
    /// Reserved keys are routed to their typed fields: `opacity` must parse as a number,
    /// `layerNames` is split on commas (blank entries dropped) and `layerId` is coerced like any
    /// other value. Other keys go to `extra` through [`OptionValue::coerce`].
    pub fn set_from_input(&mut self, key: &str, raw: &str) -> Result<(), String> {
        match key {
            OPTION_OPACITY => {
                let opacity = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| format!("opacity must be a number, got '{}'", raw))?;
                self.opacity = Some(opacity);
            }
            OPTION_LAYER_NAMES => {
                let names: Vec<String> = raw
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect();
                self.layer_names = Some(names);
            }
            OPTION_LAYER_ID => {
                self.layer_id = Some(OptionValue::coerce(raw.trim()));
            }
            _ => {
                if key.trim().is_empty() {
                    return Err("option key cannot be empty".to_string());
                }
                self.extra
                    .insert(key.to_string(), OptionValue::coerce(raw));
            }
        }
        Ok(())
    }

    /// Remove an option, reserved or user-defined. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match key {
            OPTION_OPACITY => self.opacity.take().is_some(),
            OPTION_LAYER_NAMES => self.layer_names.take().is_some(),
            OPTION_LAYER_ID => self.layer_id.take().is_some(),
            _ => self.extra.remove(key).is_some(),
        }
    }
}

/// One concrete map layer source
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    #[serde(rename = "type", default)]
    pub layer_type: LayerType,
    /// Service URL or portal item id
    #[serde(default)]
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_kind: Option<SourceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    /// Refresh interval in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "LayerOptions::is_empty")]
    pub options: LayerOptions,
}

impl LayerConfig {
    /// Create a sub-layer of the given type reading from `source`
    pub fn new(layer_type: LayerType, source: impl Into<String>) -> Self {
        Self {
            layer_type,
            source: source.into(),
            ..Default::default()
        }
    }

    /// Create a WMS sub-layer with its layer names
    ///
    /// # Example
    ///
    /// ```rust
    /// use map_config_sdk::models::LayerConfig;
    ///
    /// let layer = LayerConfig::wms("https://maps.example.org/wms", &["radar"]);
    /// assert_eq!(layer.options.layer_names.as_deref(), Some(&["radar".to_string()][..]));
    /// ```
    pub fn wms(source: impl Into<String>, layer_names: &[&str]) -> Self {
        let mut layer = Self::new(LayerType::Wms, source);
        layer.options.layer_names = Some(layer_names.iter().map(|n| n.to_string()).collect());
        layer
    }
}

/// Named, reusable layer definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayerEntry {
    /// Unique document-wide; referenced by `FeatureItem.layersIds`
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country: Vec<String>,
}

impl LayerEntry {
    pub fn new(id: impl Into<String>, layers: Vec<LayerConfig>) -> Self {
        Self {
            id: id.into(),
            layers,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_rules() {
        assert_eq!(OptionValue::coerce("false"), OptionValue::Bool(false));
        assert_eq!(
            OptionValue::coerce("0.25"),
            OptionValue::Number(serde_json::Number::from_f64(0.25).unwrap())
        );
        assert_eq!(OptionValue::coerce("-3"), OptionValue::Number((-3).into()));
        // Not numeric-looking
        assert_eq!(OptionValue::coerce(""), OptionValue::Text(String::new()));
        assert_eq!(OptionValue::coerce("   "), OptionValue::Text("   ".to_string()));
        assert_eq!(OptionValue::coerce("NaN"), OptionValue::Text("NaN".to_string()));
        assert_eq!(OptionValue::coerce("inf"), OptionValue::Text("inf".to_string()));
        assert_eq!(OptionValue::coerce("True"), OptionValue::Text("True".to_string()));
    }

    #[test]
    fn test_set_from_input_routes_reserved_keys() {
        let mut options = LayerOptions::default();
        options.set_from_input("opacity", "0.7").unwrap();
        options.set_from_input("layerNames", "radar, , lightning").unwrap();
        options.set_from_input("transparent", "true").unwrap();
        options.set_from_input("format", "image/png").unwrap();

        assert_eq!(options.opacity, Some(0.7));
        assert_eq!(
            options.layer_names,
            Some(vec!["radar".to_string(), "lightning".to_string()])
        );
        assert_eq!(options.extra["transparent"], OptionValue::Bool(true));
        assert_eq!(
            options.extra["format"],
            OptionValue::Text("image/png".to_string())
        );

        assert!(options.set_from_input("opacity", "half").is_err());
        assert!(options.set_from_input(" ", "x").is_err());

        assert!(options.remove("transparent"));
        assert!(!options.remove("transparent"));
        assert!(options.remove("opacity"));
    }

    #[test]
    fn test_options_flatten_extras() {
        let value = json!({
            "type": "wms",
            "source": "https://maps.example.org/wms",
            "options": {"opacity": 0.5, "layerNames": ["radar"], "transparent": true, "version": "1.3.0"}
        });
        let layer: LayerConfig = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(layer.layer_type, LayerType::Wms);
        assert_eq!(layer.options.opacity, Some(0.5));
        assert_eq!(layer.options.extra.len(), 2);
        assert_eq!(serde_json::to_value(&layer).unwrap(), value);
    }

    #[test]
    fn test_empty_options_are_omitted() {
        let layer = LayerConfig::new(LayerType::Tiled, "https://tiles.example.org");
        let value = serde_json::to_value(&layer).unwrap();
        assert_eq!(
            value,
            json!({"type": "tiled", "source": "https://tiles.example.org"})
        );
    }
}
