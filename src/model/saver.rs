//! Document saving functionality
//!
//! Serializes a typed [`Document`]. Going through the typed model means the output always
//! carries the three collections and all four `intl` languages, and never writes `null` for
//! an unset optional field.

use crate::models::Document;
use tracing::info;

/// Error type for saving documents
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Serializes configuration documents to text
pub struct DocumentSaver;

impl DocumentSaver {
    /// Serialize to JSON, pretty-printed when `pretty` is set
    pub fn to_json_string(doc: &Document, pretty: bool) -> Result<String, SaveError> {
        let text = if pretty {
            serde_json::to_string_pretty(doc)
        } else {
            serde_json::to_string(doc)
        }
        .map_err(|e| SaveError::Serialization(e.to_string()))?;

        info!(
            "Saved document as JSON ({} bytes, {} layers)",
            text.len(),
            doc.layers.len()
        );
        Ok(text)
    }

    /// Serialize to YAML
    pub fn to_yaml_string(doc: &Document) -> Result<String, SaveError> {
        let text =
            serde_yaml::to_string(doc).map_err(|e| SaveError::Serialization(e.to_string()))?;
        info!("Saved document as YAML ({} bytes)", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentLoader;
    use crate::models::{FeatureGroup, FeatureItem};

    #[test]
    fn test_saved_json_shape() {
        let mut doc = Document::new();
        let mut group = FeatureGroup::new("wind");
        group
            .items
            .push(FeatureItem::new("w60", "60 min", vec!["wind_layer".to_string()]));
        doc.weather_features.push(group);

        let text = DocumentSaver::to_json_string(&doc, false).unwrap();
        assert_eq!(
            text,
            r#"{"weatherFeatures":[{"id":"wind","presentation":"single","items":[{"id":"w60","name":"60 min","layersIds":["wind_layer"]}]}],"features":[],"layers":[],"intl":{"en":{},"da":{},"nb":{},"sv":{}}}"#
        );
    }

    #[test]
    fn test_yaml_reloads() {
        let mut doc = Document::new();
        doc.features.push(FeatureGroup::new("airports"));
        doc.intl.en.insert("airports".to_string(), "Airports".to_string());

        let yaml = DocumentSaver::to_yaml_string(&doc).unwrap();
        let reloaded = DocumentLoader::new().parse(&yaml).unwrap();
        assert_eq!(reloaded, doc);
    }
}
