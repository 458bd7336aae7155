//! Document loading functionality
//!
//! Parses configuration text into a raw value or a typed [`Document`]. Text starting with
//! `{` or `[` is read as JSON; anything else is read as YAML (a JSON superset), so hand
//! written YAML configurations load too.

use crate::models::Document;
use crate::validation::{ValidationOptions, ValidationReport, validate_value_with};
use serde_json::Value;
use tracing::{info, warn};

/// Error type for loading documents
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The text is not valid JSON or YAML
    #[error("Invalid JSON: {0}")]
    Parse(String),

    /// The text parsed but does not fit the document model
    #[error("Invalid document: {0}")]
    Shape(String),
}

/// A typed document together with the validation of its raw form
#[derive(Debug, Clone)]
pub struct DocumentLoadResult {
    pub document: Document,
    pub report: ValidationReport,
}

/// Loads configuration documents from text
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLoader {
    options: ValidationOptions,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader whose validation uses the given options
    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Parse text into a raw JSON value
    pub fn parse_value(&self, text: &str) -> Result<Value, LoadError> {
        let trimmed = text.trim_start();
        let result = if trimmed.starts_with('{') || trimmed.starts_with('[') {
            serde_json::from_str::<Value>(text).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<Value>(text).map_err(|e| e.to_string())
        };

        result.map_err(|e| {
            warn!("Failed to parse configuration: {}", e);
            LoadError::Parse(e)
        })
    }

    /// Parse text into a typed document
    ///
    /// # Example
    ///
    /// ```rust
    /// use map_config_sdk::model::DocumentLoader;
    ///
    /// let doc = DocumentLoader::new()
    ///     .parse(r#"{"weatherFeatures": [{"id": "wind", "presentation": "single", "items": []}]}"#)
    ///     .unwrap();
    /// assert_eq!(doc.weather_features.len(), 1);
    /// assert!(doc.layers.is_empty());
    /// ```
    pub fn parse(&self, text: &str) -> Result<Document, LoadError> {
        let value = self.parse_value(text)?;
        let document = Self::from_value(value)?;
        info!(
            "Loaded document: {} weather features, {} features, {} layers, {} basemaps",
            document.weather_features.len(),
            document.features.len(),
            document.layers.len(),
            document.base_maps().len()
        );
        Ok(document)
    }

    /// Convert a raw value into a typed document
    pub fn from_value(value: Value) -> Result<Document, LoadError> {
        serde_json::from_value(value).map_err(|e| LoadError::Shape(e.to_string()))
    }

    /// Parse and validate text.
    ///
    /// A parse failure is reported as a single error and no structural checks run.
    pub fn validate_text(&self, text: &str) -> ValidationReport {
        match self.parse_value(text) {
            Ok(value) => validate_value_with(&value, self.options),
            Err(e) => ValidationReport::from_error(e.to_string()),
        }
    }

    /// Parse text into a typed document and validate its raw form.
    ///
    /// Validation runs before the typed conversion, so the report describes the text as
    /// written even when the conversion then fails.
    pub fn load(&self, text: &str) -> Result<DocumentLoadResult, LoadError> {
        let value = self.parse_value(text)?;
        let report = validate_value_with(&value, self.options);
        let document = Self::from_value(value)?;
        info!(
            "Loaded document with {} errors and {} warnings",
            report.errors.len(),
            report.warnings.len()
        );
        Ok(DocumentLoadResult { document, report })
    }
}
