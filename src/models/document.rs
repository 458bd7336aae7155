//! Document model: the unit of load and save

use super::basemap::BasemapEntity;
use super::enums::FeatureCategory;
use super::feature::FeatureGroup;
use super::intl::Translations;
use super::layer::LayerEntry;
use serde::{Deserialize, Serialize};

/// A complete map configuration document
///
/// Holds the two parallel feature collections, the layer definitions they reference, optional
/// basemaps and the per-language translation dictionaries.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::models::{Document, FeatureCategory, FeatureGroup};
///
/// let mut doc = Document::new();
/// doc.features_mut(FeatureCategory::Weather).push(FeatureGroup::new("wind"));
/// assert_eq!(doc.features(FeatureCategory::Weather).len(), 1);
/// assert!(doc.features(FeatureCategory::General).is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub weather_features: Vec<FeatureGroup>,
    #[serde(default)]
    pub features: Vec<FeatureGroup>,
    #[serde(default)]
    pub layers: Vec<LayerEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_maps: Option<Vec<BasemapEntity>>,
    #[serde(default)]
    pub intl: Translations,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feature groups of one category
    pub fn features(&self, category: FeatureCategory) -> &[FeatureGroup] {
        match category {
            FeatureCategory::Weather => &self.weather_features,
            FeatureCategory::General => &self.features,
        }
    }

    pub fn features_mut(&mut self, category: FeatureCategory) -> &mut Vec<FeatureGroup> {
        match category {
            FeatureCategory::Weather => &mut self.weather_features,
            FeatureCategory::General => &mut self.features,
        }
    }

    /// Both feature collections with their category, weather first
    pub fn feature_groups(&self) -> impl Iterator<Item = (FeatureCategory, usize, &FeatureGroup)> {
        FeatureCategory::ALL.into_iter().flat_map(move |category| {
            self.features(category)
                .iter()
                .enumerate()
                .map(move |(index, group)| (category, index, group))
        })
    }

    /// Basemaps, treating an absent list as empty
    pub fn base_maps(&self) -> &[BasemapEntity] {
        self.base_maps.as_deref().unwrap_or_default()
    }

    /// Basemaps for mutation; creates the list on first use
    pub fn base_maps_mut(&mut self) -> &mut Vec<BasemapEntity> {
        self.base_maps.get_or_insert_with(Vec::new)
    }

    pub fn layer(&self, id: &str) -> Option<&LayerEntry> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Serialized form of the document
    pub fn to_value(&self) -> serde_json::Value {
        // Every map key is a String and every number finite, so this cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
