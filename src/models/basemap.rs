//! Basemap model
//!
//! Basemaps are independent of features and layers: nothing references them by id.

use super::layer::LayerConfig;
use serde::{Deserialize, Serialize};

/// Thumbnail of a basemap, either inline image data or a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumbnail<'a> {
    Url(&'a str),
    /// Data URL / base64 payload uploaded through the editor
    Inline(&'a str),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasemapEntity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Country codes the basemap is offered in (see `Country`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,
    /// Unit system (see `UnitType`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(default)]
    pub base_layers: Vec<LayerConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_layers: Vec<LayerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_data: Option<String>,
}

impl BasemapEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_layers: Vec<LayerConfig>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_layers,
            ..Default::default()
        }
    }

    /// The thumbnail, preferring inline data when (invalidly) both are set
    pub fn thumbnail(&self) -> Option<Thumbnail<'_>> {
        if let Some(data) = self.thumbnail_data.as_deref().filter(|d| !d.is_empty()) {
            return Some(Thumbnail::Inline(data));
        }
        self.thumbnail_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(Thumbnail::Url)
    }

    /// Replace the thumbnail, clearing the other representation
    pub fn set_thumbnail(&mut self, thumbnail: Option<Thumbnail<'_>>) {
        match thumbnail {
            Some(Thumbnail::Url(url)) => {
                self.thumbnail_url = Some(url.to_string());
                self.thumbnail_data = None;
            }
            Some(Thumbnail::Inline(data)) => {
                self.thumbnail_data = Some(data.to_string());
                self.thumbnail_url = None;
            }
            None => {
                self.thumbnail_url = None;
                self.thumbnail_data = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::LayerType;

    #[test]
    fn test_set_thumbnail_keeps_representations_exclusive() {
        let mut basemap = BasemapEntity::new(
            "topo",
            "Topographic",
            vec![LayerConfig::new(LayerType::Tiled, "https://tiles.example.org")],
        );
        basemap.set_thumbnail(Some(Thumbnail::Url("https://img.example.org/topo.png")));
        assert_eq!(
            basemap.thumbnail(),
            Some(Thumbnail::Url("https://img.example.org/topo.png"))
        );

        basemap.set_thumbnail(Some(Thumbnail::Inline("data:image/png;base64,AAAA")));
        assert!(basemap.thumbnail_url.is_none());
        assert_eq!(
            basemap.thumbnail(),
            Some(Thumbnail::Inline("data:image/png;base64,AAAA"))
        );

        basemap.set_thumbnail(None);
        assert_eq!(basemap.thumbnail(), None);
    }
}
