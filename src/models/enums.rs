//! Enums for map configuration documents
//!
//! # Serde Casing Conventions
//!
//! - `lowercase`: Short keyword values (Presentation, Language, UnitType)
//! - `camelCase`: Layer vocabulary shared with the map client (LayerType, SourceKind)
//! - `UPPERCASE`: ISO country codes (Country)
//!
//! `LayerType` keeps unknown values as `Other` so that documents written by newer clients
//! still load; validation decides whether an unknown type is acceptable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the items of a feature group are presented in the map client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// One item visible at a time
    #[default]
    Single,
    /// Several items may be toggled independently
    Multiple,
}

impl Presentation {
    /// Wire values accepted for `presentation`
    pub const VALUES: [&'static str; 2] = ["single", "multiple"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Presentation::Single => "single",
            Presentation::Multiple => "multiple",
        }
    }
}

impl FromStr for Presentation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Presentation::Single),
            "multiple" => Ok(Presentation::Multiple),
            _ => Err(()),
        }
    }
}

/// Supported display languages, in fallback order (`en` first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Da,
    Nb,
    Sv,
}

impl Language {
    /// The closed, ordered set of languages every dictionary is kept for
    pub const ALL: [Language; 4] = [Language::En, Language::Da, Language::Nb, Language::Sv];

    /// Language whose dictionary is the source of truth for fallbacks
    pub const FALLBACK: Language = Language::En;

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Da => "da",
            Language::Nb => "nb",
            Language::Sv => "sv",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "da" => Ok(Language::Da),
            "nb" => Ok(Language::Nb),
            "sv" => Ok(Language::Sv),
            _ => Err(format!("Unknown language: {}. Use one of en, da, nb, sv.", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The two parallel feature collections of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureCategory {
    /// `weatherFeatures`
    Weather,
    /// `features`
    General,
}

impl FeatureCategory {
    pub const ALL: [FeatureCategory; 2] = [FeatureCategory::Weather, FeatureCategory::General];

    /// Document key of the collection
    pub fn field(&self) -> &'static str {
        match self {
            FeatureCategory::Weather => "weatherFeatures",
            FeatureCategory::General => "features",
        }
    }

    /// Label used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            FeatureCategory::Weather => "Weather feature",
            FeatureCategory::General => "Feature",
        }
    }

    /// The other category
    pub fn opposite(&self) -> FeatureCategory {
        match self {
            FeatureCategory::Weather => FeatureCategory::General,
            FeatureCategory::General => FeatureCategory::Weather,
        }
    }
}

/// Concrete map layer implementation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayerType {
    Wms,
    Tiled,
    MapImage,
    PortalItem,
    VectorTiled,
    Feature,
    Wmts,
    SceneLayer,
    /// Any value outside the known set, kept verbatim
    Other(String),
}

impl LayerType {
    /// Known wire values, in the order the map client lists them
    pub const KNOWN: [&'static str; 8] = [
        "wms",
        "tiled",
        "mapImage",
        "portalItem",
        "vectorTiled",
        "feature",
        "wmts",
        "sceneLayer",
    ];

    pub fn is_known(&self) -> bool {
        !matches!(self, LayerType::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            LayerType::Wms => "wms",
            LayerType::Tiled => "tiled",
            LayerType::MapImage => "mapImage",
            LayerType::PortalItem => "portalItem",
            LayerType::VectorTiled => "vectorTiled",
            LayerType::Feature => "feature",
            LayerType::Wmts => "wmts",
            LayerType::SceneLayer => "sceneLayer",
            LayerType::Other(s) => s,
        }
    }
}

impl Default for LayerType {
    /// A blank type, which validation reports until the user picks one
    fn default() -> Self {
        LayerType::Other(String::new())
    }
}

impl FromStr for LayerType {
    type Err = std::convert::Infallible;

    /// Unknown values become `Other`; parsing never fails
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "wms" => LayerType::Wms,
            "tiled" => LayerType::Tiled,
            "mapImage" => LayerType::MapImage,
            "portalItem" => LayerType::PortalItem,
            "vectorTiled" => LayerType::VectorTiled,
            "feature" => LayerType::Feature,
            "wmts" => LayerType::Wmts,
            "sceneLayer" => LayerType::SceneLayer,
            other => LayerType::Other(other.to_string()),
        })
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for LayerType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LayerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<LayerType>().map_err(|never| match never {})
    }
}

/// How `LayerConfig.source` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    /// `source` is a service URL
    Uri,
    /// `source` is a portal item id
    PortalItem,
}

impl SourceKind {
    pub const VALUES: [&'static str; 2] = ["uri", "portalItem"];
}

/// Countries a basemap can be offered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Dk,
    No,
    Se,
    Fi,
}

impl Country {
    pub const CODES: [&'static str; 4] = ["DK", "NO", "SE", "FI"];

    pub fn from_code(code: &str) -> Option<Country> {
        match code {
            "DK" => Some(Country::Dk),
            "NO" => Some(Country::No),
            "SE" => Some(Country::Se),
            "FI" => Some(Country::Fi),
            _ => None,
        }
    }
}

/// Measurement unit system a basemap is labelled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Metric,
    Imperial,
    Nautical,
}

impl UnitType {
    pub const VALUES: [&'static str; 3] = ["metric", "imperial", "nautical"];

    pub fn from_value(value: &str) -> Option<UnitType> {
        match value {
            "metric" => Some(UnitType::Metric),
            "imperial" => Some(UnitType::Imperial),
            "nautical" => Some(UnitType::Nautical),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_type_round_trip_keeps_unknown_values() {
        let known: LayerType = serde_json::from_str("\"vectorTiled\"").unwrap();
        assert_eq!(known, LayerType::VectorTiled);
        assert!(known.is_known());

        let unknown: LayerType = serde_json::from_str("\"heatmap\"").unwrap();
        assert_eq!(unknown, LayerType::Other("heatmap".to_string()));
        assert!(!unknown.is_known());
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"heatmap\"");
    }

    #[test]
    fn test_language_order_and_parsing() {
        let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "da", "nb", "sv"]);
        assert_eq!("NB".parse::<Language>().unwrap(), Language::Nb);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(FeatureCategory::Weather.field(), "weatherFeatures");
        assert_eq!(FeatureCategory::General.label(), "Feature");
        assert_eq!(FeatureCategory::Weather.opposite(), FeatureCategory::General);
    }
}
