//! Feature group and feature item models

use super::enums::Presentation;
use serde::{Deserialize, Serialize};

/// Return the first candidate that is present and not blank after trimming.
///
/// Candidates are evaluated in the order given, so the slice spells out the precedence
/// of a display-name chain.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::models::feature::first_non_blank;
///
/// assert_eq!(first_non_blank(&[None, Some("  "), Some("wind")]), Some("wind"));
/// assert_eq!(first_non_blank(&[None, Some("")]), None);
/// ```
pub fn first_non_blank<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.trim().is_empty())
}

/// A selectable entry inside a feature group, drawing one or more layers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    /// Identifier, unique within the group; also a translation key
    #[serde(default)]
    pub id: String,
    /// Human readable name (English fallback text for `id`)
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_url: Option<String>,
    /// Legend text; its own translation key when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_description: Option<String>,
    /// Ids of the `LayerEntry` definitions this item draws
    #[serde(default)]
    pub layers_ids: Vec<String>,
}

impl FeatureItem {
    /// Create an item with the given id, name and layer references
    pub fn new(id: impl Into<String>, name: impl Into<String>, layers_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layers_ids,
            ..Default::default()
        }
    }

    /// Name shown for the item at `index`: `name`, then `id`, then `"Item {index+1}"`
    pub fn display_name(&self, index: usize) -> String {
        first_non_blank(&[Some(self.name.as_str()), Some(self.id.as_str())])
            .map(str::to_string)
            .unwrap_or_else(|| format!("Item {}", index + 1))
    }

    /// Non-blank legend description, if any
    pub fn legend_key(&self) -> Option<&str> {
        self.legend_description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// A named set of selectable items (weather or general)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureGroup {
    /// Identifier; also a translation key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub presentation: Presentation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutually_exclusive: Option<bool>,
    #[serde(default)]
    pub items: Vec<FeatureItem>,
}

impl FeatureGroup {
    /// Create a group with an id and no items
    ///
    /// # Example
    ///
    /// ```rust
    /// use map_config_sdk::models::{FeatureGroup, FeatureItem};
    ///
    /// let mut group = FeatureGroup::new("wind");
    /// group.items.push(FeatureItem::new("w60", "60 min", vec!["wind_layer".to_string()]));
    /// assert_eq!(group.display_name(0), "wind");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Name shown for the group at `index`: `name`, then `id`, then `"Group {index+1}"`
    pub fn display_name(&self, index: usize) -> String {
        first_non_blank(&[self.name.as_deref(), self.id.as_deref()])
            .map(str::to_string)
            .unwrap_or_else(|| format!("Group {}", index + 1))
    }

    /// Non-blank group id, if any
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Translation keys owned by this group: its id, then each item's id and legend description
    pub fn translation_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        if let Some(id) = self.key() {
            keys.push(id);
        }
        for item in &self.items {
            if !item.id.trim().is_empty() {
                keys.push(item.id.as_str());
            }
            if let Some(legend) = item.legend_key() {
                keys.push(legend);
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_precedence() {
        let mut item = FeatureItem::new("w60", "60 min", vec![]);
        assert_eq!(item.display_name(0), "60 min");
        item.name = "   ".to_string();
        assert_eq!(item.display_name(0), "w60");
        item.id.clear();
        assert_eq!(item.display_name(2), "Item 3");

        let group = FeatureGroup::default();
        assert_eq!(group.display_name(0), "Group 1");
    }

    #[test]
    fn test_translation_keys_skip_blank_values() {
        let mut group = FeatureGroup::new("wind");
        let mut item = FeatureItem::new("w60", "60 min", vec!["l".to_string()]);
        item.legend_description = Some("Wind speed in knots".to_string());
        group.items.push(item);
        group.items.push(FeatureItem::new("", "nameless", vec![]));

        assert_eq!(
            group.translation_keys(),
            vec!["wind", "w60", "Wind speed in knots"]
        );
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let item = FeatureItem::new("w60", "60 min", vec!["wind_layer".to_string()]);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "w60", "name": "60 min", "layersIds": ["wind_layer"]})
        );
    }
}
