//! Cross-reference collection
//!
//! Pure functions over a [`Document`] that derive:
//! - the translation keys in use (group ids, item ids, legend descriptions)
//! - the layer ids referenced by feature items
//! - where a given layer is used
//!
//! Sets are `BTreeSet`s so iteration order, and every message built from them, is stable.

use crate::models::{Document, FeatureCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One (feature group, item) pair that references a layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerUsage {
    pub category: FeatureCategory,
    pub group_index: usize,
    pub group_name: String,
    pub item_index: usize,
    pub item_name: String,
}

/// Every non-blank group id, item id and item legend description in both feature collections.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::models::{Document, FeatureGroup, FeatureItem};
/// use map_config_sdk::references::collect_translation_keys;
///
/// let mut doc = Document::new();
/// let mut group = FeatureGroup::new("wind");
/// group.items.push(FeatureItem::new("w60", "60 min", vec!["wind_layer".to_string()]));
/// doc.weather_features.push(group);
///
/// let keys: Vec<String> = collect_translation_keys(&doc).into_iter().collect();
/// assert_eq!(keys, vec!["w60", "wind"]);
/// ```
pub fn collect_translation_keys(doc: &Document) -> BTreeSet<String> {
    doc.feature_groups()
        .flat_map(|(_, _, group)| group.translation_keys())
        .map(str::to_string)
        .collect()
}

/// Union of every item's `layersIds`
pub fn collect_referenced_layer_ids(doc: &Document) -> BTreeSet<String> {
    doc.feature_groups()
        .flat_map(|(_, _, group)| group.items.iter())
        .flat_map(|item| item.layers_ids.iter().cloned())
        .collect()
}

/// Ids of the layer entries defined in the document
pub fn defined_layer_ids(doc: &Document) -> BTreeSet<String> {
    doc.layers.iter().map(|layer| layer.id.clone()).collect()
}

/// Layer ids referenced by items but not defined in `layers` (referential gaps)
pub fn missing_layer_ids(doc: &Document) -> BTreeSet<String> {
    let defined = defined_layer_ids(doc);
    collect_referenced_layer_ids(doc)
        .into_iter()
        .filter(|id| !defined.contains(id))
        .collect()
}

/// Layer ids defined in `layers` that no item references
pub fn unused_layer_ids(doc: &Document) -> BTreeSet<String> {
    let referenced = collect_referenced_layer_ids(doc);
    defined_layer_ids(doc)
        .into_iter()
        .filter(|id| !referenced.contains(id))
        .collect()
}

/// List every (group, item) pair whose `layersIds` contains `layer_id`.
///
/// Names fall back from `name` to `id` to a positional placeholder, so every entry is
/// displayable.
pub fn get_layer_usage(doc: &Document, layer_id: &str) -> Vec<LayerUsage> {
    let mut usages = Vec::new();
    for (category, group_index, group) in doc.feature_groups() {
        for (item_index, item) in group.items.iter().enumerate() {
            if item.layers_ids.iter().any(|id| id == layer_id) {
                usages.push(LayerUsage {
                    category,
                    group_index,
                    group_name: group.display_name(group_index),
                    item_index,
                    item_name: item.display_name(item_index),
                });
            }
        }
    }
    usages
}

/// Return a copy of `doc` where every item reference to `old_id` points at `new_id`.
///
/// The layer entry itself is not renamed. Returns the new document and the number of
/// references rewritten.
pub fn rename_layer_references(doc: &Document, old_id: &str, new_id: &str) -> (Document, usize) {
    let mut renamed = doc.clone();
    let mut count = 0;
    if old_id == new_id {
        return (renamed, count);
    }

    for category in FeatureCategory::ALL {
        for group in renamed.features_mut(category).iter_mut() {
            for item in group.items.iter_mut() {
                for id in item.layers_ids.iter_mut().filter(|id| id.as_str() == old_id) {
                    *id = new_id.to_string();
                    count += 1;
                }
            }
        }
    }

    tracing::debug!(
        "Renamed {} references from layer '{}' to '{}'",
        count,
        old_id,
        new_id
    );
    (renamed, count)
}
