//! Filling translation dictionaries from the keys in use

use crate::models::{Dictionary, Document, FeatureGroup, Language};
use crate::references::collect_translation_keys;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts of keys changed by a sync or prune pass, summed over all languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSyncStats {
    pub added: usize,
    pub removed: usize,
}

impl TranslationSyncStats {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Human text to seed a key with when no translation exists yet.
///
/// Group ids map to the group name, item ids to the item name, and a legend description to
/// itself. The first occurrence of a key wins; blank names contribute nothing.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::models::{Document, FeatureGroup, FeatureItem};
/// use map_config_sdk::translations::build_fallback_table;
///
/// let mut doc = Document::new();
/// let mut group = FeatureGroup::new("wind");
/// group.items.push(FeatureItem::new("w60", "60 min", vec!["wind_layer".to_string()]));
/// doc.weather_features.push(group);
///
/// let table = build_fallback_table(&doc);
/// assert_eq!(table.get("w60").map(String::as_str), Some("60 min"));
/// assert!(table.get("wind").is_none());
/// ```
pub fn build_fallback_table(doc: &Document) -> BTreeMap<String, String> {
    let mut table = BTreeMap::new();
    for (_, _, group) in doc.feature_groups() {
        add_group_fallbacks(&mut table, group);
    }
    table
}

fn add_group_fallbacks(table: &mut BTreeMap<String, String>, group: &FeatureGroup) {
    if let (Some(id), Some(name)) = (group.key(), group.name.as_deref())
        && !name.trim().is_empty()
    {
        table.entry(id.to_string()).or_insert_with(|| name.to_string());
    }

    for item in &group.items {
        if !item.id.trim().is_empty() && !item.name.trim().is_empty() {
            table
                .entry(item.id.clone())
                .or_insert_with(|| item.name.clone());
        }
        if let Some(legend) = item.legend_key() {
            table
                .entry(legend.to_string())
                .or_insert_with(|| legend.to_string());
        }
    }
}

/// Text a missing key gets in `language`.
///
/// English uses the fallback table, then the key itself. Other languages copy the English
/// entry when one exists, even an empty one, and otherwise follow the English chain.
fn seed_text(
    language: Language,
    key: &str,
    english: &Dictionary,
    fallbacks: &BTreeMap<String, String>,
) -> String {
    let english_text = if language == Language::FALLBACK {
        None
    } else {
        english.get(key)
    };
    english_text
        .or_else(|| fallbacks.get(key))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

/// Add every key in use to every language, keeping existing entries. Returns the number added.
pub(crate) fn sync_in_place(doc: &mut Document) -> usize {
    let keys = collect_translation_keys(doc);
    let fallbacks = build_fallback_table(doc);
    let mut added = 0;

    // English first so the other languages can copy from it
    for language in Language::ALL {
        let english = doc.intl.get(Language::FALLBACK).clone();
        let dictionary = doc.intl.get_mut(language);
        for key in &keys {
            if !dictionary.contains_key(key) {
                let text = seed_text(language, key, &english, &fallbacks);
                dictionary.insert(key.clone(), text);
                added += 1;
            }
        }
    }
    added
}

/// Return a copy of `doc` where every translation key in use exists in every language.
///
/// Existing entries are kept as they are. Missing English entries come from the fallback
/// table (or the key itself); missing entries in other languages copy the English text.
/// Applying it twice gives the same dictionaries as applying it once.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::models::{Document, FeatureGroup, FeatureItem, Language};
/// use map_config_sdk::translations::sync_translations;
///
/// let mut doc = Document::new();
/// let mut group = FeatureGroup::new("wind");
/// group.items.push(FeatureItem::new("w60", "60 min", vec!["wind_layer".to_string()]));
/// doc.weather_features.push(group);
///
/// let synced = sync_translations(&doc);
/// assert_eq!(synced.intl.text(Language::En, "w60"), Some("60 min"));
/// assert_eq!(synced.intl.text(Language::Sv, "wind"), Some("wind"));
/// ```
pub fn sync_translations(doc: &Document) -> Document {
    let mut synced = doc.clone();
    let added = sync_in_place(&mut synced);
    tracing::debug!(
        "{:?}",
        TranslationSyncStats {
            added,
            removed: 0
        }
    );
    synced
}

/// Add the missing keys of one feature group, as run on every feature save.
///
/// Only the group's own keys (its id, its items' ids and legend descriptions) are touched.
/// Absent or empty entries are filled; non-empty entries are never overwritten and nothing
/// is removed.
pub fn auto_sync_feature_translations(doc: &Document, group: &FeatureGroup) -> Document {
    let mut synced = doc.clone();
    let mut fallbacks = BTreeMap::new();
    add_group_fallbacks(&mut fallbacks, group);

    let mut added = 0;
    for language in Language::ALL {
        let english = synced.intl.get(Language::FALLBACK).clone();
        let dictionary = synced.intl.get_mut(language);
        for key in group.translation_keys() {
            let filled = dictionary.get(key).is_some_and(|text| !text.is_empty());
            if !filled {
                let text = seed_text(language, key, &english, &fallbacks);
                dictionary.insert(key.to_string(), text);
                added += 1;
            }
        }
    }

    tracing::debug!(
        "Auto-synced {} translation entries for group '{}'",
        added,
        group.key().unwrap_or_default()
    );
    synced
}
