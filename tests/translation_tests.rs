//! Tests for translation synchronization and pruning

use map_config_sdk::models::{Document, FeatureGroup, FeatureItem, Language};
use map_config_sdk::references::collect_translation_keys;
use map_config_sdk::translations::{
    prune_translations, sync_and_prune, sync_and_prune_with_stats, sync_translations,
    translation_coverage,
};

fn document() -> Document {
    let mut doc = Document::new();

    let mut wind = FeatureGroup::new("wind");
    wind.name = Some("Wind".to_string());
    let mut w60 = FeatureItem::new("w60", "60 min", vec!["wind_layer".to_string()]);
    w60.legend_description = Some("Wind speed in knots".to_string());
    wind.items.push(w60);
    wind.items
        .push(FeatureItem::new("w120", "", vec!["wind_layer".to_string()]));
    doc.weather_features.push(wind);

    let mut airports = FeatureGroup::default();
    airports
        .items
        .push(FeatureItem::new("ekch", "Copenhagen", vec!["airport_layer".to_string()]));
    doc.features.push(airports);

    doc.intl.da.insert("wind".to_string(), "Vind".to_string());
    doc.intl.nb.insert("retired".to_string(), "Utgått".to_string());
    doc
}

#[test]
fn test_sync_completeness() {
    let synced = sync_translations(&document());
    let keys = collect_translation_keys(&synced);
    assert_eq!(keys.len(), 5);

    for language in Language::ALL {
        for key in &keys {
            assert!(
                synced.intl.text(language, key).is_some(),
                "{} lacks {}",
                language,
                key
            );
        }
    }

    assert_eq!(synced.intl.text(Language::En, "wind"), Some("Wind"));
    assert_eq!(synced.intl.text(Language::Da, "wind"), Some("Vind"));
    assert_eq!(synced.intl.text(Language::Nb, "w120"), Some("w120"));
    assert_eq!(
        synced.intl.text(Language::Sv, "Wind speed in knots"),
        Some("Wind speed in knots")
    );
    // sync never removes
    assert_eq!(synced.intl.text(Language::Nb, "retired"), Some("Utgått"));
}

#[test]
fn test_sync_twice_equals_once() {
    let once = sync_translations(&document());
    assert_eq!(sync_translations(&once).intl, once.intl);
}

#[test]
fn test_prune_idempotent() {
    let once = prune_translations(&document());
    assert_eq!(prune_translations(&once), once);
    assert!(once.intl.nb.is_empty());
    assert_eq!(once.intl.text(Language::Da, "wind"), Some("Vind"));
}

#[test]
fn test_deleted_item_key_is_pruned_after_sync() {
    let mut doc = sync_translations(&document());
    doc.features.clear();

    let (fixed, stats) = sync_and_prune_with_stats(&doc);
    assert_eq!(stats.added, 0);
    assert_eq!(stats.removed, 5);
    assert_eq!(fixed.intl.text(Language::En, "ekch"), None);
    assert_eq!(fixed, sync_and_prune(&fixed));

    let coverage = translation_coverage(&fixed);
    assert!(coverage.iter().all(|language| language.is_complete()));
}
