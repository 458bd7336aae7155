//! Removing stale translation keys

use super::sync::{TranslationSyncStats, sync_in_place};
use crate::models::{Document, Language};
use crate::references::collect_translation_keys;

/// Drop keys no longer in use from every language. Returns the number removed.
pub(crate) fn prune_in_place(doc: &mut Document) -> usize {
    let keys = collect_translation_keys(doc);
    let mut removed = 0;
    for language in Language::ALL {
        let dictionary = doc.intl.get_mut(language);
        let before = dictionary.len();
        dictionary.retain(|key, _| keys.contains(key));
        removed += before - dictionary.len();
    }
    removed
}

/// Return a copy of `doc` whose dictionaries hold only keys that are in use.
///
/// Idempotent: pruning a pruned document changes nothing.
pub fn prune_translations(doc: &Document) -> Document {
    let mut pruned = doc.clone();
    let removed = prune_in_place(&mut pruned);
    tracing::debug!("Pruned {} stale translation entries", removed);
    pruned
}

/// Sync then prune in one pass, returning the counts for both steps.
///
/// A key whose only source was removed before this call is dropped by the prune step; sync
/// never brings it back because it only adds keys that are in use.
pub fn sync_and_prune_with_stats(doc: &Document) -> (Document, TranslationSyncStats) {
    let mut result = doc.clone();
    let added = sync_in_place(&mut result);
    let removed = prune_in_place(&mut result);
    let stats = TranslationSyncStats { added, removed };
    tracing::debug!("{:?}", stats);
    (result, stats)
}

/// Sync then prune: the batch "fix everything" pipeline
pub fn sync_and_prune(doc: &Document) -> Document {
    sync_and_prune_with_stats(doc).0
}
