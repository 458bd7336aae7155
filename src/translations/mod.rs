//! Translation synchronization
//!
//! Keeps the per-language dictionaries in step with the translation keys the document uses:
//! - [`sync_translations`] adds every missing key to every language
//! - [`auto_sync_feature_translations`] adds the keys of one saved group, never overwriting
//! - [`prune_translations`] drops keys no longer in use
//! - [`sync_and_prune`] runs sync, then prune
//!
//! English is the source of truth: other languages copy English text for keys they lack.

pub mod coverage;
pub mod prune;
pub mod sync;

pub use coverage::{LanguageCoverage, translation_coverage};
pub use prune::{prune_translations, sync_and_prune, sync_and_prune_with_stats};
pub use sync::{
    TranslationSyncStats, auto_sync_feature_translations, build_fallback_table, sync_translations,
};
