//! Translation coverage per language

use crate::models::{Document, Language};
use crate::references::collect_translation_keys;
use serde::{Deserialize, Serialize};

/// Keys in use that a language lacks or has only as empty text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCoverage {
    pub language: Language,
    /// Number of keys in use
    pub total: usize,
    /// Sorted keys without a non-empty entry
    pub missing: Vec<String>,
}

impl LanguageCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Covered keys as a percentage, 100 when no keys are in use
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.total - self.missing.len()) as f64 * 100.0 / self.total as f64
    }
}

/// Coverage of every supported language, in `Language::ALL` order
pub fn translation_coverage(doc: &Document) -> Vec<LanguageCoverage> {
    let keys = collect_translation_keys(doc);
    Language::ALL
        .into_iter()
        .map(|language| {
            let dictionary = doc.intl.get(language);
            let missing = keys
                .iter()
                .filter(|key| dictionary.get(*key).is_none_or(|text| text.is_empty()))
                .cloned()
                .collect();
            LanguageCoverage {
                language,
                total: keys.len(),
                missing,
            }
        })
        .collect()
}
