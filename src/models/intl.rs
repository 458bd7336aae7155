//! Translation dictionaries
//!
//! One dictionary per supported language. All four are always present in memory and in
//! serialized output, even when empty.

use super::enums::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map of translation key to display text
pub type Dictionary = BTreeMap<String, String>;

/// The `intl` section of a document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translations {
    #[serde(default)]
    pub en: Dictionary,
    #[serde(default)]
    pub da: Dictionary,
    #[serde(default)]
    pub nb: Dictionary,
    #[serde(default)]
    pub sv: Dictionary,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, language: Language) -> &Dictionary {
        match language {
            Language::En => &self.en,
            Language::Da => &self.da,
            Language::Nb => &self.nb,
            Language::Sv => &self.sv,
        }
    }

    pub fn get_mut(&mut self, language: Language) -> &mut Dictionary {
        match language {
            Language::En => &mut self.en,
            Language::Da => &mut self.da,
            Language::Nb => &mut self.nb,
            Language::Sv => &mut self.sv,
        }
    }

    /// Dictionaries in `Language::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Language, &Dictionary)> {
        Language::ALL.into_iter().map(|language| (language, self.get(language)))
    }

    /// Text for `key` in `language`, if present
    pub fn text(&self, language: Language, key: &str) -> Option<&str> {
        self.get(language).get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, dictionary)| dictionary.is_empty())
    }
}
