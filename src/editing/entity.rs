//! Entity kinds that can be edited through a draft session

use super::session::DraftKey;
use crate::models::{BasemapEntity, Document, FeatureCategory, FeatureGroup, LayerEntry};
use crate::references::rename_layer_references;
use crate::translations::auto_sync_feature_translations;
use crate::validation::{
    ValidationReport, validate_basemap_value, validate_feature_group_value,
    validate_layer_entry_value,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::info;

/// Behaviour applied by a session when it commits a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOptions {
    /// Add a saved feature group's missing translation keys
    pub auto_sync_translations: bool,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            auto_sync_translations: true,
        }
    }
}

/// An entity kind with its own list in the document, validator and post-commit hook
pub trait EditableEntity: Clone + Serialize + DeserializeOwned {
    /// Which list of the document an index refers to
    type Scope: Copy + Eq + Hash + Debug;

    /// Kind name used in log messages
    const KIND: &'static str;

    /// Prefix of list-level validation messages
    const LABEL: &'static str;

    fn list(doc: &Document, scope: Self::Scope) -> &[Self];

    fn list_mut(doc: &mut Document, scope: Self::Scope) -> &mut Vec<Self>;

    /// Starting point of a `New` draft
    fn template() -> Self;

    /// Raw validator run against the draft before it is committed
    fn validate(draft: &Value) -> ValidationReport;

    /// Identifier that must be unique within the entity's list
    fn unique_id(&self) -> Option<&str> {
        None
    }

    /// Validate a draft against the list it will be written into.
    ///
    /// Adds the rules [`EditableEntity::validate`] cannot see on its own: the draft's id must
    /// not be used by any other entry of the list.
    fn validate_in(
        doc: &Document,
        scope: Self::Scope,
        key: DraftKey,
        draft: &Value,
    ) -> ValidationReport {
        let mut report = Self::validate(draft);
        let Some(id) = draft
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.trim().is_empty())
        else {
            return report;
        };

        let taken = Self::list(doc, scope)
            .iter()
            .enumerate()
            .any(|(index, entity)| {
                key != DraftKey::Existing(index) && entity.unique_id() == Some(id)
            });
        if taken {
            report.error(format!("{}: duplicate id '{}'", Self::LABEL, id));
        }
        report
    }

    /// Adjust the rest of the document after `saved` has been written
    fn after_commit(
        doc: Document,
        _previous: Option<&Self>,
        _saved: &Self,
        _options: &EditOptions,
    ) -> Document {
        doc
    }
}

impl EditableEntity for FeatureGroup {
    type Scope = FeatureCategory;
    const KIND: &'static str = "feature";
    const LABEL: &'static str = "Feature group";

    fn list(doc: &Document, scope: FeatureCategory) -> &[Self] {
        doc.features(scope)
    }

    fn list_mut(doc: &mut Document, scope: FeatureCategory) -> &mut Vec<Self> {
        doc.features_mut(scope)
    }

    fn template() -> Self {
        FeatureGroup::default()
    }

    fn validate(draft: &Value) -> ValidationReport {
        validate_feature_group_value(draft)
    }

    fn after_commit(
        doc: Document,
        _previous: Option<&Self>,
        saved: &Self,
        options: &EditOptions,
    ) -> Document {
        if options.auto_sync_translations {
            auto_sync_feature_translations(&doc, saved)
        } else {
            doc
        }
    }
}

impl EditableEntity for LayerEntry {
    type Scope = ();
    const KIND: &'static str = "layer";
    const LABEL: &'static str = "Layer";

    fn list(doc: &Document, _scope: ()) -> &[Self] {
        &doc.layers
    }

    fn list_mut(doc: &mut Document, _scope: ()) -> &mut Vec<Self> {
        &mut doc.layers
    }

    fn template() -> Self {
        LayerEntry::default()
    }

    fn validate(draft: &Value) -> ValidationReport {
        validate_layer_entry_value(draft)
    }

    fn unique_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn after_commit(
        doc: Document,
        previous: Option<&Self>,
        saved: &Self,
        _options: &EditOptions,
    ) -> Document {
        match previous {
            Some(previous) if !previous.id.is_empty() && previous.id != saved.id => {
                let (renamed, count) = rename_layer_references(&doc, &previous.id, &saved.id);
                info!(
                    "Layer '{}' renamed to '{}', updated {} item references",
                    previous.id, saved.id, count
                );
                renamed
            }
            _ => doc,
        }
    }
}

impl EditableEntity for BasemapEntity {
    type Scope = ();
    const KIND: &'static str = "basemap";
    const LABEL: &'static str = "Basemap";

    fn list(doc: &Document, _scope: ()) -> &[Self] {
        doc.base_maps()
    }

    fn list_mut(doc: &mut Document, _scope: ()) -> &mut Vec<Self> {
        doc.base_maps_mut()
    }

    fn template() -> Self {
        BasemapEntity::default()
    }

    fn validate(draft: &Value) -> ValidationReport {
        validate_basemap_value(draft)
    }

    fn unique_id(&self) -> Option<&str> {
        Some(&self.id)
    }
}
