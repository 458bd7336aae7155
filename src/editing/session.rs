//! Draft sessions
//!
//! A [`DraftSession`] holds in-progress edits for one entity kind. Each draft is keyed by the
//! list it belongs to and either an existing index or [`DraftKey::New`]. Drafts are raw JSON
//! objects deep-copied from the committed entity, so nothing done to a draft can reach the
//! committed [`Document`] until [`DraftSession::commit`] writes it back.
//!
//! The session never owns the document: every operation that changes it takes the current
//! document and returns the new one.

use super::entity::{EditOptions, EditableEntity};
use super::error::CommitError;
use super::reorder::{Selection, adjust_index_for_removal, adjust_index_for_reorder, move_feature, reorder};
use crate::models::{Document, FeatureCategory, FeatureGroup};
use crate::validation::ValidationReport;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// Which entity a draft edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftKey {
    /// The committed entity at this index
    Existing(usize),
    /// An entity that will be appended on commit
    New,
}

/// Result of a successful commit
#[derive(Debug, Clone)]
#[must_use = "the committed document replaces the previous one"]
pub struct CommitOutcome {
    pub document: Document,
    /// Final index of the saved entity in its list
    pub index: usize,
    /// Validation of the draft; valid, but may carry warnings
    pub report: ValidationReport,
}

/// Edit session for one entity kind
#[derive(Debug)]
pub struct DraftSession<E: EditableEntity> {
    drafts: HashMap<(E::Scope, DraftKey), Value>,
    selection: Option<(E::Scope, usize)>,
    options: EditOptions,
    _entity: PhantomData<fn() -> E>,
}

impl<E: EditableEntity> Default for DraftSession<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EditableEntity> DraftSession<E> {
    pub fn new() -> Self {
        Self::with_options(EditOptions::default())
    }

    pub fn with_options(options: EditOptions) -> Self {
        Self {
            drafts: HashMap::new(),
            selection: None,
            options,
            _entity: PhantomData,
        }
    }

    pub fn options(&self) -> &EditOptions {
        &self.options
    }

    /// Currently selected entity, as (list, index)
    pub fn selection(&self) -> Option<(E::Scope, usize)> {
        self.selection
    }

    pub fn select(&mut self, scope: E::Scope, index: usize) {
        self.selection = Some((scope, index));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn is_editing(&self, scope: E::Scope, key: DraftKey) -> bool {
        self.drafts.contains_key(&(scope, key))
    }

    pub fn draft_count(&self) -> usize {
        self.drafts.len()
    }

    pub fn draft(&self, scope: E::Scope, key: DraftKey) -> Option<&Value> {
        self.drafts.get(&(scope, key))
    }

    /// The draft converted to the entity type
    pub fn draft_entity(&self, scope: E::Scope, key: DraftKey) -> Result<E, CommitError> {
        let draft = self.draft(scope, key).ok_or(CommitError::NoDraft)?;
        serde_json::from_value(draft.clone()).map_err(|e| CommitError::Deserialize(e.to_string()))
    }

    /// Start editing, or return the draft already open for this key.
    ///
    /// An existing key copies the committed entity; `New` starts from the kind's template.
    pub fn begin_edit(
        &mut self,
        doc: &Document,
        scope: E::Scope,
        key: DraftKey,
    ) -> Result<&Value, CommitError> {
        if !self.drafts.contains_key(&(scope, key)) {
            let initial = match key {
                DraftKey::Existing(index) => E::list(doc, scope)
                    .get(index)
                    .cloned()
                    .ok_or(CommitError::MissingEntity(index))?,
                DraftKey::New => E::template(),
            };
            let draft = to_draft(&initial)?;
            debug!("Started {} draft {:?} in {:?}", E::KIND, key, scope);
            self.drafts.insert((scope, key), draft);
        }
        self.draft(scope, key).ok_or(CommitError::NoDraft)
    }

    /// Merge top-level changes into a draft. A `null` value removes the key.
    pub fn update_draft(
        &mut self,
        scope: E::Scope,
        key: DraftKey,
        changes: Map<String, Value>,
    ) -> Result<&Value, CommitError> {
        let draft = self
            .drafts
            .get_mut(&(scope, key))
            .ok_or(CommitError::NoDraft)?;

        if !draft.is_object() {
            *draft = Value::Object(Map::new());
        }
        if let Value::Object(fields) = draft {
            for (field, value) in changes {
                if value.is_null() {
                    fields.remove(&field);
                } else {
                    fields.insert(field, value);
                }
            }
        }
        Ok(draft)
    }

    /// Replace a draft wholesale with a typed entity
    pub fn replace_draft(
        &mut self,
        scope: E::Scope,
        key: DraftKey,
        entity: &E,
    ) -> Result<(), CommitError> {
        let draft = self
            .drafts
            .get_mut(&(scope, key))
            .ok_or(CommitError::NoDraft)?;
        *draft = to_draft(entity)?;
        Ok(())
    }

    /// Discard a draft. Returns whether one existed.
    pub fn cancel(&mut self, scope: E::Scope, key: DraftKey) -> bool {
        self.drafts.remove(&(scope, key)).is_some()
    }

    /// Whether the draft differs from what it was started from
    pub fn is_dirty(&self, doc: &Document, scope: E::Scope, key: DraftKey) -> bool {
        let Some(draft) = self.draft(scope, key) else {
            return false;
        };
        let baseline = match key {
            DraftKey::Existing(index) => E::list(doc, scope).get(index).cloned(),
            DraftKey::New => Some(E::template()),
        };
        match baseline.map(|entity| to_draft(&entity)) {
            Some(Ok(baseline)) => &baseline != draft,
            _ => true,
        }
    }

    /// Validate the draft and write it into the document.
    ///
    /// On success the draft is cleared and the saved entity becomes the selection. An invalid
    /// draft is kept so editing can continue.
    pub fn commit(
        &mut self,
        doc: &Document,
        scope: E::Scope,
        key: DraftKey,
    ) -> Result<CommitOutcome, CommitError> {
        let draft = self.draft(scope, key).ok_or(CommitError::NoDraft)?;

        let report = E::validate_in(doc, scope, key, draft);
        if !report.valid {
            warn!(
                "Refused to commit {} draft {:?}: {} errors",
                E::KIND,
                key,
                report.errors.len()
            );
            return Err(CommitError::Invalid(report));
        }

        let entity: E = serde_json::from_value(draft.clone())
            .map_err(|e| CommitError::Deserialize(e.to_string()))?;

        let mut document = doc.clone();
        let list = E::list_mut(&mut document, scope);
        let (index, previous) = match key {
            DraftKey::Existing(index) => {
                let slot = list.get_mut(index).ok_or(CommitError::MissingEntity(index))?;
                let previous = std::mem::replace(slot, entity.clone());
                (index, Some(previous))
            }
            DraftKey::New => {
                list.push(entity.clone());
                (list.len() - 1, None)
            }
        };

        let document = E::after_commit(document, previous.as_ref(), &entity, &self.options);

        self.drafts.remove(&(scope, key));
        self.selection = Some((scope, index));
        info!("Committed {} {:?} at index {}", E::KIND, scope, index);

        Ok(CommitOutcome {
            document,
            index,
            report,
        })
    }

    /// Remove the entity at `index` and return the new document.
    ///
    /// The draft for that entity is dropped, drafts further down the list shift up with their
    /// entities, and the selection is adjusted.
    pub fn delete(
        &mut self,
        doc: &Document,
        scope: E::Scope,
        index: usize,
    ) -> Result<Document, CommitError> {
        if index >= E::list(doc, scope).len() {
            return Err(CommitError::MissingEntity(index));
        }

        let mut document = doc.clone();
        let list = E::list_mut(&mut document, scope);
        list.remove(index);
        let remaining = list.len();

        self.remap_drafts(|draft_scope, draft_index| {
            if draft_scope != scope || draft_index < index {
                Some((draft_scope, draft_index))
            } else if draft_index == index {
                None
            } else {
                Some((draft_scope, draft_index - 1))
            }
        });

        if let Some((selected_scope, selected)) = self.selection
            && selected_scope == scope
        {
            self.selection = adjust_index_for_removal(selected, index, remaining)
                .map(|selected| (scope, selected));
        }

        info!("Deleted {} {:?} at index {}", E::KIND, scope, index);
        Ok(document)
    }

    /// Move an entity within its list; drafts and the selection follow their entities
    pub fn reorder(
        &mut self,
        doc: &Document,
        scope: E::Scope,
        from_index: usize,
        to_index: usize,
    ) -> Document {
        let list = E::list(doc, scope);
        if from_index == to_index || from_index >= list.len() || to_index >= list.len() {
            return doc.clone();
        }

        let mut document = doc.clone();
        *E::list_mut(&mut document, scope) = reorder(list, from_index, to_index);

        let follow = |entry_scope: E::Scope, index: usize| {
            if entry_scope == scope {
                (entry_scope, adjust_index_for_reorder(index, from_index, to_index))
            } else {
                (entry_scope, index)
            }
        };
        self.remap_drafts(|s, i| Some(follow(s, i)));
        self.selection = self.selection.map(|(s, i)| follow(s, i));

        debug!("Reordered {} {:?} from {} to {}", E::KIND, scope, from_index, to_index);
        document
    }

    /// Re-key indexed drafts; `None` drops the draft
    fn remap_drafts(&mut self, remap: impl Fn(E::Scope, usize) -> Option<(E::Scope, usize)>) {
        self.drafts = std::mem::take(&mut self.drafts)
            .into_iter()
            .filter_map(|((scope, key), draft)| match key {
                DraftKey::New => Some(((scope, key), draft)),
                DraftKey::Existing(index) => remap(scope, index)
                    .map(|(scope, index)| ((scope, DraftKey::Existing(index)), draft)),
            })
            .collect();
    }
}

impl DraftSession<FeatureGroup> {
    /// Move a feature group within or across categories; drafts and selection follow it
    pub fn move_feature(
        &mut self,
        doc: &Document,
        from: FeatureCategory,
        from_index: usize,
        to: FeatureCategory,
        to_index: usize,
    ) -> Option<Document> {
        let (document, position) = move_feature(doc, from, from_index, to, to_index)?;

        let follow = |category: FeatureCategory, index: usize| {
            let moved = Selection::new(category, index).adjust_for_move(
                from,
                from_index,
                position.category,
                position.index,
            );
            (moved.category, moved.index)
        };
        self.remap_drafts(|s, i| Some(follow(s, i)));
        self.selection = self.selection.map(|(s, i)| follow(s, i));

        Some(document)
    }
}

fn to_draft<E: Serialize>(entity: &E) -> Result<Value, CommitError> {
    serde_json::to_value(entity).map_err(|e| CommitError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeatureItem, Language, LayerConfig, LayerEntry};
    use serde_json::json;

    fn changes(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn sample_document() -> Document {
        let mut doc = Document::new();
        for id in ["wind", "rain", "snow"] {
            let mut group = FeatureGroup::new(id);
            group
                .items
                .push(FeatureItem::new(format!("{id}_now"), "Now", vec![format!("{id}_layer")]));
            doc.weather_features.push(group);
        }
        doc.layers.push(LayerEntry::new(
            "wind_layer",
            vec![LayerConfig::wms("https://maps.example.org/wms", &["wind"])],
        ));
        doc
    }

    #[test]
    fn test_draft_is_isolated_until_commit() {
        let doc = sample_document();
        let before = serde_json::to_string(&doc).unwrap();
        let mut session = DraftSession::<FeatureGroup>::new();
        let key = DraftKey::Existing(0);

        session.begin_edit(&doc, FeatureCategory::Weather, key).unwrap();
        session
            .update_draft(FeatureCategory::Weather, key, changes(json!({"name": "Wind speed"})))
            .unwrap();

        assert_eq!(doc.weather_features[0].name, None);
        assert!(session.is_dirty(&doc, FeatureCategory::Weather, key));

        assert!(session.cancel(FeatureCategory::Weather, key));
        assert!(!session.is_editing(FeatureCategory::Weather, key));
        assert_eq!(serde_json::to_string(&doc).unwrap(), before);
    }

    #[test]
    fn test_update_requires_draft_and_null_removes() {
        let doc = sample_document();
        let mut session = DraftSession::<FeatureGroup>::new();
        let key = DraftKey::Existing(1);

        let err = session
            .update_draft(FeatureCategory::Weather, key, Map::new())
            .unwrap_err();
        assert!(matches!(err, CommitError::NoDraft));

        session.begin_edit(&doc, FeatureCategory::Weather, key).unwrap();
        let draft = session
            .update_draft(FeatureCategory::Weather, key, changes(json!({"id": null})))
            .unwrap();
        assert!(draft.get("id").is_none());
    }

    #[test]
    fn test_begin_edit_keeps_open_draft() {
        let doc = sample_document();
        let mut session = DraftSession::<FeatureGroup>::new();
        let key = DraftKey::Existing(0);
        session.begin_edit(&doc, FeatureCategory::Weather, key).unwrap();
        session
            .update_draft(FeatureCategory::Weather, key, changes(json!({"name": "Edited"})))
            .unwrap();
        let draft = session.begin_edit(&doc, FeatureCategory::Weather, key).unwrap();
        assert_eq!(draft["name"], "Edited");

        let missing = session.begin_edit(&doc, FeatureCategory::General, key);
        assert!(matches!(missing, Err(CommitError::MissingEntity(0))));
    }

    #[test]
    fn test_commit_new_feature_syncs_translations() {
        let doc = sample_document();
        let mut session = DraftSession::<FeatureGroup>::new();
        session
            .begin_edit(&doc, FeatureCategory::General, DraftKey::New)
            .unwrap();

        let invalid = session.commit(&doc, FeatureCategory::General, DraftKey::New);
        let Err(CommitError::Invalid(report)) = invalid else {
            panic!("expected an invalid draft");
        };
        assert_eq!(
            report.errors,
            vec!["Feature group: 'items' must contain at least one item"]
        );
        assert!(session.is_editing(FeatureCategory::General, DraftKey::New));

        session
            .update_draft(
                FeatureCategory::General,
                DraftKey::New,
                changes(json!({
                    "id": "airports",
                    "name": "Airports",
                    "items": [{"id": "ekch", "name": "Copenhagen", "layersIds": ["airport_layer"]}]
                })),
            )
            .unwrap();
        let outcome = session
            .commit(&doc, FeatureCategory::General, DraftKey::New)
            .unwrap();

        assert_eq!(outcome.index, 0);
        assert_eq!(outcome.document.features[0].key(), Some("airports"));
        assert_eq!(
            outcome.document.intl.text(Language::Da, "ekch"),
            Some("Copenhagen")
        );
        assert_eq!(session.selection(), Some((FeatureCategory::General, 0)));
        assert_eq!(session.draft_count(), 0);
        assert!(doc.features.is_empty());
    }

    #[test]
    fn test_commit_without_auto_sync() {
        let doc = sample_document();
        let mut session = DraftSession::<FeatureGroup>::with_options(EditOptions {
            auto_sync_translations: false,
        });
        let key = DraftKey::Existing(0);
        session.begin_edit(&doc, FeatureCategory::Weather, key).unwrap();
        let outcome = session.commit(&doc, FeatureCategory::Weather, key).unwrap();
        assert!(outcome.document.intl.is_empty());
    }

    #[test]
    fn test_layer_rename_follows_references() {
        let doc = sample_document();
        let mut session = DraftSession::<LayerEntry>::new();
        let key = DraftKey::Existing(0);
        session.begin_edit(&doc, (), key).unwrap();
        session
            .update_draft((), key, changes(json!({"id": "wind_speed"})))
            .unwrap();

        let outcome = session.commit(&doc, (), key).unwrap();
        assert_eq!(outcome.document.layers[0].id, "wind_speed");
        assert_eq!(
            outcome.document.weather_features[0].items[0].layers_ids,
            vec!["wind_speed"]
        );
    }

    #[test]
    fn test_delete_shifts_drafts_and_selection() {
        let doc = sample_document();
        let mut session = DraftSession::<FeatureGroup>::new();
        let weather = FeatureCategory::Weather;
        session.begin_edit(&doc, weather, DraftKey::Existing(0)).unwrap();
        session.begin_edit(&doc, weather, DraftKey::Existing(2)).unwrap();
        session.select(weather, 2);

        let doc = session.delete(&doc, weather, 0).unwrap();
        assert_eq!(doc.weather_features.len(), 2);
        assert!(!session.is_editing(weather, DraftKey::Existing(2)));
        assert_eq!(
            session.draft(weather, DraftKey::Existing(1)).unwrap()["id"],
            "snow"
        );
        assert_eq!(session.draft_count(), 1);
        assert_eq!(session.selection(), Some((weather, 1)));

        assert!(matches!(
            session.delete(&doc, weather, 5),
            Err(CommitError::MissingEntity(5))
        ));
    }

    #[test]
    fn test_reorder_keeps_selected_entity() {
        let doc = sample_document();
        let mut session = DraftSession::<FeatureGroup>::new();
        let weather = FeatureCategory::Weather;
        session.select(weather, 1);
        session.begin_edit(&doc, weather, DraftKey::Existing(0)).unwrap();

        let doc = session.reorder(&doc, weather, 0, 2);
        let ids: Vec<_> = doc.weather_features.iter().map(|g| g.key()).collect();
        assert_eq!(ids, vec![Some("rain"), Some("snow"), Some("wind")]);
        assert_eq!(session.selection(), Some((weather, 0)));
        assert_eq!(
            session.draft(weather, DraftKey::Existing(2)).unwrap()["id"],
            "wind"
        );
    }

    #[test]
    fn test_move_feature_across_categories() {
        let doc = sample_document();
        let mut session = DraftSession::<FeatureGroup>::new();
        session.select(FeatureCategory::Weather, 1);

        let doc = session
            .move_feature(&doc, FeatureCategory::Weather, 1, FeatureCategory::General, 0)
            .unwrap();
        assert_eq!(doc.features[0].key(), Some("rain"));
        assert_eq!(doc.weather_features.len(), 2);
        assert_eq!(session.selection(), Some((FeatureCategory::General, 0)));
    }
}
