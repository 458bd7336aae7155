//! Reordering and moving entities between lists
//!
//! All functions are pure: they return new lists and leave their inputs alone. Indices are
//! final positions: after `reorder(list, from, to)` the moved element sits at `to`.
//! Out-of-range indices make every operation a no-op.

use crate::models::{Document, FeatureCategory};
use serde::{Deserialize, Serialize};

/// Move the element at `from_index` to `to_index` within one list.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::editing::reorder;
///
/// assert_eq!(reorder(&["A", "B", "C", "D"], 0, 2), vec!["B", "C", "A", "D"]);
/// assert_eq!(reorder(&["A", "B", "C", "D"], 3, 0), vec!["D", "A", "B", "C"]);
/// assert_eq!(reorder(&["A", "B"], 0, 5), vec!["A", "B"]);
/// ```
pub fn reorder<T: Clone>(list: &[T], from_index: usize, to_index: usize) -> Vec<T> {
    let mut result = list.to_vec();
    if from_index == to_index || from_index >= list.len() || to_index >= list.len() {
        return result;
    }
    let moved = result.remove(from_index);
    result.insert(to_index, moved);
    result
}

/// Remove the element at `from_index` and append it to `to_list`
pub fn move_across_category<T: Clone>(
    from_list: &[T],
    from_index: usize,
    to_list: &[T],
) -> (Vec<T>, Vec<T>) {
    let (from, to) = move_to_index(from_list, from_index, Some(to_list), to_list.len());
    let to = to.unwrap_or_else(|| from.clone());
    (from, to)
}

/// Move an element to a position in the same list (`to_list` is `None`) or in another list.
///
/// Passing the source slice itself as `to_list` is treated as a move within the same list.
/// Returns the new source list and, for a move between lists, the new destination list.
/// `to_index` is clamped to the end of the destination.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::editing::move_to_index;
///
/// let (same, _) = move_to_index(&["A", "B", "C", "D"], 0, None, 2);
/// assert_eq!(same, vec!["B", "C", "A", "D"]);
///
/// let (from, to) = move_to_index(&["A", "B"], 1, Some(&["X", "Y"][..]), 1);
/// assert_eq!(from, vec!["A"]);
/// assert_eq!(to, Some(vec!["X", "B", "Y"]));
/// ```
pub fn move_to_index<T: Clone>(
    from_list: &[T],
    from_index: usize,
    to_list: Option<&[T]>,
    to_index: usize,
) -> (Vec<T>, Option<Vec<T>>) {
    let Some(to_list) = to_list.filter(|to_list| !std::ptr::eq(*to_list, from_list)) else {
        let last = from_list.len().saturating_sub(1);
        return (reorder(from_list, from_index, to_index.min(last)), None);
    };

    if from_index >= from_list.len() {
        return (from_list.to_vec(), Some(to_list.to_vec()));
    }

    let mut from = from_list.to_vec();
    let mut to = to_list.to_vec();
    let moved = from.remove(from_index);
    to.insert(to_index.min(to.len()), moved);
    (from, Some(to))
}

/// Final index for a drop in front of the element at `slot` (`slot == len` drops at the end).
///
/// Within one list the removal of the moved element shifts everything after it, so a slot
/// past the source position is one less once the element is gone.
///
/// # Example
///
/// ```rust
/// use map_config_sdk::editing::{drop_slot_to_index, reorder};
///
/// // Drop "A" in front of "D"
/// let to = drop_slot_to_index(0, 3, true);
/// assert_eq!(to, 2);
/// assert_eq!(reorder(&["A", "B", "C", "D"], 0, to), vec!["B", "C", "A", "D"]);
/// ```
pub fn drop_slot_to_index(from_index: usize, slot: usize, same_list: bool) -> usize {
    if same_list && from_index < slot {
        slot - 1
    } else {
        slot
    }
}

/// Where the selected index ends up after `reorder(list, from_index, to_index)`
pub fn adjust_index_for_reorder(selected: usize, from_index: usize, to_index: usize) -> usize {
    if selected == from_index {
        to_index
    } else if from_index < selected && selected <= to_index {
        selected - 1
    } else if to_index <= selected && selected < from_index {
        selected + 1
    } else {
        selected
    }
}

/// Where the selected index ends up after the element at `removed` is deleted.
///
/// `remaining` is the list length after removal. Removing the selected element selects the
/// one that took its place, or the new last element; `None` once the list is empty.
pub fn adjust_index_for_removal(selected: usize, removed: usize, remaining: usize) -> Option<usize> {
    if remaining == 0 {
        return None;
    }
    let index = if selected > removed {
        selected - 1
    } else {
        selected
    };
    Some(index.min(remaining - 1))
}

/// A selected feature group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub category: FeatureCategory,
    pub index: usize,
}

impl Selection {
    pub fn new(category: FeatureCategory, index: usize) -> Self {
        Self { category, index }
    }

    /// Follow a reorder inside `category`
    pub fn adjust_for_reorder(
        self,
        category: FeatureCategory,
        from_index: usize,
        to_index: usize,
    ) -> Selection {
        if self.category != category {
            return self;
        }
        Selection::new(
            category,
            adjust_index_for_reorder(self.index, from_index, to_index),
        )
    }

    /// Follow a move of the group at (`from`, `from_index`) to its final position (`to`, `to_index`)
    pub fn adjust_for_move(
        self,
        from: FeatureCategory,
        from_index: usize,
        to: FeatureCategory,
        to_index: usize,
    ) -> Selection {
        if from == to {
            return self.adjust_for_reorder(from, from_index, to_index);
        }
        if self.category == from {
            if self.index == from_index {
                return Selection::new(to, to_index);
            }
            if self.index > from_index {
                return Selection::new(from, self.index - 1);
            }
        } else if self.category == to && self.index >= to_index {
            return Selection::new(to, self.index + 1);
        }
        self
    }

    /// Follow the deletion of the group at (`category`, `removed`).
    ///
    /// `remaining` is the length of `category` after removal.
    pub fn adjust_for_removal(
        self,
        category: FeatureCategory,
        removed: usize,
        remaining: usize,
    ) -> Option<Selection> {
        if self.category != category {
            return Some(self);
        }
        adjust_index_for_removal(self.index, removed, remaining)
            .map(|index| Selection::new(category, index))
    }
}

/// Move a feature group to a final position, within its category or into the other one.
///
/// Returns the new document and where the group now sits, or `None` when `from_index` does not
/// name a group. A destination index past the end appends.
pub fn move_feature(
    doc: &Document,
    from: FeatureCategory,
    from_index: usize,
    to: FeatureCategory,
    to_index: usize,
) -> Option<(Document, Selection)> {
    let source = doc.features(from);
    if from_index >= source.len() {
        return None;
    }

    let mut moved = doc.clone();
    let position = if from == to {
        let to_index = to_index.min(source.len() - 1);
        *moved.features_mut(from) = reorder(source, from_index, to_index);
        Selection::new(to, to_index)
    } else {
        let destination = doc.features(to);
        let to_index = to_index.min(destination.len());
        let (new_from, new_to) = move_to_index(source, from_index, Some(destination), to_index);
        *moved.features_mut(from) = new_from;
        *moved.features_mut(to) = new_to.unwrap_or_default();
        Selection::new(to, to_index)
    };

    tracing::debug!(
        "Moved {} {} to {} {}",
        from.label(),
        from_index + 1,
        to.label(),
        position.index + 1
    );
    Some((moved, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatureGroup;

    #[test]
    fn test_reorder_noop_cases() {
        let list = vec!["A", "B", "C"];
        assert_eq!(reorder(&list, 1, 1), list);
        assert_eq!(reorder(&list, 3, 0), list);
        assert_eq!(reorder(&list, 0, 3), list);
    }

    #[test]
    fn test_same_list_move_arithmetic() {
        let list = vec!["A", "B", "C", "D"];
        assert_eq!(move_to_index(&list, 0, None, 2).0, vec!["B", "C", "A", "D"]);
        assert_eq!(move_to_index(&list, 3, None, 0).0, vec!["D", "A", "B", "C"]);
        assert_eq!(move_to_index(&list, 1, None, 99).0, vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_same_slice_as_destination_moves_within_list() {
        let list = vec!["A", "B", "C", "D"];
        let (from, to) = move_to_index(&list, 0, Some(&list[..]), 2);
        assert_eq!(from, vec!["B", "C", "A", "D"]);
        assert_eq!(to, None);

        // An equal but distinct list is still another list
        let other = list.clone();
        let (from, to) = move_to_index(&list, 0, Some(&other[..]), 0);
        assert_eq!(from, vec!["B", "C", "D"]);
        assert_eq!(to, Some(vec!["A", "A", "B", "C", "D"]));
    }

    #[test]
    fn test_drop_slots() {
        let list = vec!["A", "B", "C", "D"];
        // In front of "C", from either side
        assert_eq!(reorder(&list, 0, drop_slot_to_index(0, 2, true)), vec!["B", "A", "C", "D"]);
        assert_eq!(reorder(&list, 3, drop_slot_to_index(3, 2, true)), vec!["A", "B", "D", "C"]);
        // At the end
        assert_eq!(reorder(&list, 1, drop_slot_to_index(1, 4, true)), vec!["A", "C", "D", "B"]);
        assert_eq!(drop_slot_to_index(0, 2, false), 2);
    }

    #[test]
    fn test_move_across_category_appends() {
        let (from, to) = move_across_category(&["A", "B", "C"], 0, &["X"]);
        assert_eq!(from, vec!["B", "C"]);
        assert_eq!(to, vec!["X", "A"]);

        let (from, to) = move_across_category(&["A"], 4, &["X"]);
        assert_eq!(from, vec!["A"]);
        assert_eq!(to, vec!["X"]);
    }

    #[test]
    fn test_selection_follows_reorder() {
        // [A, B, C] with B selected; A moves to the end
        assert_eq!(adjust_index_for_reorder(1, 0, 2), 0);
        assert_eq!(adjust_index_for_reorder(0, 0, 2), 2);
        assert_eq!(adjust_index_for_reorder(0, 2, 0), 1);
        assert_eq!(adjust_index_for_reorder(3, 0, 2), 3);
    }

    #[test]
    fn test_selection_follows_cross_category_move() {
        use FeatureCategory::{General, Weather};

        let moved = Selection::new(Weather, 1).adjust_for_move(Weather, 1, General, 0);
        assert_eq!(moved, Selection::new(General, 0));

        let after = Selection::new(Weather, 2).adjust_for_move(Weather, 1, General, 0);
        assert_eq!(after, Selection::new(Weather, 1));

        let shifted = Selection::new(General, 0).adjust_for_move(Weather, 1, General, 0);
        assert_eq!(shifted, Selection::new(General, 1));

        let untouched = Selection::new(General, 0).adjust_for_move(Weather, 1, General, 3);
        assert_eq!(untouched, Selection::new(General, 0));
    }

    #[test]
    fn test_selection_after_removal() {
        assert_eq!(adjust_index_for_removal(2, 0, 3), Some(1));
        assert_eq!(adjust_index_for_removal(1, 1, 3), Some(1));
        assert_eq!(adjust_index_for_removal(2, 2, 2), Some(1));
        assert_eq!(adjust_index_for_removal(0, 0, 0), None);
        assert_eq!(
            Selection::new(FeatureCategory::General, 4).adjust_for_removal(
                FeatureCategory::Weather,
                0,
                1
            ),
            Some(Selection::new(FeatureCategory::General, 4))
        );
    }

    #[test]
    fn test_move_feature_between_categories() {
        let mut doc = Document::new();
        doc.weather_features = vec![FeatureGroup::new("wind"), FeatureGroup::new("rain")];
        doc.features = vec![FeatureGroup::new("airports")];

        let (moved, position) = move_feature(
            &doc,
            FeatureCategory::Weather,
            0,
            FeatureCategory::General,
            usize::MAX,
        )
        .unwrap();
        assert_eq!(position, Selection::new(FeatureCategory::General, 1));
        assert_eq!(moved.weather_features[0].key(), Some("rain"));
        assert_eq!(moved.features[1].key(), Some("wind"));
        assert_eq!(doc.weather_features.len(), 2);

        assert!(move_feature(&doc, FeatureCategory::General, 3, FeatureCategory::Weather, 0).is_none());
    }
}
