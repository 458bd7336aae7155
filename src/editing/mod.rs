//! Editing: draft sessions and the reorder/move engine
//!
//! Entities are created and changed through drafts held by a [`DraftSession`]; the committed
//! document is only replaced when a valid draft is committed. Lists are reordered with pure
//! functions that also translate externally held selection indices.

pub mod entity;
pub mod error;
pub mod reorder;
pub mod session;

pub use entity::{EditOptions, EditableEntity};
pub use error::CommitError;
pub use reorder::{
    Selection, adjust_index_for_removal, adjust_index_for_reorder, drop_slot_to_index,
    move_across_category, move_feature, move_to_index, reorder,
};
pub use session::{CommitOutcome, DraftKey, DraftSession};
