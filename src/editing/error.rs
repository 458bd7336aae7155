//! Errors returned by draft sessions

use crate::validation::ValidationReport;

/// Error type for draft session transitions
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    /// No draft exists for the key
    #[error("No draft is being edited for this entity")]
    NoDraft,

    /// The draft failed validation; the draft is kept
    #[error("Draft is invalid: {}", .0.errors.join("; "))]
    Invalid(ValidationReport),

    /// The draft passed validation but does not convert to the entity type
    #[error("Draft could not be converted: {0}")]
    Deserialize(String),

    /// An entity could not be converted into a draft
    #[error("Entity could not be converted to a draft: {0}")]
    Serialize(String),

    /// The index does not name an entity in the committed document
    #[error("No entity at index {0}")]
    MissingEntity(usize),
}

impl CommitError {
    /// Validation report of a refused commit
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            CommitError::Invalid(report) => Some(report),
            _ => None,
        }
    }
}
