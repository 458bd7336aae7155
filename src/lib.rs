//! Map Config SDK - consistency engine for map configuration documents
//!
//! A map configuration document describes the feature groups of an aviation-weather map
//! client, the layers they draw, optional basemaps and the display strings for every
//! supported language. This crate provides:
//! - Typed models and JSON/YAML loading and saving
//! - Cross-reference collection (translation keys, layer references, layer usage)
//! - Validation of whole documents and single entities
//! - Translation synchronization and pruning
//! - Draft edit sessions and the reorder/move engine
//!
//! The engine is synchronous and never holds the document: callers pass the current
//! document in and receive a new one back.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "config")]
pub mod config;
pub mod editing;
pub mod model;
pub mod models;
pub mod references;
pub mod translations;
pub mod validation;

// Re-export commonly used types
#[cfg(feature = "config")]
pub use config::{ConfigError, EngineConfig};
pub use editing::{CommitError, CommitOutcome, DraftKey, DraftSession, EditOptions, Selection};
pub use model::{DocumentLoader, DocumentSaver, LoadError, SaveError};
pub use models::{
    BasemapEntity, Document, FeatureCategory, FeatureGroup, FeatureItem, Language, LayerConfig,
    LayerEntry, LayerType, Translations,
};
pub use references::{
    LayerUsage, collect_referenced_layer_ids, collect_translation_keys, get_layer_usage,
};
pub use translations::{prune_translations, sync_and_prune, sync_translations};
pub use validation::{ValidationOptions, ValidationReport, validate_document, validate_value};
