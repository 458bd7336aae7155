//! Document loading and saving functionality
//!
//! Converts between configuration text (JSON or YAML) and the typed document model.
//! Reading and writing files is left to the caller.

pub mod loader;
pub mod saver;

pub use loader::{DocumentLoadResult, DocumentLoader, LoadError};
pub use saver::{DocumentSaver, SaveError};
