//! Models module for the SDK
//!
//! Defines the typed structures of a map configuration document. Field names follow the
//! JSON form used by the map client (`camelCase`), and optional fields are omitted from
//! serialized output instead of being written as `null`.

pub mod basemap;
pub mod document;
pub mod enums;
pub mod feature;
pub mod intl;
pub mod layer;

pub use basemap::{BasemapEntity, Thumbnail};
pub use document::Document;
pub use enums::*;
pub use feature::{FeatureGroup, FeatureItem};
pub use intl::{Dictionary, Translations};
pub use layer::{LayerConfig, LayerEntry, LayerOptions, OptionValue};
