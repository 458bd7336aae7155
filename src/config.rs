//! Engine configuration file support
//!
//! Handles parsing of `.map-config.toml` configuration files and
//! environment variable overrides.

use crate::editing::EditOptions;
use crate::validation::ValidationOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".map-config.toml";

/// Environment variable for translation auto-sync on feature save
pub const ENV_AUTO_SYNC: &str = "MAP_CONFIG_AUTO_SYNC";

/// Environment variable for pruning after a bulk sync
pub const ENV_PRUNE_AFTER_SYNC: &str = "MAP_CONFIG_PRUNE_AFTER_SYNC";

/// Environment variable for strict layer reference checks
pub const ENV_STRICT_REFERENCES: &str = "MAP_CONFIG_STRICT_REFERENCES";

/// Environment variable for pretty-printed output
pub const ENV_PRETTY: &str = "MAP_CONFIG_PRETTY";

/// Error type for configuration handling
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialization(String),
}

/// Translation configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationsSection {
    /// Add a feature group's missing translation keys whenever it is saved
    #[serde(default = "default_true")]
    pub auto_sync_on_save: bool,

    /// Drop unused keys after a bulk sync
    #[serde(default = "default_true")]
    pub prune_after_sync: bool,
}

impl Default for TranslationsSection {
    fn default() -> Self {
        Self {
            auto_sync_on_save: true,
            prune_after_sync: true,
        }
    }
}

/// Validation configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationSection {
    /// Report referenced-but-undefined layers as errors
    #[serde(default)]
    pub strict_layer_references: bool,
}

/// Output configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
///
/// Represents the `.map-config.toml` configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub translations: TranslationsSection,

    #[serde(default)]
    pub validation: ValidationSection,

    #[serde(default)]
    pub output: OutputSection,
}

impl EngineConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a working directory
    ///
    /// Looks for `.map-config.toml` in the directory and falls back to defaults if it is not
    /// there. Environment overrides are applied either way.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::Io(format!("Failed to read config: {}", e)))?;
            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a working directory
    pub fn save(&self, dir: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        std::fs::write(dir.join(CONFIG_FILENAME), content)
            .map_err(|e| ConfigError::Io(format!("Failed to write config: {}", e)))
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides looked up by variable name; unparseable values are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let flag = |name: &str| lookup(name).and_then(|value| parse_flag(&value));

        if let Some(value) = flag(ENV_AUTO_SYNC) {
            self.translations.auto_sync_on_save = value;
        }
        if let Some(value) = flag(ENV_PRUNE_AFTER_SYNC) {
            self.translations.prune_after_sync = value;
        }
        if let Some(value) = flag(ENV_STRICT_REFERENCES) {
            self.validation.strict_layer_references = value;
        }
        if let Some(value) = flag(ENV_PRETTY) {
            self.output.pretty = value;
        }
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            strict_layer_references: self.validation.strict_layer_references,
        }
    }

    pub fn edit_options(&self) -> EditOptions {
        EditOptions {
            auto_sync_translations: self.translations.auto_sync_on_save,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# Map configuration engine settings

[translations]
# Add a feature group's missing translation keys when it is saved
auto_sync_on_save = true

# Drop unused translation keys after a bulk sync
prune_after_sync = true

[validation]
# Report item references to undefined layers as errors instead of warnings
strict_layer_references = false

[output]
# Pretty-print JSON output
pretty = true
"#
}
