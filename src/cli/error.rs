//! CLI-specific error types

use crate::config::ConfigError;
use crate::model::{LoadError, SaveError};
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation failed with {0} error(s)")]
    ValidationFailed(usize),

    #[error("Load error: {0}")]
    LoadError(#[from] LoadError),

    #[error("Save error: {0}")]
    SaveError(#[from] SaveError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}
