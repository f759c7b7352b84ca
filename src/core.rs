use std::{fmt, io, path::Path};

use thiserror::Error;

use crate::{
    cli::UsageError,
    services::audio::{AudioError, SelectionError},
};

/// Error types for appmixer.
///
/// Every failure that ends a run surfaces as one of these; the binary
/// prints it to stderr and exits non-zero.
#[derive(Error, Debug)]
pub enum MixerError {
    /// Invalid or conflicting command line options
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Session selection constraints could not be met
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Platform audio subsystem failure
    #[error(transparent)]
    Audio(#[from] AudioError),

    /// Configuration file could not be read
    #[error("failed to read config '{path}': {details}")]
    ConfigRead {
        /// Path of the config file
        path: String,
        /// I/O error details
        details: String,
    },

    /// Configuration file is not valid TOML for the schema
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParse {
        /// File path or "string"
        location: String,
        /// Parse error details
        details: String,
    },

    /// Logging could not be set up
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for appmixer operations.
pub type Result<T> = std::result::Result<T, MixerError>;

impl MixerError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        MixerError::TomlParse {
            location: path.map_or_else(|| "string".to_string(), |p| p.display().to_string()),
            details: error.to_string(),
        }
    }

    /// Creates a config read error for `path`.
    pub fn config_read(error: impl fmt::Display, path: &Path) -> Self {
        MixerError::ConfigRead {
            path: path.display().to_string(),
            details: error.to_string(),
        }
    }
}
