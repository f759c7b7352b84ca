use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{Config, ConfigPaths};
use crate::{MixerError, Result};

impl Config {
    /// Loads the configuration from `path`, or from the default location.
    ///
    /// A missing file yields the default configuration, as does a default
    /// location that can't be resolved. The file is never created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The TOML content is invalid for the schema
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_default(ConfigPaths::main_config()),
        }
    }

    pub(crate) fn load_default(location: io::Result<PathBuf>) -> Result<Config> {
        match location {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                debug!(error = %e, "no default config location, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Loads the configuration file at `path`.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(MixerError::config_read(e, path)),
        };

        let config =
            toml::from_str(&content).map_err(|e| MixerError::toml_parse(e, Some(path)))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    /// Returns error if the TOML content is invalid for the schema
    pub fn from_toml(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| MixerError::toml_parse(e, None))
    }
}
