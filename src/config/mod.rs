//! Configuration schema and loading.
//!
//! The configuration file is optional. All fields have defaults, so a
//! missing file, an empty file and a partial file are all valid.

mod defaults;
mod general;
mod loading;
mod paths;


pub use defaults::DefaultsConfig;
pub use general::{GeneralConfig, LogFormat, LogLevel};
pub use paths::ConfigPaths;

use serde::{Deserialize, Serialize};

/// Main configuration structure for appmixer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Default toggles for every invocation.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}
