use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_DIR: &str = "appmixer";

/// Utility struct for locating configuration and log paths
///
/// Honours `XDG_CONFIG_HOME` first, then the Windows `APPDATA` and
/// `LOCALAPPDATA` folders, then falls back to `$HOME`.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path for the application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Then `APPDATA`
    /// - Falls back to `$HOME/.config`
    /// - Appends "appmixer" to the base config directory
    ///
    /// # Errors
    /// Returns an error if none of those environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("APPDATA"))
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "None of XDG_CONFIG_HOME, APPDATA or HOME environment variables found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(APP_DIR))
    }

    /// Returns the path to the main configuration file
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the application log directory
    ///
    /// Uses `LOCALAPPDATA/appmixer/logs`, falling back to
    /// `$HOME/.appmixer/logs`. Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if no base directory is known or it cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = match env::var("LOCALAPPDATA") {
            Ok(local) => PathBuf::from(local).join(APP_DIR),
            Err(_) => env::var("HOME")
                .map(|home| PathBuf::from(home).join(format!(".{APP_DIR}")))
                .map_err(|_| {
                    Error::new(
                        ErrorKind::NotFound,
                        "Neither LOCALAPPDATA nor HOME environment variable found",
                    )
                })?,
        }
        .join("logs");

        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }
}
