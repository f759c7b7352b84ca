mod log_format;
mod log_level;

pub use log_format::LogFormat;
pub use log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// General configuration settings.
///
/// Controls diagnostic logging; none of these change what the mixer does.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Logging level, overridden by `RUST_LOG`.
    pub log_level: LogLevel,

    /// Log output format, overridden by `APPMIXER_LOG_FORMAT`.
    pub log_format: LogFormat,

    /// Also write logs to a daily rotated file in the log directory.
    pub log_to_file: bool,
}
