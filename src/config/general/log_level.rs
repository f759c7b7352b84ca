use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for diagnostic output.
///
/// User-facing listing and action lines are always printed; this only
/// controls the `tracing` events emitted alongside them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only failures.
    Error,

    /// Problems that don't stop the run (default level).
    #[default]
    Warn,

    /// Every mixer change as it is applied.
    Info,

    /// Selection and enumeration details.
    Debug,

    /// Everything.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
