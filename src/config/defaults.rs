use serde::{Deserialize, Serialize};

/// Toggles applied to every invocation.
///
/// These can only switch a toggle on; a command line flag never turns a
/// configured default off.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Behave as if `--quiet` was always given.
    pub quiet: bool,

    /// Behave as if `--single` was always given.
    pub single: bool,
}
