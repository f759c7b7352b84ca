/// Errors that can occur while talking to the platform audio subsystem
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// The audio subsystem could not be initialised
    #[error("Failed to initialize audio subsystem: {0}")]
    InitializationFailed(String),

    /// Enumerating the mixer's sessions failed
    #[error("Failed to enumerate audio sessions: {0}")]
    EnumerationFailed(String),

    /// A call against a single session failed
    #[error("Audio session operation '{operation}' failed: {details}")]
    OperationFailed {
        /// Name of the collaborator call that failed
        operation: &'static str,
        /// Platform error details
        details: String,
    },

    /// Per-application mixer control is not available on this platform
    #[error("Per-application audio sessions are not supported on {0}")]
    Unsupported(&'static str),
}

impl AudioError {
    /// Wraps a platform failure for the named session call.
    pub fn operation(operation: &'static str, details: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation,
            details: details.to_string(),
        }
    }
}
