use std::{convert::Infallible, env::consts::OS};

use tracing::debug;

use crate::services::audio::{AudioError, AudioSession, SessionEnumerator, SessionInfo};

/// Backend for platforms without a per-application mixer binding
#[derive(Debug, Default)]
pub struct UnsupportedBackend;

impl UnsupportedBackend {
    /// Creates the backend.
    ///
    /// # Errors
    /// Never fails; the signature matches the Windows backend
    pub fn new() -> Result<Self, AudioError> {
        Ok(Self)
    }
}

/// Session type that can never be constructed
#[derive(Debug)]
pub struct NoSession(Infallible);

impl AudioSession for NoSession {
    fn info(&self) -> &SessionInfo {
        match self.0 {}
    }

    fn mute(&self) -> Result<bool, AudioError> {
        match self.0 {}
    }

    fn set_mute(&self, _muted: bool) -> Result<(), AudioError> {
        match self.0 {}
    }

    fn master_volume(&self) -> Result<f32, AudioError> {
        match self.0 {}
    }

    fn set_master_volume(&self, _level: f32) -> Result<(), AudioError> {
        match self.0 {}
    }

    fn channel_count(&self) -> Result<u32, AudioError> {
        match self.0 {}
    }

    fn channel_volume(&self, _channel: u32) -> Result<f32, AudioError> {
        match self.0 {}
    }

    fn set_channel_volume(&self, _channel: u32, _level: f32) -> Result<(), AudioError> {
        match self.0 {}
    }
}

impl SessionEnumerator for UnsupportedBackend {
    type Session = NoSession;

    fn sessions(&self) -> Result<Vec<NoSession>, AudioError> {
        debug!(os = OS, "no audio session backend for this platform");
        Err(AudioError::Unsupported(OS))
    }
}
