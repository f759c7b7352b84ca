use super::AudioError;

/// Identity of the process that owns an audio session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProcess {
    /// Process id
    pub id: u32,
    /// Executable name (e.g. `firefox.exe`), when it could be queried
    pub name: Option<String>,
}

/// Metadata captured for a session when the snapshot was taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Name shown in the mixer column
    pub display_name: String,
    /// Owning process, `None` for sessions without one (system sounds)
    pub process: Option<SessionProcess>,
}

impl SessionInfo {
    /// Creates metadata for a session owned by `process`.
    pub fn new(display_name: impl Into<String>, process: Option<SessionProcess>) -> Self {
        Self {
            display_name: display_name.into(),
            process,
        }
    }

    /// Name of the owning process, if any.
    pub fn process_name(&self) -> Option<&str> {
        self.process.as_ref().and_then(|p| p.name.as_deref())
    }

    /// Id of the owning process, if any.
    pub fn process_id(&self) -> Option<u32> {
        self.process.as_ref().map(|p| p.id)
    }
}

/// A live per-application audio session.
///
/// Implemented by the platform adapter on top of the native session,
/// simple-volume and channel-volume interfaces. Setters take `&self`
/// because the native handles are shared references to mixer state.
pub trait AudioSession {
    /// Snapshot metadata for the session
    fn info(&self) -> &SessionInfo;

    /// Current mute state
    ///
    /// # Errors
    /// Returns error if the platform call fails
    fn mute(&self) -> Result<bool, AudioError>;

    /// Set the mute state
    ///
    /// # Errors
    /// Returns error if the platform call fails
    fn set_mute(&self, muted: bool) -> Result<(), AudioError>;

    /// Current master volume (0.0 to 1.0)
    ///
    /// # Errors
    /// Returns error if the platform call fails
    fn master_volume(&self) -> Result<f32, AudioError>;

    /// Set the master volume (0.0 to 1.0)
    ///
    /// # Errors
    /// Returns error if the platform call fails
    fn set_master_volume(&self, level: f32) -> Result<(), AudioError>;

    /// Number of channels in the session's stream format
    ///
    /// # Errors
    /// Returns error if the platform call fails
    fn channel_count(&self) -> Result<u32, AudioError>;

    /// Level of one channel (0.0 to 1.0)
    ///
    /// # Errors
    /// Returns error if the channel doesn't exist or the platform call fails
    fn channel_volume(&self, channel: u32) -> Result<f32, AudioError>;

    /// Set the level of one channel (0.0 to 1.0)
    ///
    /// # Errors
    /// Returns error if the channel doesn't exist or the platform call fails
    fn set_channel_volume(&self, channel: u32, level: f32) -> Result<(), AudioError>;

    /// Read every channel level in channel order.
    ///
    /// # Errors
    /// Returns error if any platform call fails
    fn channel_volumes(&self) -> Result<Vec<f32>, AudioError> {
        (0..self.channel_count()?)
            .map(|channel| self.channel_volume(channel))
            .collect()
    }
}

/// Source of audio session snapshots
pub trait SessionEnumerator {
    /// Session type produced by this enumerator
    type Session: AudioSession;

    /// Take a snapshot of all sessions, in platform order.
    ///
    /// # Errors
    /// Returns error if the mixer cannot be queried
    fn sessions(&self) -> Result<Vec<Self::Session>, AudioError>;
}
