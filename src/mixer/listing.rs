use std::fmt;

use crate::services::audio::{AudioError, AudioSession};

/// Current audio settings of one session, read for display
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Owning process name
    pub process_name: Option<String>,
    /// Owning process id
    pub process_id: Option<u32>,
    /// Mute state
    pub muted: bool,
    /// Master volume
    pub volume: f32,
    /// Per-channel levels, in channel order
    pub channel_levels: Vec<f32>,
}

impl SessionState {
    /// Reads the session's current settings.
    ///
    /// # Errors
    /// Returns error if any platform call fails
    pub fn read<S: AudioSession>(session: &S) -> Result<Self, AudioError> {
        let info = session.info();
        Ok(Self {
            process_name: info.process_name().map(str::to_owned),
            process_id: info.process_id(),
            muted: session.mute()?,
            volume: session.master_volume()?,
            channel_levels: session.channel_volumes()?,
        })
    }
}

struct OrNone<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNone<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Process: {}", OrNone(&self.process_name))?;
        writeln!(f, "Process Id: {}", OrNone(&self.process_id))?;
        writeln!(f, "Current audio settings:")?;
        writeln!(f, "  Muted: {}", if self.muted { "Yes" } else { "No" })?;
        writeln!(f, "  Volume: {:.2}", self.volume)?;
        writeln!(f, "  Channels: {}", self.channel_levels.len())?;
        for (channel, level) in self.channel_levels.iter().enumerate() {
            writeln!(f, "    Channel {channel} Level: {level:.2}")?;
        }
        Ok(())
    }
}
