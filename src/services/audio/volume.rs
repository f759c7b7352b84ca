/// Errors for out-of-range level values
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum VolumeError {
    /// Master volume outside 0.0 to 1.0
    #[error("Volume value not in the range 0.0 to 1.0")]
    InvalidVolume {
        /// Rejected value
        volume: f32,
    },

    /// Pan position outside -1.0 to 1.0
    #[error("Pan value not in the range -1.0 to 1.0")]
    InvalidPan {
        /// Rejected value
        pan: f32,
    },
}

/// Session master volume, validated to 0.0 (silent) through 1.0 (full)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeLevel(f32);

impl VolumeLevel {
    /// Silent
    pub const MIN: Self = Self(0.0);
    /// Full level
    pub const MAX: Self = Self(1.0);

    /// Create a volume level.
    ///
    /// # Errors
    /// Returns error if `volume` is outside 0.0 to 1.0 or NaN
    pub fn new(volume: f32) -> Result<Self, VolumeError> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(VolumeError::InvalidVolume { volume });
        }
        Ok(Self(volume))
    }

    /// The raw scalar handed to the mixer
    pub fn value(self) -> f32 {
        self.0
    }
}
