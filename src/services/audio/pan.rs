use std::fmt;

use super::VolumeError;

/// Stereo channel levels realising a pan position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelLevels {
    /// Level for channel 0
    pub left: f32,
    /// Level for channel 1
    pub right: f32,
}

/// Convert a pan position to left/right channel levels.
///
/// The channel on the panned-to side stays at full level and the
/// opposite channel is attenuated linearly:
///
/// | pan  | left | right |
/// |------|------|-------|
/// | -1.0 | 1.0  | 0.0   |
/// | -0.5 | 1.0  | 0.5   |
/// |  0.0 | 1.0  | 1.0   |
/// |  0.5 | 0.5  | 1.0   |
/// |  1.0 | 0.0  | 1.0   |
///
/// Only meaningful for `pan` in `[-1.0, 1.0]`.
pub fn pan_to_channel_levels(pan: f32) -> ChannelLevels {
    let other = 1.0 - pan.abs();
    if pan < 0.0 {
        ChannelLevels {
            left: 1.0,
            right: other,
        }
    } else {
        ChannelLevels {
            left: other,
            right: 1.0,
        }
    }
}

/// Stereo pan position, -1.0 (full left) through 1.0 (full right)
///
/// Displays as `left (-1.0)`, `center (0.0)` or `right (1.0)` for the
/// named positions and as the bare number otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanPosition(f32);

impl PanPosition {
    /// Full left
    pub const LEFT: Self = Self(-1.0);
    /// Center
    pub const CENTER: Self = Self(0.0);
    /// Full right
    pub const RIGHT: Self = Self(1.0);

    /// Create a pan position.
    ///
    /// # Errors
    /// Returns error if `pan` is outside -1.0 to 1.0 or NaN
    pub fn new(pan: f32) -> Result<Self, VolumeError> {
        if !(-1.0..=1.0).contains(&pan) {
            return Err(VolumeError::InvalidPan { pan });
        }
        Ok(Self(pan))
    }

    /// The raw position
    pub fn value(self) -> f32 {
        self.0
    }

    /// Channel levels for this position
    pub fn channel_levels(self) -> ChannelLevels {
        pan_to_channel_levels(self.0)
    }

    fn name(self) -> Option<&'static str> {
        if self == Self::LEFT {
            Some("left")
        } else if self == Self::CENTER {
            Some("center")
        } else if self == Self::RIGHT {
            Some("right")
        } else {
            None
        }
    }
}

impl fmt::Display for PanPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({:?})", self.0),
            None => write!(f, "{:?}", self.0),
        }
    }
}
