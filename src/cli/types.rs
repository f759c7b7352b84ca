use thiserror::Error;

use crate::services::audio::VolumeError;

/// Invalid combinations or values on the command line.
///
/// Detected before any session is enumerated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    /// More than one of `--pan`, `--left`, `--right` and `--center`.
    #[error("Choose at most one of pan, left, right, and center actions")]
    ConflictingPan,

    /// Both `--mute` and `--unmute`.
    #[error("Choose at most one of mute and unmute actions")]
    ConflictingMute,

    /// A pan or volume value outside its range.
    #[error(transparent)]
    OutOfRange(#[from] VolumeError),
}
