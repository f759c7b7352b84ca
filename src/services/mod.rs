/// Per-application audio session control
pub mod audio;

pub use audio::{
    AudioError, AudioSession, PanPosition, SelectionCriteria, SelectionError, SessionEnumerator,
    SessionInfo, SessionProcess, VolumeLevel,
};
