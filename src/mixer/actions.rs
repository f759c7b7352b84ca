use std::io::Write;

use tracing::{debug, info};

use super::{Console, SessionState};
use crate::{
    Result,
    services::audio::{AudioSession, PanPosition, SelectedSession, VolumeLevel},
};

/// Requested change to the mute state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MuteRequest {
    /// Leave the mute state alone
    #[default]
    Unchanged,
    /// Mute the session
    Mute,
    /// Unmute the session
    Unmute,
}

/// Actions to take on every selected session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionPlan {
    /// Print process info and current audio settings
    pub list: bool,
    /// Pan position to apply to stereo sessions
    pub pan: Option<PanPosition>,
    /// Master volume to apply
    pub volume: Option<VolumeLevel>,
    /// Mute change to apply
    pub mute: MuteRequest,
    /// Suppress identification and action lines
    pub quiet: bool,
}

impl ActionPlan {
    /// Whether any listing or mutation was requested.
    pub fn has_action(&self) -> bool {
        self.list
            || self.pan.is_some()
            || self.volume.is_some()
            || self.mute != MuteRequest::Unchanged
    }
}

/// Outcome of applying a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Sessions processed
    pub sessions: usize,
    /// Sessions whose pan action was skipped for not being stereo
    pub pan_skipped: usize,
}

/// Apply `plan` to each selected session in order.
///
/// Sessions that are not stereo are skipped for panning with a warning;
/// their other actions still run. A failing platform call aborts the
/// remaining run without undoing earlier changes.
///
/// # Errors
/// Returns error if a platform call or a console write fails
pub fn apply<S, O, E>(
    selected: &[SelectedSession<'_, S>],
    plan: &ActionPlan,
    console: &mut Console<O, E>,
) -> Result<ApplyReport>
where
    S: AudioSession,
    O: Write,
    E: Write,
{
    let mut report = ApplyReport::default();

    for SelectedSession {
        display_index,
        session,
    } in selected
    {
        let name = session.info().display_name.as_str();
        debug!(index = display_index, session = name, "processing session");

        if !plan.quiet {
            console.line(format_args!("#{display_index} \"{name}\""))?;
        }

        if plan.list {
            let state = SessionState::read(*session)?;
            console.line(&state)?;
        }

        if let Some(pan) = plan.pan {
            if !apply_pan(*session, pan, plan.quiet, console)? {
                report.pan_skipped += 1;
            }
        }

        if let Some(volume) = plan.volume {
            if !plan.quiet {
                console.notice(format_args!("Setting volume to {:?}", volume.value()))?;
            }
            info!(session = name, volume = volume.value(), "setting master volume");
            session.set_master_volume(volume.value())?;
        }

        match plan.mute {
            MuteRequest::Mute => set_mute(*session, true, plan.quiet, console)?,
            MuteRequest::Unmute => set_mute(*session, false, plan.quiet, console)?,
            MuteRequest::Unchanged => {}
        }

        report.sessions += 1;
    }

    console.flush()?;
    Ok(report)
}

/// Returns `false` when the session was skipped for not being stereo.
fn apply_pan<S, O, E>(
    session: &S,
    pan: PanPosition,
    quiet: bool,
    console: &mut Console<O, E>,
) -> Result<bool>
where
    S: AudioSession,
    O: Write,
    E: Write,
{
    let name = session.info().display_name.as_str();
    let channels = session.channel_count()?;
    if channels != 2 {
        debug!(session = name, channels, "session is not stereo, skipping pan");
        console.notice(format_args!(
            "Session \"{name}\" doesn't have 2 channels, so can't pan. Skipping it."
        ))?;
        return Ok(false);
    }

    let levels = pan.channel_levels();
    if !quiet {
        console.notice(format_args!(
            "Panning to {pan} [{:?}, {:?}]",
            levels.left, levels.right
        ))?;
    }
    info!(
        session = name,
        pan = pan.value(),
        left = levels.left,
        right = levels.right,
        "setting channel levels"
    );
    session.set_channel_volume(0, levels.left)?;
    session.set_channel_volume(1, levels.right)?;
    Ok(true)
}

fn set_mute<S, O, E>(
    session: &S,
    muted: bool,
    quiet: bool,
    console: &mut Console<O, E>,
) -> Result<()>
where
    S: AudioSession,
    O: Write,
    E: Write,
{
    if !quiet {
        console.notice(if muted { "Muting" } else { "Unmuting" })?;
    }
    info!(session = session.info().display_name.as_str(), muted, "setting mute");
    session.set_mute(muted)?;
    Ok(())
}
