use super::{Args, UsageError};
use crate::{
    config::DefaultsConfig,
    mixer::{ActionPlan, MuteRequest},
    services::audio::{PanPosition, SelectionCriteria, VolumeLevel},
};

/// A validated run: which sessions to pick and what to do with them
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Session selection
    pub criteria: SelectionCriteria,
    /// Actions to apply to each selected session
    pub plan: ActionPlan,
    /// No action was requested, so listing was turned on
    pub defaulted_to_list: bool,
}

impl Invocation {
    /// Validate the command line and build the run.
    ///
    /// Configured defaults can only switch `quiet` and `single` on. When no
    /// action is requested the run lists the matching sessions instead.
    ///
    /// # Errors
    ///
    /// Returns `UsageError` if:
    /// - More than one of pan, left, right and center is given
    /// - Both mute and unmute are given
    /// - The pan value is outside -1.0 to 1.0
    /// - The volume value is outside 0.0 to 1.0
    pub fn from_args(args: &Args, defaults: &DefaultsConfig) -> Result<Self, UsageError> {
        let pan_directives = [args.pan.is_some(), args.left, args.right, args.center];
        if pan_directives.iter().filter(|&&set| set).count() > 1 {
            return Err(UsageError::ConflictingPan);
        }

        if args.mute && args.unmute {
            return Err(UsageError::ConflictingMute);
        }

        let pan = match (args.pan, args.left, args.right, args.center) {
            (Some(pan), ..) => Some(PanPosition::new(pan)?),
            (None, true, _, _) => Some(PanPosition::LEFT),
            (None, _, true, _) => Some(PanPosition::RIGHT),
            (None, _, _, true) => Some(PanPosition::CENTER),
            (None, false, false, false) => None,
        };

        let volume = args.vol.map(VolumeLevel::new).transpose()?;

        let mute = if args.mute {
            MuteRequest::Mute
        } else if args.unmute {
            MuteRequest::Unmute
        } else {
            MuteRequest::Unchanged
        };

        let mut plan = ActionPlan {
            list: args.list,
            pan,
            volume,
            mute,
            quiet: args.quiet || defaults.quiet,
        };

        let defaulted_to_list = !plan.has_action();
        if defaulted_to_list {
            plan.list = true;
        }

        let criteria = SelectionCriteria {
            display_name_contains: args.display_name_contains.clone(),
            process_name: args.process.clone(),
            process_id: args.pid,
            only_index: args.index,
            require_exactly_one: args.single || defaults.single,
        };

        Ok(Self {
            criteria,
            plan,
            defaulted_to_list,
        })
    }
}
