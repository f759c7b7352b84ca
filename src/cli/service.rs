use std::io::Write;

use tracing::{debug, info};

use super::{Args, Invocation};
use crate::{
    Result,
    config::DefaultsConfig,
    mixer::{self, ApplyReport, Console},
    services::audio::{SessionEnumerator, select},
};

/// Advisory printed when no action flag was given
pub const NO_ACTION_ADVISORY: &str = "No action selected; listing";

/// Runs one invocation against an audio backend.
///
/// Validation happens before the backend is touched. The session snapshot
/// is taken once and every selection and action works on it.
pub struct CliService<B> {
    backend: B,
    defaults: DefaultsConfig,
}

impl<B: SessionEnumerator> CliService<B> {
    /// Creates a service over `backend` with configured default toggles.
    pub fn new(backend: B, defaults: DefaultsConfig) -> Self {
        CliService { backend, defaults }
    }

    /// Validates `args` and runs them.
    ///
    /// # Errors
    /// Returns `MixerError::Usage` for invalid arguments, before any
    /// session is enumerated, and otherwise the errors of [`Self::run`]
    pub fn execute<O: Write, E: Write>(
        &self,
        args: &Args,
        console: &mut Console<O, E>,
    ) -> Result<ApplyReport> {
        let invocation = Invocation::from_args(args, &self.defaults)?;
        self.run(&invocation, console)
    }

    /// Enumerates sessions, selects the matching ones and applies the plan.
    ///
    /// # Errors
    /// Returns error if enumeration fails, the selection constraints can't
    /// be met, or a platform call fails while applying
    pub fn run<O: Write, E: Write>(
        &self,
        invocation: &Invocation,
        console: &mut Console<O, E>,
    ) -> Result<ApplyReport> {
        if invocation.defaulted_to_list {
            console.notice(NO_ACTION_ADVISORY)?;
        }

        let sessions = self.backend.sessions()?;
        debug!(count = sessions.len(), criteria = ?invocation.criteria, "took session snapshot");

        let selected = select(&sessions, &invocation.criteria)?;
        info!(matched = selected.len(), "selected sessions");

        let report = mixer::apply(&selected, &invocation.plan, console)?;
        debug!(?report, "applied actions");
        Ok(report)
    }
}
