use std::path::PathBuf;

use clap::Parser;

const SEARCHES: &str = "Application Searches";
const ACTIONS: &str = "Actions";
const TOGGLES: &str = "Toggles";

/// Command line arguments.
///
/// Searches select the applications to show or change; actions are taken
/// on every matching application. Conflicts between actions and value
/// ranges are checked by [`Invocation::from_args`], not by clap.
///
/// [`Invocation::from_args`]: super::Invocation::from_args
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "appmixer", version)]
#[command(about = "Set the per-application audio mixer volume, mute and pan")]
pub struct Args {
    /// Search for PART in the mixer column's display name
    #[arg(long, short = 'd', value_name = "PART", help_heading = SEARCHES)]
    pub display_name_contains: Option<String>,

    /// Find the process WHATEVER_EXE (case-insensitive)
    #[arg(long, short = 'P', value_name = "WHATEVER_EXE", help_heading = SEARCHES)]
    pub process: Option<String>,

    /// Find the process with id PID
    #[arg(long, value_name = "PID", help_heading = SEARCHES)]
    pub pid: Option<u32>,

    /// Use the Ith matching application, numbered starting at 0
    #[arg(long, short = 'i', value_name = "I", help_heading = SEARCHES)]
    pub index: Option<usize>,

    /// Show process info and current audio settings
    #[arg(long, short = 'l', help_heading = ACTIONS)]
    pub list: bool,

    /// Pan the audio to POS (-1.0 [left] to 1.0 [right])
    #[arg(
        long,
        short = 'p',
        value_name = "POS",
        allow_negative_numbers = true,
        help_heading = ACTIONS
    )]
    pub pan: Option<f32>,

    /// Pan the audio left
    #[arg(long, help_heading = ACTIONS)]
    pub left: bool,

    /// Pan the audio right
    #[arg(long, help_heading = ACTIONS)]
    pub right: bool,

    /// Pan the audio to the center
    #[arg(long, help_heading = ACTIONS)]
    pub center: bool,

    /// Set the audio level to VOL (0.0 to 1.0)
    #[arg(
        long,
        short = 'v',
        value_name = "VOL",
        allow_negative_numbers = true,
        help_heading = ACTIONS
    )]
    pub vol: Option<f32>,

    /// Mute the application
    #[arg(long, short = 'm', help_heading = ACTIONS)]
    pub mute: bool,

    /// Unmute the application
    #[arg(long, short = 'u', help_heading = ACTIONS)]
    pub unmute: bool,

    /// Treat no match or multiple matches as an error (by default adjust whatever matches)
    #[arg(long, short = 's', help_heading = TOGGLES)]
    pub single: bool,

    /// Don't output any messages about adjustment actions
    #[arg(long, short = 'q', help_heading = TOGGLES)]
    pub quiet: bool,

    /// Read configuration from FILE instead of the default location
    #[arg(long, value_name = "FILE", help_heading = TOGGLES)]
    pub config: Option<PathBuf>,
}
