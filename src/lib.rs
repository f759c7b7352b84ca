//! appmixer - per-application audio mixer control from the command line.
//!
//! Enumerates the audio sessions of the system mixer, narrows them with
//! name, process and index searches, and lists, pans, sets the volume of,
//! or mutes the matching applications.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use appmixer::{
//!     cli::{Args, CliService},
//!     config::Config,
//!     mixer::Console,
//!     services::audio::backend::SystemBackend,
//! };
//!
//! let args = Args {
//!     process: Some("firefox.exe".to_string()),
//!     vol: Some(0.5),
//!     ..Args::default()
//! };
//! let config = Config::default();
//! let service = CliService::new(SystemBackend::new()?, config.defaults);
//! let mut console = Console::new(std::io::stdout(), std::io::stderr());
//! service.execute(&args, &mut console)?;
//! # Ok::<(), appmixer::MixerError>(())
//! ```

/// Command-line argument parsing, validation and execution.
pub mod cli;

/// Configuration schema and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Applying actions to selected sessions.
pub mod mixer;

/// Platform audio collaborators and session selection.
pub mod services;

/// Diagnostic logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{MixerError, Result};
