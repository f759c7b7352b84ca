//! Command-line interface.
//!
//! Parses the flag surface, validates it into an [`Invocation`] and runs it
//! through [`CliService`] against an audio backend.

mod args;
pub mod formatting;
mod invocation;
mod service;
mod types;


pub use args::Args;
pub use invocation::Invocation;
pub use service::{CliService, NO_ACTION_ADVISORY};
pub use types::UsageError;
