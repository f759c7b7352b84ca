//! Applies the requested actions to the selected sessions.
//!
//! Runs strictly after selection: each session is identified, optionally
//! listed, then panned, given a master volume and muted or unmuted, in
//! that order.

mod actions;
mod console;
mod listing;


pub use actions::{ActionPlan, ApplyReport, MuteRequest, apply};
pub use console::Console;
pub use listing::SessionState;
