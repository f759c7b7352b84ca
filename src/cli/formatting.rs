//! Formatting utilities for terminal output.

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a fatal error line as `Error: <message>`.
///
/// The prefix is styled only when `color` is set, so redirected stderr
/// stays plain text.
pub fn format_failure(message: &str, color: bool) -> String {
    let prefix = if color {
        format_error("Error")
    } else {
        "Error".to_string()
    };
    format!("{prefix}: {message}")
}
