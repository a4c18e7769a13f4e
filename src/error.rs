//! Startup errors for the terminal front end.

use derive_more::{Display, Error};

/// The host cannot run the interactive interface (no terminal attached).
#[derive(Debug, Clone, Display, Error)]
#[display("Environment unsupported: {} at {}:{}", message, file, line)]
pub struct EnvironmentError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EnvironmentError {
    /// Creates a new environment error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Fails unless both stdin and stdout are interactive terminals.
pub fn check_environment() -> Result<(), EnvironmentError> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return Err(EnvironmentError::new("stdin is not an interactive terminal"));
    }
    if !std::io::stdout().is_terminal() {
        return Err(EnvironmentError::new("stdout is not an interactive terminal"));
    }
    Ok(())
}
