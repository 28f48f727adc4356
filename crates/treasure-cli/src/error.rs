//! Treasure CLI — error types.

use thiserror::Error;

/// An environment variable held a value the runner cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    /// The offending variable.
    pub var: &'static str,
    /// The value it held.
    pub value: String,
    /// What was expected instead.
    pub reason: String,
}

impl ConfigError {
    /// Creates an error for `var` holding `value`.
    #[must_use]
    pub fn new(var: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            var,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Startup and runtime errors for the runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration variable is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The result could not be encoded as JSON.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Writing to the terminal failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
