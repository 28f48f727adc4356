//! Narrative error types.

use thiserror::Error;

/// A stage could not be completed; the run ends in failure.
///
/// The display form is the bare narrative message, because it is written
/// verbatim into the terminal error entry of the story log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NarrativeFailure {
    /// The stage that raised the failure.
    pub stage: u8,
    /// Human-readable narrative message.
    pub message: String,
}

impl NarrativeFailure {
    /// Creates a failure raised by `stage`.
    #[must_use]
    pub fn new(stage: u8, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}
