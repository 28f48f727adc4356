//! The outcome of a run.

use serde::Serialize;
use treasure_core::story::{EntryKind, StoryEntry};
use uuid::Uuid;

/// Read-only outcome of one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Identifier of the run, as recorded in its tracing span.
    pub run_id: Uuid,
    /// Whether all six stages completed.
    pub success: bool,
    /// Every entry written during the run, in order.
    pub story_log: Vec<StoryEntry>,
    /// Acquired item names, in acquisition order.
    pub inventory: Vec<String>,
    /// The last stage entered (6 on success).
    pub final_stage: u8,
    /// The failure message of a failed run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl RunResult {
    /// The closing entry of the log.
    #[must_use]
    pub fn last_entry(&self) -> Option<&StoryEntry> {
        self.story_log.last()
    }

    /// Entries of the given kind, in order.
    pub fn entries_of(&self, kind: EntryKind) -> impl Iterator<Item = &StoryEntry> {
        self.story_log.iter().filter(move |entry| entry.kind() == kind)
    }

    /// Whether `name` was acquired during the run.
    #[must_use]
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item == name)
    }
}
