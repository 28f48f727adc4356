//! Story entries: the unit of narrative output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a story entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Welcome text written before the first stage.
    Start,
    /// The heading line that opens a stage.
    Stage,
    /// Ordinary narration.
    Story,
    /// The closing line of a successful run.
    Victory,
    /// The closing line of a failed run.
    Error,
}

impl EntryKind {
    /// Returns the lower-case tag used in serialized output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stage => "stage",
            Self::Story => "story",
            Self::Victory => "victory",
            Self::Error => "error",
        }
    }
}

/// One immutable line of the story log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryEntry {
    text: String,
    kind: EntryKind,
    timestamp: DateTime<Utc>,
    stage: u8,
}

impl StoryEntry {
    /// Creates an entry recorded at `timestamp` while `stage` was current.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: EntryKind, stage: u8, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            kind,
            timestamp,
            stage,
        }
    }

    /// The narrative text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The entry classification.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// When the entry was written.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The stage that was current when the entry was written.
    #[must_use]
    pub fn stage(&self) -> u8 {
        self.stage
    }
}
