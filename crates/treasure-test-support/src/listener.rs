//! Test listener — collects every forwarded story entry.

use std::sync::Mutex;

use treasure_core::listener::StoryListener;
use treasure_core::story::StoryEntry;

/// A story listener that records every entry it receives.
#[derive(Debug, Default)]
pub struct RecordingListener {
    entries: Mutex<Vec<StoryEntry>>,
}

impl RecordingListener {
    /// Creates an empty recording listener.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all received entries, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn entries(&self) -> Vec<StoryEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl StoryListener for RecordingListener {
    fn on_entry(&self, entry: &StoryEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}
