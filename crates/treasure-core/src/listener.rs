//! Real-time observation of story entries.

use tokio::sync::mpsc::UnboundedSender;

use crate::story::StoryEntry;

/// Receives every story entry as soon as it is appended, in log order.
pub trait StoryListener: Send + Sync {
    /// Called once per appended entry.
    fn on_entry(&self, entry: &StoryEntry);
}

impl StoryListener for UnboundedSender<StoryEntry> {
    fn on_entry(&self, entry: &StoryEntry) {
        if self.send(entry.clone()).is_err() {
            tracing::debug!("story receiver dropped; entry not forwarded");
        }
    }
}
