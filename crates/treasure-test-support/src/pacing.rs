//! Test pacer — records requested delays instead of sleeping.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use treasure_core::pacing::Pacer;

/// A pacer that returns immediately and records every requested delay.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    /// Creates an empty recording pacer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all requested delays, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }

    /// Sum of all requested delays: the virtual duration of the run.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn total(&self) -> Duration {
        self.pauses.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}
