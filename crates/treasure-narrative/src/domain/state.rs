//! Mutable state of a single run.

use treasure_core::clock::Clock;
use treasure_core::story::{EntryKind, StoryEntry};

use super::items::{Inventory, Item};
use super::phase::RunPhase;
use super::stages::Stage;

/// State owned by one in-flight run.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Append-only story log.
    pub(crate) story_log: Vec<StoryEntry>,
    /// The stage whose number is stamped on new entries (0 before stage 1).
    pub(crate) current_stage: u8,
    /// Acquired items.
    pub(crate) inventory: Inventory,
    /// State machine position.
    pub(crate) phase: RunPhase,
}

impl RunState {
    /// Creates an empty, not-yet-started state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            story_log: Vec::new(),
            current_stage: 0,
            inventory: Inventory::new(),
            phase: RunPhase::NotStarted,
        }
    }

    /// The story log so far.
    #[must_use]
    pub fn story_log(&self) -> &[StoryEntry] {
        &self.story_log
    }

    /// The current stage number.
    #[must_use]
    pub fn current_stage(&self) -> u8 {
        self.current_stage
    }

    /// The inventory so far.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The state machine position.
    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Moves the run into `stage`.
    pub(crate) fn enter_stage(&mut self, stage: Stage) {
        self.transition(RunPhase::InStage(stage));
        self.current_stage = stage.number();
    }

    /// Marks the run as completed.
    pub(crate) fn succeed(&mut self) {
        self.transition(RunPhase::Succeeded);
    }

    /// Marks the run as failed.
    pub(crate) fn fail(&mut self) {
        self.transition(RunPhase::Failed);
    }

    fn transition(&mut self, next: RunPhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal run transition {:?} -> {next:?}",
            self.phase
        );
        self.phase = next;
    }

    /// Appends an entry stamped with the current stage and returns it.
    pub(crate) fn record(
        &mut self,
        text: impl Into<String>,
        kind: EntryKind,
        clock: &dyn Clock,
    ) -> &StoryEntry {
        let entry = StoryEntry::new(text, kind, self.current_stage, clock.now());
        self.story_log.push(entry);
        &self.story_log[self.story_log.len() - 1]
    }

    /// Adds an item to the inventory.
    pub(crate) fn acquire(&mut self, item: Item) {
        self.inventory.add(item);
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treasure_test_support::{FixedClock, fixed_now};

    #[test]
    fn test_record_stamps_current_stage_and_clock_time() {
        // Arrange
        let clock = FixedClock::default();
        let mut state = RunState::new();

        // Act
        state.record("intro", EntryKind::Start, &clock);
        state.enter_stage(Stage::ExploreRuins);
        let entry = state.record("ruins", EntryKind::Stage, &clock).clone();

        // Assert
        assert_eq!(state.story_log().len(), 2);
        assert_eq!(state.story_log()[0].stage(), 0);
        assert_eq!(entry.stage(), 1);
        assert_eq!(entry.kind(), EntryKind::Stage);
        assert_eq!(entry.timestamp(), fixed_now());
    }

    #[test]
    fn test_enter_stage_updates_phase_and_number() {
        let mut state = RunState::new();

        state.enter_stage(Stage::ExploreRuins);
        state.enter_stage(Stage::SolvePuzzle);

        assert_eq!(state.current_stage(), 2);
        assert_eq!(state.phase(), RunPhase::InStage(Stage::SolvePuzzle));
    }

    #[test]
    fn test_fail_keeps_stage_reached() {
        let mut state = RunState::new();
        state.enter_stage(Stage::ExploreRuins);

        state.fail();

        assert_eq!(state.phase(), RunPhase::Failed);
        assert_eq!(state.current_stage(), 1);
    }

    #[test]
    #[should_panic(expected = "illegal run transition")]
    #[cfg(debug_assertions)]
    fn test_skipping_a_stage_is_rejected_in_debug_builds() {
        let mut state = RunState::new();
        state.enter_stage(Stage::EnterMaze);
    }
}
