//! Stage procedures.
//!
//! Each procedure enters its stage, writes its heading and narration in
//! script order, and may consult or extend the inventory. Only the puzzle
//! and the guardian encounter can fail.

use std::time::Duration;

use treasure_core::error::NarrativeFailure;
use treasure_core::story::EntryKind;

use crate::application::engine::NarrativeEngine;
use crate::domain::items::Item;
use crate::domain::script::{self, guardians, maze, mechanism, puzzle, ruins, treasure};
use crate::domain::stages::Stage;

impl NarrativeEngine {
    fn begin(&mut self, stage: Stage, heading: &str) {
        self.state.enter_stage(stage);
        tracing::info!(stage = stage.number(), title = stage.title(), "entering stage");
        self.record(heading, EntryKind::Stage);
    }

    /// Adds `item`, waits `delay`, then announces it.
    async fn grant(&mut self, item: Item, delay: Duration) {
        self.state.acquire(item);
        tracing::info!(item = item.name(), "item acquired");
        self.pause(delay).await;
        let line = match item {
            Item::GuardiansBlessing => script::blessing_acquired(item.icon(), item.name()),
            Item::MysteryKey | Item::RecoveryPotion => {
                script::item_acquired(item.icon(), item.name())
            }
        };
        self.narrate(line);
    }

    pub(crate) async fn explore_ruins(&mut self) {
        self.begin(Stage::ExploreRuins, ruins::HEADING);
        for line in ruins::LINES {
            self.narrate_after(line).await;
        }
    }

    pub(crate) async fn solve_puzzle(&mut self) -> Result<(), NarrativeFailure> {
        self.begin(Stage::SolvePuzzle, puzzle::HEADING);
        self.narrate(puzzle::hint());
        self.pause(puzzle::STUDY).await;

        let rule = self.config.puzzle_rule;
        for attempt in 1..=self.config.puzzle_max_attempts {
            self.narrate(puzzle::attempt(attempt));
            self.pause(puzzle::ATTEMPT).await;

            if rule.solves(attempt) {
                tracing::debug!(attempt, "puzzle solved");
                self.narrate(puzzle::SOLVED);
                self.grant(Item::MysteryKey, puzzle::REWARD).await;
                return Ok(());
            }

            self.narrate(puzzle::WRONG);
            self.pause(puzzle::RETRY).await;
        }

        Err(NarrativeFailure::new(
            Stage::SolvePuzzle.number(),
            puzzle::FAILURE,
        ))
    }

    pub(crate) async fn enter_maze(&mut self) {
        self.begin(Stage::EnterMaze, maze::HEADING);
        for line in maze::LINES {
            self.narrate_after(line).await;
        }
    }

    pub(crate) async fn avoid_guardians(&mut self) -> Result<(), NarrativeFailure> {
        self.begin(Stage::AvoidGuardians, guardians::HEADING);
        self.narrate_after(guardians::AMBUSH).await;
        self.pause(guardians::DECIDE).await;

        let evaded = self.rng.chance(self.config.guardian_evasion_chance);
        tracing::debug!(evaded, "guardian encounter resolved");

        if evaded {
            self.narrate(guardians::EVADED);
            self.narrate_after(guardians::POTION_FOUND).await;
            self.grant(Item::RecoveryPotion, guardians::POTION_GRANTED)
                .await;
            return Ok(());
        }

        self.narrate(guardians::ATTACKED);
        self.pause(guardians::COUNTER).await;

        if !self.state.inventory.contains(Item::MysteryKey) {
            return Err(NarrativeFailure::new(
                Stage::AvoidGuardians.number(),
                guardians::DEFEAT,
            ));
        }

        self.narrate(guardians::KEY_REMEMBERED);
        self.narrate_after(guardians::KEY_GLOWS).await;
        self.grant(Item::GuardiansBlessing, guardians::BLESSING_GRANTED)
            .await;
        Ok(())
    }

    pub(crate) async fn solve_mechanism(&mut self) {
        self.begin(Stage::SolveMechanism, mechanism::HEADING);
        self.narrate_after(mechanism::DEVICE).await;
        self.pause(mechanism::BEFORE_STEPS).await;

        for (index, step) in mechanism::STEPS.iter().enumerate() {
            self.narrate(mechanism::step(index, step));
            let jitter = self.rng.next_u32_range(0, mechanism::STEP_JITTER_MS - 1);
            let delay = mechanism::STEP_BASE_MS + jitter;
            self.pause(Duration::from_millis(u64::from(delay))).await;
        }

        let [first, second] = if self.state.inventory.contains(Item::MysteryKey) {
            mechanism::WITH_KEY
        } else {
            mechanism::WITHOUT_KEY
        };
        self.narrate(first);
        self.narrate_after((mechanism::BRANCH_PAUSE, second)).await;
    }

    pub(crate) async fn discover_treasure(&mut self) {
        self.begin(Stage::DiscoverTreasure, treasure::HEADING);
        for line in treasure::LINES {
            self.narrate_after(line).await;
        }
        self.pause(treasure::REVEAL).await;

        for found in treasure::TREASURES {
            self.narrate(treasure::found(found));
        }

        self.pause(treasure::CELEBRATE).await;
        self.record(treasure::VICTORY, EntryKind::Victory);
    }
}
