//! The narrative engine: runs the six stages and folds failures into a
//! terminal result.

use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;
use treasure_core::clock::Clock;
use treasure_core::error::NarrativeFailure;
use treasure_core::listener::StoryListener;
use treasure_core::pacing::Pacer;
use treasure_core::rng::DeterministicRng;
use treasure_core::story::EntryKind;
use uuid::Uuid;

use crate::application::config::AdventureConfig;
use crate::application::result::RunResult;
use crate::domain::script;
use crate::domain::stages::Stage;
use crate::domain::state::RunState;

/// Drives one run at a time over injected time, randomness and pacing.
pub struct NarrativeEngine {
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) rng: Box<dyn DeterministicRng>,
    pub(crate) pacer: Arc<dyn Pacer>,
    pub(crate) config: AdventureConfig,
    listeners: Vec<Arc<dyn StoryListener>>,
    pub(crate) state: RunState,
}

impl std::fmt::Debug for NarrativeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeEngine")
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl NarrativeEngine {
    /// Creates an engine with the default adventure configuration.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        rng: Box<dyn DeterministicRng>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            clock,
            rng,
            pacer,
            config: AdventureConfig::default(),
            listeners: Vec::new(),
            state: RunState::new(),
        }
    }

    /// Replaces the adventure configuration.
    #[must_use]
    pub fn with_config(mut self, config: AdventureConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a listener that sees every entry as it is written.
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn StoryListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AdventureConfig {
        &self.config
    }

    /// State of the current (or most recent) run.
    #[must_use]
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Runs the whole adventure from a fresh state.
    ///
    /// Never fails: a stage failure ends the run early and is reported
    /// through `RunResult::success` and `RunResult::error_message`.
    pub async fn run_adventure(&mut self) -> RunResult {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("adventure", %run_id);
        self.run(run_id).instrument(span).await
    }

    async fn run(&mut self, run_id: Uuid) -> RunResult {
        self.state = RunState::new();
        tracing::info!("adventure started");

        for line in script::WELCOME {
            self.record(line, EntryKind::Start);
        }

        match self.run_stages().await {
            Ok(()) => {
                self.state.succeed();
                tracing::info!(
                    items = self.state.inventory.len(),
                    entries = self.state.story_log.len(),
                    "adventure completed"
                );
                self.finish(run_id, None)
            }
            Err(failure) => {
                tracing::warn!(stage = failure.stage, reason = %failure, "adventure failed");
                self.record(script::game_over(&failure.message), EntryKind::Error);
                self.state.fail();
                self.finish(run_id, Some(failure.message))
            }
        }
    }

    async fn run_stages(&mut self) -> Result<(), NarrativeFailure> {
        for stage in Stage::ALL {
            match stage {
                Stage::ExploreRuins => self.explore_ruins().await,
                Stage::SolvePuzzle => self.solve_puzzle().await?,
                Stage::EnterMaze => self.enter_maze().await,
                Stage::AvoidGuardians => self.avoid_guardians().await?,
                Stage::SolveMechanism => self.solve_mechanism().await,
                Stage::DiscoverTreasure => self.discover_treasure().await,
            }
        }
        Ok(())
    }

    fn finish(&self, run_id: Uuid, error_message: Option<String>) -> RunResult {
        RunResult {
            run_id,
            success: error_message.is_none(),
            story_log: self.state.story_log.clone(),
            inventory: self.state.inventory.names(),
            final_stage: self.state.current_stage,
            error_message,
        }
    }

    /// Appends an entry and forwards it to every listener.
    pub(crate) fn record(&mut self, text: impl Into<String>, kind: EntryKind) {
        let entry = self.state.record(text, kind, self.clock.as_ref());
        tracing::debug!(
            stage = entry.stage(),
            kind = entry.kind().as_str(),
            text = entry.text(),
            "story entry"
        );
        for listener in &self.listeners {
            listener.on_entry(entry);
        }
    }

    /// Appends a narration entry.
    pub(crate) fn narrate(&mut self, text: impl Into<String>) {
        self.record(text, EntryKind::Story);
    }

    /// Waits `delay`, then narrates `text`.
    pub(crate) async fn narrate_after(&mut self, (delay, text): (Duration, &str)) {
        self.pause(delay).await;
        self.narrate(text);
    }

    pub(crate) async fn pause(&self, delay: Duration) {
        tracing::trace!(?delay, "pacing");
        self.pacer.pause(delay).await;
    }
}
