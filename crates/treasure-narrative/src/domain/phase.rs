//! Run phase state machine.

use serde::Serialize;

use super::stages::Stage;

/// Where a run currently is. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunPhase {
    /// No stage has started.
    NotStarted,
    /// The given stage is executing.
    InStage(Stage),
    /// All six stages completed.
    Succeeded,
    /// A stage failed; no further stages run.
    Failed,
}

impl RunPhase {
    /// Whether the phase is `Succeeded` or `Failed`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::NotStarted, Self::InStage(Stage::ExploreRuins)) => true,
            (Self::InStage(current), Self::InStage(following)) => {
                following.number() == current.number() + 1
            }
            (Self::InStage(Stage::DiscoverTreasure), Self::Succeeded)
            | (Self::InStage(_), Self::Failed) => true,
            _ => false,
        }
    }
}
