//! Progress views for presentation layers.
//!
//! Derived from structured run state, so renderers never have to parse
//! story text to learn the stage or the inventory.

use serde::Serialize;

use crate::application::result::RunResult;
use crate::domain::phase::RunPhase;
use crate::domain::stages::{Stage, progress_percent};
use crate::domain::state::RunState;

/// Coarse status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    /// No run has started.
    Waiting,
    /// A run is executing.
    Running,
    /// The last run completed.
    Succeeded,
    /// The last run failed.
    Failed,
}

impl RunStatus {
    /// Status label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Waiting => "等待开始",
            Self::Running => "冒险进行中...",
            Self::Succeeded => "冒险成功！",
            Self::Failed => "冒险失败",
        }
    }
}

impl From<RunPhase> for RunStatus {
    fn from(phase: RunPhase) -> Self {
        match phase {
            RunPhase::NotStarted => Self::Waiting,
            RunPhase::InStage(_) => Self::Running,
            RunPhase::Succeeded => Self::Succeeded,
            RunPhase::Failed => Self::Failed,
        }
    }
}

/// Read-only snapshot of how far a run has come.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    /// Completed share of the run, `0..=100`.
    pub percent: u8,
    /// Current stage number, `0..=6`.
    pub stage: u8,
    /// Title of the current stage, if one has started.
    pub stage_title: Option<&'static str>,
    /// Distinct acquired item names, in acquisition order.
    pub items: Vec<String>,
    /// Coarse status.
    pub status: RunStatus,
}

impl ProgressView {
    fn build(stage: u8, names: Vec<String>, status: RunStatus) -> Self {
        let mut items: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !items.contains(&name) {
                items.push(name);
            }
        }
        Self {
            percent: progress_percent(stage),
            stage,
            stage_title: Stage::from_number(stage).map(Stage::title),
            items,
            status,
        }
    }

    /// Snapshot of a run in progress (or just finished).
    #[must_use]
    pub fn from_state(state: &RunState) -> Self {
        Self::build(
            state.current_stage(),
            state.inventory().names(),
            state.phase().into(),
        )
    }

    /// Snapshot of a finished run.
    #[must_use]
    pub fn from_result(result: &RunResult) -> Self {
        let status = if result.success {
            RunStatus::Succeeded
        } else {
            RunStatus::Failed
        };
        Self::build(result.final_stage, result.inventory.clone(), status)
    }

    /// Number of distinct items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_fresh_state_is_waiting_at_zero() {
        let view = ProgressView::from_state(&RunState::new());

        assert_eq!(view.percent, 0);
        assert_eq!(view.stage, 0);
        assert_eq!(view.stage_title, None);
        assert_eq!(view.status, RunStatus::Waiting);
        assert_eq!(view.item_count(), 0);
    }

    #[test]
    fn test_running_state_reports_stage_title() {
        let mut state = RunState::new();
        state.enter_stage(Stage::ExploreRuins);
        state.enter_stage(Stage::SolvePuzzle);

        let view = ProgressView::from_state(&state);

        assert_eq!(view.stage_title, Some("解开古代谜题"));
        assert_eq!(view.percent, 33);
        assert_eq!(view.status, RunStatus::Running);
        assert_eq!(view.status.label(), "冒险进行中...");
    }

    #[test]
    fn test_result_view_deduplicates_items() {
        let result = RunResult {
            run_id: Uuid::new_v4(),
            success: true,
            story_log: Vec::new(),
            inventory: vec!["神秘钥匙".into(), "神秘钥匙".into(), "恢复药剂".into()],
            final_stage: 6,
            error_message: None,
        };

        let view = ProgressView::from_result(&result);

        assert_eq!(view.items, vec!["神秘钥匙", "恢复药剂"]);
        assert_eq!(view.percent, 100);
        assert_eq!(view.status, RunStatus::Succeeded);
    }

    #[test]
    fn test_failed_result_keeps_stage_reached() {
        let result = RunResult {
            run_id: Uuid::new_v4(),
            success: false,
            story_log: Vec::new(),
            inventory: Vec::new(),
            final_stage: 2,
            error_message: Some("谜题太难了！你需要更仔细地观察...".into()),
        };

        let view = ProgressView::from_result(&result);

        assert_eq!(view.stage, 2);
        assert_eq!(view.status, RunStatus::Failed);
        assert_eq!(view.status.label(), "冒险失败");
    }
}
