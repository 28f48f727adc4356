//! End-to-end runs of the treasure hunt.

use std::sync::Arc;
use std::time::Duration;

use treasure_core::pacing::NoPacer;
use treasure_core::rng::{DeterministicRng, SystemRng};
use treasure_core::story::EntryKind;
use treasure_narrative::application::config::{AdventureConfig, PuzzleRule};
use treasure_narrative::application::engine::NarrativeEngine;
use treasure_narrative::application::progress::{ProgressView, RunStatus};
use treasure_narrative::application::result::RunResult;
use treasure_narrative::domain::items::Item;
use treasure_test_support::{FixedClock, FixedRng, MockRng, RecordingPacer};

fn engine(rng: impl DeterministicRng + 'static) -> NarrativeEngine {
    NarrativeEngine::new(
        Arc::new(FixedClock::default()),
        Box::new(rng),
        Arc::new(NoPacer),
    )
}

fn assert_run_invariants(result: &RunResult) {
    assert!(!result.story_log.is_empty());
    assert!(
        result
            .story_log
            .windows(2)
            .all(|pair| pair[0].stage() <= pair[1].stage()),
        "stages must be non-decreasing"
    );
    assert!(
        !(result.has_item(Item::RecoveryPotion.name())
            && result.has_item(Item::GuardiansBlessing.name())),
        "potion and blessing are mutually exclusive"
    );

    let last = result.last_entry().unwrap();
    if result.success {
        assert_eq!(result.final_stage, 6);
        assert_eq!(last.kind(), EntryKind::Victory);
        assert!(result.error_message.is_none());
    } else {
        assert_eq!(last.kind(), EntryKind::Error);
        let message = result.error_message.as_deref().unwrap();
        assert!(!message.is_empty());
        assert!(last.text().ends_with(message));
        assert_eq!(last.stage(), result.final_stage);
    }
}

#[tokio::test]
async fn test_happy_path_reaches_victory_with_key_and_potion() {
    // Arrange
    let mut engine = engine(MockRng);

    // Act
    let result = engine.run_adventure().await;

    // Assert
    assert_run_invariants(&result);
    assert!(result.success);
    assert_eq!(result.final_stage, 6);
    assert_eq!(result.inventory, vec!["神秘钥匙", "恢复药剂"]);
    assert_eq!(
        result.last_entry().unwrap().text(),
        "🎊 恭喜你！你成功完成了这个史诗般的寻宝冒险！"
    );
    assert_eq!(result.entries_of(EntryKind::Victory).count(), 1);
    assert_eq!(result.entries_of(EntryKind::Stage).count(), 6);
    assert_eq!(result.entries_of(EntryKind::Error).count(), 0);
}

#[tokio::test]
async fn test_happy_path_through_guardian_uses_key_for_blessing() {
    let mut engine = engine(FixedRng(0.95));

    let result = engine.run_adventure().await;

    assert_run_invariants(&result);
    assert!(result.success);
    assert_eq!(result.inventory, vec!["神秘钥匙", "守护者的祝福"]);
}

#[tokio::test]
async fn test_unsolvable_puzzle_ends_run_at_stage_two() {
    // Arrange
    let config = AdventureConfig {
        puzzle_rule: PuzzleRule::Unsolvable,
        ..AdventureConfig::default()
    };
    let mut engine = engine(MockRng).with_config(config);

    // Act
    let result = engine.run_adventure().await;

    // Assert
    assert_run_invariants(&result);
    assert!(!result.success);
    assert_eq!(result.final_stage, 2);
    assert_eq!(
        result.error_message.as_deref(),
        Some("谜题太难了！你需要更仔细地观察...")
    );
    assert_eq!(
        result.last_entry().unwrap().text(),
        "💀 游戏结束: 谜题太难了！你需要更仔细地观察..."
    );
    assert!(result.inventory.is_empty());
    assert!(result.story_log.iter().all(|entry| entry.stage() <= 2));
}

#[tokio::test]
async fn test_puzzle_solved_on_last_attempt_still_completes_run() {
    // Arrange
    let config = AdventureConfig {
        puzzle_rule: PuzzleRule::SolvesOnAttempt(3),
        ..AdventureConfig::default()
    };
    let mut engine = engine(FixedRng(0.95)).with_config(config);

    // Act
    let result = engine.run_adventure().await;

    // Assert
    assert_run_invariants(&result);
    assert!(result.success);
    let attempts = result
        .story_log
        .iter()
        .filter(|entry| entry.text().starts_with("尝试 "))
        .count();
    assert_eq!(attempts, 3);
    assert!(result.has_item("守护者的祝福"));
}

#[tokio::test]
async fn test_repeated_runs_produce_independent_results() {
    // Arrange
    let mut engine = engine(MockRng);

    // Act
    let first = engine.run_adventure().await;
    let second = engine.run_adventure().await;

    // Assert
    assert_eq!(second.story_log.len(), first.story_log.len());
    assert_eq!(second.story_log[0].kind(), EntryKind::Start);
    assert_eq!(second.entries_of(EntryKind::Victory).count(), 1);
    assert_eq!(second.inventory, vec!["神秘钥匙", "恢复药剂"]);
    assert_ne!(first.run_id, second.run_id);
}

#[tokio::test]
async fn test_fresh_engines_do_not_share_state() {
    let failing = AdventureConfig {
        puzzle_rule: PuzzleRule::Unsolvable,
        ..AdventureConfig::default()
    };
    let mut first = engine(MockRng).with_config(failing);
    let mut second = engine(MockRng);

    let failed = first.run_adventure().await;
    let succeeded = second.run_adventure().await;

    assert!(!failed.success);
    assert!(succeeded.success);
    assert_eq!(succeeded.entries_of(EntryKind::Error).count(), 0);
}

#[tokio::test]
async fn test_seeded_random_runs_always_hold_invariants() {
    let mut outcomes = (0usize, 0usize);

    for seed in 0..200 {
        let mut engine = engine(SystemRng::seeded(seed));

        let result = engine.run_adventure().await;

        assert_run_invariants(&result);
        if result.success {
            outcomes.0 += 1;
        } else {
            outcomes.1 += 1;
        }
    }

    // The default puzzle rule always yields the key, so the guardian never wins.
    assert_eq!(outcomes, (200, 0));
}

#[tokio::test]
async fn test_default_run_paces_in_script_order() {
    // Arrange
    let pacer = Arc::new(RecordingPacer::new());
    let mut engine = NarrativeEngine::new(
        Arc::new(FixedClock::default()),
        Box::new(MockRng),
        pacer.clone(),
    );

    // Act
    let result = engine.run_adventure().await;

    // Assert
    assert!(result.success);
    let pauses = pacer.pauses();
    assert_eq!(pauses.first(), Some(&Duration::from_millis(1000)));
    assert_eq!(pauses.last(), Some(&Duration::from_millis(1500)));
    // stages 1-6 with the key, avoided guardian, and zero mechanism jitter
    assert_eq!(pacer.total(), Duration::from_millis(33_200));
}

#[tokio::test]
async fn test_progress_view_from_result() {
    let mut engine = engine(MockRng);

    let result = engine.run_adventure().await;
    let view = ProgressView::from_result(&result);

    assert_eq!(view.percent, 100);
    assert_eq!(view.stage_title, Some("发现宝藏"));
    assert_eq!(view.item_count(), 2);
    assert_eq!(view.status, RunStatus::Succeeded);
    assert_eq!(ProgressView::from_state(engine.state()), view);
}

#[tokio::test]
async fn test_result_serializes_to_json() {
    let mut engine = engine(MockRng);

    let result = engine.run_adventure().await;
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["final_stage"], 6);
    assert!(json.get("error_message").is_none());
    assert_eq!(json["story_log"][0]["kind"], "start");
    assert_eq!(json["inventory"][0], "神秘钥匙");
}
