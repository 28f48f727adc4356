//! The six stages of the treasure hunt.

use serde::Serialize;

/// One ordered phase of the scripted narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Stage {
    /// Stage 1.
    ExploreRuins,
    /// Stage 2; may fail.
    SolvePuzzle,
    /// Stage 3.
    EnterMaze,
    /// Stage 4; may fail.
    AvoidGuardians,
    /// Stage 5.
    SolveMechanism,
    /// Stage 6; ends in victory.
    DiscoverTreasure,
}

impl Stage {
    /// Number of stages in a run.
    pub const COUNT: u8 = 6;

    /// Every stage, in run order.
    pub const ALL: [Self; 6] = [
        Self::ExploreRuins,
        Self::SolvePuzzle,
        Self::EnterMaze,
        Self::AvoidGuardians,
        Self::SolveMechanism,
        Self::DiscoverTreasure,
    ];

    /// The 1-based stage number recorded on story entries.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::ExploreRuins => 1,
            Self::SolvePuzzle => 2,
            Self::EnterMaze => 3,
            Self::AvoidGuardians => 4,
            Self::SolveMechanism => 5,
            Self::DiscoverTreasure => 6,
        }
    }

    /// Stage for a 1-based number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.number() == number)
    }

    /// Short title for progress displays.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::ExploreRuins => "探索古代遗迹",
            Self::SolvePuzzle => "解开古代谜题",
            Self::EnterMaze => "穿越地下迷宫",
            Self::AvoidGuardians => "战胜守卫",
            Self::SolveMechanism => "解开宝藏机关",
            Self::DiscoverTreasure => "发现宝藏",
        }
    }

    /// Share of the run completed once this stage has been entered.
    #[must_use]
    pub fn progress_percent(self) -> u8 {
        progress_percent(self.number())
    }
}

/// Rounded percentage for a stage number in `0..=6`; larger values clamp.
#[must_use]
pub fn progress_percent(stage: u8) -> u8 {
    let stage = u32::from(stage.min(Stage::COUNT));
    let count = u32::from(Stage::COUNT);
    let percent = (stage * 100 + count / 2) / count;
    u8::try_from(percent).unwrap_or(100)
}
