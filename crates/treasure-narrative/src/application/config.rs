//! Engine configuration.

/// How the symbol puzzle in stage 2 resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleRule {
    /// The puzzle is solved on the given 1-based attempt. An attempt beyond
    /// the attempt limit is never reached, so the puzzle fails.
    SolvesOnAttempt(u32),
    /// No attempt ever solves the puzzle.
    Unsolvable,
}

impl PuzzleRule {
    /// Whether `attempt` (1-based) solves the puzzle.
    #[must_use]
    pub fn solves(self, attempt: u32) -> bool {
        match self {
            Self::SolvesOnAttempt(target) => attempt == target,
            Self::Unsolvable => false,
        }
    }
}

impl Default for PuzzleRule {
    fn default() -> Self {
        Self::SolvesOnAttempt(2)
    }
}

/// Tunables of a run. The defaults reproduce the scripted adventure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdventureConfig {
    /// Probability that stage 4's traps and guardian are avoided outright.
    pub guardian_evasion_chance: f64,
    /// Number of puzzle attempts before stage 2 fails.
    pub puzzle_max_attempts: u32,
    /// How the puzzle resolves.
    pub puzzle_rule: PuzzleRule,
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self {
            guardian_evasion_chance: 0.7,
            puzzle_max_attempts: 3,
            puzzle_rule: PuzzleRule::default(),
        }
    }
}
