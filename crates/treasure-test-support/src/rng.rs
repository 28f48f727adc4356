//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use treasure_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`. Every `chance` draw with a positive probability succeeds.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG whose `next_f64` always returns the wrapped value, and whose
/// `next_u32_range` always returns `min`. Used to force one side of a
/// `chance` draw: `FixedRng(0.99)` fails any `chance(p)` with `p <= 0.99`.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng(pub f64);

impl DeterministicRng for FixedRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// An RNG that returns `f64` draws from a predetermined sequence and counts
/// every draw. Panics if the sequence is exhausted. `next_u32_range` always
/// returns `min` so pacing jitter does not consume scripted values.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
    u32_draws: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            index: 0,
            u32_draws: 0,
        }
    }

    /// Number of `f64` values consumed so far.
    #[must_use]
    pub fn f64_draws(&self) -> usize {
        self.index
    }

    /// Number of `next_u32_range` calls so far.
    #[must_use]
    pub fn u32_draws(&self) -> usize {
        self.u32_draws
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        self.u32_draws += 1;
        min
    }

    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
