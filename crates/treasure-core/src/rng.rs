//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a scripted or fixed
//! implementation is injected so both sides of every random branch can be
//! forced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Decide an event that happens with the given `probability`.
    ///
    /// Draws exactly one `f64`.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// Production RNG backed by `StdRng`.
#[derive(Debug)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Creates an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Creates a reproducible RNG from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.0.random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantRng(f64);

    impl DeterministicRng for ConstantRng {
        fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
            min
        }

        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_chance_is_true_below_probability() {
        assert!(ConstantRng(0.0).chance(0.7));
        assert!(ConstantRng(0.69).chance(0.7));
    }

    #[test]
    fn test_chance_is_false_at_or_above_probability() {
        assert!(!ConstantRng(0.7).chance(0.7));
        assert!(!ConstantRng(0.99).chance(0.7));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut first = SystemRng::seeded(42);
        let mut second = SystemRng::seeded(42);

        let a: Vec<u32> = (0..8).map(|_| first.next_u32_range(0, 800)).collect();
        let b: Vec<u32> = (0..8).map(|_| second.next_u32_range(0, 800)).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_next_u32_range_stays_within_bounds() {
        let mut rng = SystemRng::seeded(7);

        for _ in 0..1000 {
            let value = rng.next_u32_range(10, 20);
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_next_u32_range_with_empty_span_returns_min() {
        let mut rng = SystemRng::seeded(7);

        assert_eq!(rng.next_u32_range(5, 5), 5);
        assert_eq!(rng.next_u32_range(9, 3), 9);
    }

    #[test]
    fn test_next_f64_is_in_unit_interval() {
        let mut rng = SystemRng::seeded(3);

        for _ in 0..1000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
