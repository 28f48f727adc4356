//! Pacing abstraction for narrative delays.
//!
//! Delays between story entries are flavour only. Production runners sleep
//! on the tokio timer; tests inject a pacer that returns immediately.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the current run between two story entries.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Waits for (at most) `duration` before the next entry is written.
    async fn pause(&self, duration: Duration);
}

/// Pacer backed by `tokio::time::sleep`, optionally sped up.
#[derive(Debug, Clone, Copy)]
pub struct TokioPacer {
    speed: f64,
}

impl TokioPacer {
    /// Creates a pacer that sleeps for the full requested duration.
    #[must_use]
    pub fn new() -> Self {
        Self { speed: 1.0 }
    }

    /// Creates a pacer that divides every delay by `speed`.
    ///
    /// A non-positive or non-finite speed is treated as real time.
    #[must_use]
    pub fn with_speed(speed: f64) -> Self {
        if speed.is_finite() && speed > 0.0 {
            Self { speed }
        } else {
            Self::new()
        }
    }

    /// Returns the wall-clock time actually slept for `duration`.
    #[must_use]
    pub fn scaled(&self, duration: Duration) -> Duration {
        if (self.speed - 1.0).abs() < f64::EPSILON {
            return duration;
        }
        duration.div_f64(self.speed)
    }
}

impl Default for TokioPacer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        let scaled = self.scaled(duration);
        if !scaled.is_zero() {
            tokio::time::sleep(scaled).await;
        }
    }
}

/// Pacer that never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

#[async_trait]
impl Pacer for NoPacer {
    async fn pause(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pacer_keeps_duration() {
        let pacer = TokioPacer::default();

        assert_eq!(
            pacer.scaled(Duration::from_millis(1500)),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_speed_divides_duration() {
        let pacer = TokioPacer::with_speed(2.0);

        assert_eq!(
            pacer.scaled(Duration::from_millis(1500)),
            Duration::from_millis(750)
        );
    }

    #[test]
    fn test_invalid_speed_falls_back_to_real_time() {
        for speed in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let pacer = TokioPacer::with_speed(speed);
            assert_eq!(
                pacer.scaled(Duration::from_millis(800)),
                Duration::from_millis(800)
            );
        }
    }

    #[tokio::test]
    async fn test_no_pacer_returns_immediately() {
        let started = std::time::Instant::now();

        NoPacer.pause(Duration::from_secs(60)).await;

        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_tokio_pacer_with_zero_duration_does_not_sleep() {
        let started = std::time::Instant::now();

        TokioPacer::new().pause(Duration::ZERO).await;

        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
