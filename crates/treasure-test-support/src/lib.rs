//! Shared test doubles for the treasure hunt narrative engine.

mod clock;
mod listener;
mod pacing;
mod rng;

pub use clock::{FixedClock, fixed_now};
pub use listener::RecordingListener;
pub use pacing::RecordingPacer;
pub use rng::{FixedRng, MockRng, SequenceRng};
