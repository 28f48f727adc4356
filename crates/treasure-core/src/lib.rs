//! Treasure Core — shared capabilities for the narrative engine.
//!
//! This crate defines the injectable capabilities (time, randomness,
//! pacing, entry listeners) and the story entry type that the engine and
//! its runners share. It contains no narrative content.

pub mod clock;
pub mod error;
pub mod listener;
pub mod pacing;
pub mod rng;
pub mod story;
