//! Terminal runner for the treasure hunt: configuration, errors and text
//! rendering. The binary in `main.rs` wires these to the engine.

pub mod config;
pub mod error;
pub mod render;
