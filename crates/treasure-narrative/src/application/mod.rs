//! Application layer: the engine that drives a run, and its outputs.

pub mod config;
pub mod engine;
pub mod progress;
pub mod result;
mod stage_handlers;
