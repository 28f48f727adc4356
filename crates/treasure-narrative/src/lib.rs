//! Treasure Narrative — the stage-sequencing engine of the treasure hunt.
//!
//! Responsible for running the six scripted stages in order, tracking the
//! story log and inventory, and folding any stage failure into a terminal
//! run result.

pub mod application;
pub mod domain;
