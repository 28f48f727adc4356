//! Domain model: stages, items, run state and the narrative script.

pub mod items;
pub mod phase;
pub mod script;
pub mod stages;
pub mod state;
