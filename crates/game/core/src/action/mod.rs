//! Party actions: the vocabulary a turn loop feeds to the engine.
pub mod types;

pub use types::{ActionEffect, ActionOutcome, CardinalDirection, PartyAction};
