//! Ephemera - Terminal Short-Lived Species Survival Sim
//!
//! One randomized event per round, resolved by player choice or by the
//! die; survive ten generations to win. This module exposes the engine
//! for testing and external use.

pub mod core;
pub mod ui;

pub use crate::core::{GatePhase, RoundEngine, SpeciesState, TraitId};
