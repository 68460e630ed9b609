//! Core simulation: species state, effect and event catalogs, and the
//! round engine. Nothing in here touches the terminal.

pub mod constants;
pub mod effects;
pub mod engine;
pub mod events;
pub mod species;

pub use engine::{GatePhase, RoundEngine};
pub use species::{SpeciesState, TraitId};
