use crate::core::constants::{STARTING_FOOD, STARTING_POPULATION};
use serde::{Deserialize, Serialize};

/// Permanent evolutionary traits a species can unlock.
///
/// Traits are append-only: once gained they are never lost, and later
/// effects branch on their presence (see `effects.rs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraitId {
    ThickFur,
    Claws,
    SpeedBoost,
    LargerBody,
    Intelligence,
    Adaptation,
    DiseaseResistance,
}

impl TraitId {
    /// Display name for the status panel.
    pub fn name(&self) -> &'static str {
        match self {
            TraitId::ThickFur => "Thick Fur",
            TraitId::Claws => "Claws",
            TraitId::SpeedBoost => "Speed Boost",
            TraitId::LargerBody => "Larger Body",
            TraitId::Intelligence => "Intelligence",
            TraitId::Adaptation => "Adaptation",
            TraitId::DiseaseResistance => "Disease Resistance",
        }
    }
}

/// Mutable record of the species across rounds and generations.
///
/// Owned exclusively by the `RoundEngine`; all numeric mutation happens
/// through effect application. The state itself only answers two queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesState {
    pub population: u32,
    pub food: i32,
    pub shelter: bool,
    /// Insertion-ordered, unique, never removed.
    pub traits: Vec<TraitId>,
    pub generation: u32,
    pub round: u32,
}

impl Default for SpeciesState {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeciesState {
    pub fn new() -> Self {
        Self {
            population: STARTING_POPULATION,
            food: STARTING_FOOD,
            shelter: false,
            traits: Vec::new(),
            generation: 1,
            round: 1,
        }
    }

    /// Adds a trait. A no-op when the trait is already present.
    pub fn add_trait(&mut self, id: TraitId) {
        if !self.traits.contains(&id) {
            self.traits.push(id);
        }
    }

    pub fn has_trait(&self, id: TraitId) -> bool {
        self.traits.contains(&id)
    }

    pub fn is_alive(&self) -> bool {
        self.population > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_species_state() {
        let species = SpeciesState::new();

        assert_eq!(species.population, 100);
        assert_eq!(species.food, 50);
        assert!(!species.shelter);
        assert!(species.traits.is_empty());
        assert_eq!(species.generation, 1);
        assert_eq!(species.round, 1);
        assert!(species.is_alive());
    }

    #[test]
    fn test_add_trait_is_idempotent() {
        let mut species = SpeciesState::new();

        species.add_trait(TraitId::ThickFur);
        species.add_trait(TraitId::ThickFur);
        species.add_trait(TraitId::ThickFur);

        assert_eq!(species.traits, vec![TraitId::ThickFur]);
        assert!(species.has_trait(TraitId::ThickFur));
        assert!(!species.has_trait(TraitId::Claws));
    }

    #[test]
    fn test_traits_keep_insertion_order() {
        let mut species = SpeciesState::new();

        species.add_trait(TraitId::Claws);
        species.add_trait(TraitId::ThickFur);
        species.add_trait(TraitId::Claws);
        species.add_trait(TraitId::Intelligence);

        assert_eq!(
            species.traits,
            vec![TraitId::Claws, TraitId::ThickFur, TraitId::Intelligence]
        );
    }

    #[test]
    fn test_is_alive_at_zero_population() {
        let mut species = SpeciesState::new();
        species.population = 0;
        assert!(!species.is_alive());

        species.population = 1;
        assert!(species.is_alive());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut species = SpeciesState::new();
        species.population = 72;
        species.food = -5;
        species.shelter = true;
        species.add_trait(TraitId::SpeedBoost);
        species.add_trait(TraitId::DiseaseResistance);
        species.generation = 4;
        species.round = 3;

        let json = serde_json::to_string(&species).unwrap();
        let loaded: SpeciesState = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.population, 72);
        assert_eq!(loaded.food, -5);
        assert!(loaded.shelter);
        assert_eq!(
            loaded.traits,
            vec![TraitId::SpeedBoost, TraitId::DiseaseResistance]
        );
        assert_eq!(loaded.generation, 4);
        assert_eq!(loaded.round, 3);
    }

    #[test]
    fn test_trait_names_are_nonempty() {
        let all = [
            TraitId::ThickFur,
            TraitId::Claws,
            TraitId::SpeedBoost,
            TraitId::LargerBody,
            TraitId::Intelligence,
            TraitId::Adaptation,
            TraitId::DiseaseResistance,
        ];
        for id in all {
            assert!(!id.name().is_empty());
        }
    }
}
