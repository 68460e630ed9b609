//! The effect catalog: every outcome an event choice can bind to.
//!
//! Each effect is a total function over [`SpeciesState`]: it applies its
//! numeric changes (clamping population at zero) and returns a one-line
//! outcome description for the log. Probabilistic effects draw from the
//! injected `Rng` once per invocation; everything else is deterministic
//! given population, food, and the trait set.

use crate::core::species::{SpeciesState, TraitId};
use rand::Rng;

/// Identifies one effect in the catalog.
///
/// Event definitions bind each of their three choices to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectId {
    // Cold Snap
    HuddleForWarmth,
    SearchForCave,
    KeepForaging,
    // Drought
    Migrate,
    ConserveResources,
    DigForWater,
    // Flood
    ClimbHighGround,
    BuildRafts,
    WaitItOut,
    // Bountiful Harvest
    StockpileFood,
    BreedNow,
    ExploreFurther,
    // Predator Attack
    FightBack,
    Flee,
    ScatterAndHide,
    // Raptors Overhead
    GoUnderground,
    Camouflage,
    GroupDefense,
    // Breeding Season
    MassBreed,
    EliteBreed,
    DelayBreeding,
    // Genetic Mutation
    GrowThickFur,
    DevelopClaws,
    EnhanceSpeed,
    // Evolutionary Leap
    GrowLarger,
    BoostIntelligence,
    AdaptToEnvironment,
    // Famine
    RiskyHunt,
    Ration,
    SeekNewFood,
    // Disease Outbreak
    QuarantineSick,
    SearchForHerbs,
    NaturalSelection,
}

/// Proportional loss with a fixed floor, so losses never vanish at small
/// population sizes.
fn proportional_loss(population: u32, floor: u32, rate: f64) -> u32 {
    floor.max((population as f64 * rate).round() as u32)
}

/// Subtracts a loss from the population, clamping at zero.
fn lose_population(species: &mut SpeciesState, loss: u32) {
    species.population = species.population.saturating_sub(loss);
}

impl EffectId {
    /// Applies this effect to the species and returns the outcome line.
    ///
    /// Never fails; the engine only ever calls it with well-formed state.
    pub fn apply<R: Rng>(self, species: &mut SpeciesState, rng: &mut R) -> String {
        match self {
            EffectId::HuddleForWarmth => {
                let mut loss = proportional_loss(species.population, 10, 0.10);
                if species.has_trait(TraitId::ThickFur) {
                    loss /= 2;
                }
                lose_population(species, loss);
                format!("Huddled together for warmth, lost {} individuals", loss)
            }
            EffectId::SearchForCave => {
                if rng.gen::<f64>() < 0.6 {
                    species.shelter = true;
                    let loss = proportional_loss(species.population, 5, 0.05);
                    lose_population(species, loss);
                    format!("Found shelter! Lost {} individuals", loss)
                } else {
                    let loss = proportional_loss(species.population, 15, 0.15);
                    lose_population(species, loss);
                    format!("No suitable cave found, lost {} individuals", loss)
                }
            }
            EffectId::KeepForaging => {
                species.food += 10;
                let loss = proportional_loss(species.population, 20, 0.20);
                lose_population(species, loss);
                format!("Gained 10 food, but lost {} individuals", loss)
            }
            EffectId::Migrate => {
                if rng.gen::<f64>() < 0.5 {
                    species.food += 20;
                    let loss = proportional_loss(species.population, 10, 0.10);
                    lose_population(species, loss);
                    format!("Found water! +20 food, lost {} individuals", loss)
                } else {
                    let loss = proportional_loss(species.population, 25, 0.25);
                    lose_population(species, loss);
                    format!("The migration failed, heavy losses: -{} individuals", loss)
                }
            }
            EffectId::ConserveResources => {
                species.food = (species.food - 5).max(0);
                let loss = proportional_loss(species.population, 8, 0.08);
                lose_population(species, loss);
                format!("Rationed resources, -5 food, lost {} individuals", loss)
            }
            EffectId::DigForWater => {
                if rng.gen::<f64>() < 0.4 {
                    species.food += 15;
                    "Struck groundwater! +15 food".to_string()
                } else {
                    let loss = proportional_loss(species.population, 12, 0.12);
                    lose_population(species, loss);
                    format!("The dig failed, wasted effort, lost {} individuals", loss)
                }
            }
            EffectId::ClimbHighGround => {
                let loss = proportional_loss(species.population, 5, 0.05);
                lose_population(species, loss);
                format!("Escaped the flood, lost {} individuals", loss)
            }
            EffectId::BuildRafts => {
                if species.has_trait(TraitId::Intelligence) {
                    species.food += 10;
                    "Built rafts and rode it out! +10 food".to_string()
                } else {
                    let loss = proportional_loss(species.population, 15, 0.15);
                    lose_population(species, loss);
                    format!("The rafts fell apart, lost {} individuals", loss)
                }
            }
            EffectId::WaitItOut => {
                let loss = proportional_loss(species.population, 30, 0.30);
                lose_population(species, loss);
                format!("The flood took a heavy toll: -{} individuals", loss)
            }
            EffectId::StockpileFood => {
                species.food += 30;
                "Stockpiled a large store of food, +30 food".to_string()
            }
            EffectId::BreedNow => {
                let gain = proportional_loss(species.population, 20, 0.30);
                species.population += gain;
                species.food -= 10;
                format!("Population grew by {}, -10 food", gain)
            }
            EffectId::ExploreFurther => {
                if rng.gen::<f64>() < 0.5 {
                    species.food += 40;
                    "Discovered rich new grounds! +40 food".to_string()
                } else {
                    species.food += 15;
                    "A modest haul from exploring, +15 food".to_string()
                }
            }
            EffectId::FightBack => {
                if species.has_trait(TraitId::Claws) || species.has_trait(TraitId::LargerBody) {
                    let loss = proportional_loss(species.population, 10, 0.10);
                    lose_population(species, loss);
                    species.food += 20;
                    format!(
                        "Drove off the beasts! Lost {} individuals, gained 20 food",
                        loss
                    )
                } else {
                    let loss = proportional_loss(species.population, 35, 0.35);
                    lose_population(species, loss);
                    format!("The fight went badly: -{} individuals", loss)
                }
            }
            EffectId::Flee => {
                if species.has_trait(TraitId::SpeedBoost) {
                    let loss = proportional_loss(species.population, 5, 0.05);
                    lose_population(species, loss);
                    format!("Outran the predators! Only {} individuals lost", loss)
                } else {
                    let loss = proportional_loss(species.population, 20, 0.20);
                    lose_population(species, loss);
                    format!("Lost {} individuals in the stampede", loss)
                }
            }
            EffectId::ScatterAndHide => {
                let loss = proportional_loss(species.population, 12, 0.12);
                lose_population(species, loss);
                format!("Scattered and hid, lost {} individuals", loss)
            }
            EffectId::GoUnderground => {
                if species.shelter {
                    let loss = proportional_loss(species.population, 3, 0.03);
                    lose_population(species, loss);
                    format!("Sheltered underground, only {} individuals lost", loss)
                } else {
                    let loss = proportional_loss(species.population, 15, 0.15);
                    lose_population(species, loss);
                    format!("Scrambled for cover, lost {} individuals", loss)
                }
            }
            EffectId::Camouflage => {
                if rng.gen::<f64>() < 0.6 {
                    let loss = proportional_loss(species.population, 5, 0.05);
                    lose_population(species, loss);
                    format!("The camouflage worked! Lost {} individuals", loss)
                } else {
                    let loss = proportional_loss(species.population, 18, 0.18);
                    lose_population(species, loss);
                    format!("The camouflage failed, lost {} individuals", loss)
                }
            }
            EffectId::GroupDefense => {
                let loss = proportional_loss(species.population, 10, 0.10);
                lose_population(species, loss);
                format!("Held the line together, lost {} individuals", loss)
            }
            EffectId::MassBreed => {
                if species.food >= 20 {
                    let gain = proportional_loss(species.population, 40, 0.50);
                    species.population += gain;
                    species.food -= 20;
                    format!("A breeding boom! Population +{}, -20 food", gain)
                } else {
                    "Not enough food — the breeding season passes".to_string()
                }
            }
            EffectId::EliteBreed => {
                let gain = proportional_loss(species.population, 15, 0.20);
                species.population += gain;
                species.food -= 10;
                format!("Selective breeding, population +{}, -10 food", gain)
            }
            EffectId::DelayBreeding => {
                species.food += 10;
                "Delayed breeding, saved 10 food".to_string()
            }
            EffectId::GrowThickFur => {
                species.add_trait(TraitId::ThickFur);
                "Evolved thick fur! Cold resistance improved".to_string()
            }
            EffectId::DevelopClaws => {
                species.add_trait(TraitId::Claws);
                "Evolved claws! Fighting strength improved".to_string()
            }
            EffectId::EnhanceSpeed => {
                species.add_trait(TraitId::SpeedBoost);
                "Speed greatly increased! Escape odds improved".to_string()
            }
            EffectId::GrowLarger => {
                species.add_trait(TraitId::LargerBody);
                species.food -= 15;
                "Grew larger! Fighting strength improved, -15 food".to_string()
            }
            EffectId::BoostIntelligence => {
                species.add_trait(TraitId::Intelligence);
                "Intelligence increased! Problem solving improved".to_string()
            }
            EffectId::AdaptToEnvironment => {
                species.add_trait(TraitId::Adaptation);
                "Gained environmental adaptation!".to_string()
            }
            EffectId::RiskyHunt => {
                if rng.gen::<f64>() < 0.5 {
                    species.food += 25;
                    let loss = proportional_loss(species.population, 8, 0.08);
                    lose_population(species, loss);
                    format!("The hunt succeeded! +25 food, lost {} individuals", loss)
                } else {
                    let loss = proportional_loss(species.population, 20, 0.20);
                    lose_population(species, loss);
                    format!("The hunt failed, lost {} individuals", loss)
                }
            }
            EffectId::Ration => {
                let loss = proportional_loss(species.population, 15, 0.15);
                lose_population(species, loss);
                format!("Ate less, lost {} individuals", loss)
            }
            EffectId::SeekNewFood => {
                if rng.gen::<f64>() < 0.6 {
                    species.food += 20;
                    "Found a new food source! +20 food".to_string()
                } else {
                    let loss = proportional_loss(species.population, 10, 0.10);
                    lose_population(species, loss);
                    format!("The search failed, lost {} individuals", loss)
                }
            }
            EffectId::QuarantineSick => {
                let loss = proportional_loss(species.population, 12, 0.12);
                lose_population(species, loss);
                format!("Quarantined the sick, contained it, lost {} individuals", loss)
            }
            EffectId::SearchForHerbs => {
                if species.has_trait(TraitId::Intelligence) {
                    let loss = proportional_loss(species.population, 5, 0.05);
                    lose_population(species, loss);
                    format!("Found healing herbs! Only {} individuals lost", loss)
                } else {
                    let loss = proportional_loss(species.population, 15, 0.15);
                    lose_population(species, loss);
                    format!("The herbs did little, lost {} individuals", loss)
                }
            }
            EffectId::NaturalSelection => {
                let loss = proportional_loss(species.population, 25, 0.25);
                lose_population(species, loss);
                if rng.gen::<f64>() < 0.3 {
                    species.add_trait(TraitId::DiseaseResistance);
                    format!(
                        "Natural selection, lost {} individuals, but gained disease resistance",
                        loss
                    )
                } else {
                    format!("Natural selection, lost {} individuals", loss)
                }
            }
        }
    }
}
