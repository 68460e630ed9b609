//! Event catalog: the fixed registry of everything that can befall the
//! species, from weather to predators to mutation windows.

use crate::core::effects::EffectId;
use rand::Rng;

/// One event definition: a title, flavor text, and exactly three choices,
/// each bound to an effect from the catalog. Immutable once defined.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub title: &'static str,
    pub description: &'static str,
    pub choices: [(&'static str, EffectId); 3],
}

static EVENTS: [Event; 11] = [
    Event {
        title: "Cold Snap",
        description: "A biting wind sweeps the land; the species faces a brutal test...",
        choices: [
            ("Huddle for warmth", EffectId::HuddleForWarmth),
            ("Search for a cave", EffectId::SearchForCave),
            ("Keep foraging", EffectId::KeepForaging),
        ],
    },
    Event {
        title: "Drought",
        description: "The water holes are drying up and food grows scarce...",
        choices: [
            ("Migrate toward water", EffectId::Migrate),
            ("Conserve resources", EffectId::ConserveResources),
            ("Dig for groundwater", EffectId::DigForWater),
        ],
    },
    Event {
        title: "Flood",
        description: "Torrential rain has drowned the nesting grounds...",
        choices: [
            ("Climb to high ground", EffectId::ClimbHighGround),
            ("Build rafts", EffectId::BuildRafts),
            ("Wait it out", EffectId::WaitItOut),
        ],
    },
    Event {
        title: "Bountiful Harvest",
        description: "A grove heavy with fruit has been found — food for all!",
        choices: [
            ("Stockpile food", EffectId::StockpileFood),
            ("Breed immediately", EffectId::BreedNow),
            ("Explore further", EffectId::ExploreFurther),
        ],
    },
    Event {
        title: "Predator Attack",
        description: "A pack of starving beasts has caught the herd's scent!",
        choices: [
            ("Fight back", EffectId::FightBack),
            ("Flee at once", EffectId::Flee),
            ("Scatter and hide", EffectId::ScatterAndHide),
        ],
    },
    Event {
        title: "Raptors Overhead",
        description: "Enormous birds of prey circle high above...",
        choices: [
            ("Go underground", EffectId::GoUnderground),
            ("Camouflage", EffectId::Camouflage),
            ("Defend as a group", EffectId::GroupDefense),
        ],
    },
    Event {
        title: "Breeding Season",
        description: "The season has turned — a chance to swell the ranks!",
        choices: [
            ("Mass breeding", EffectId::MassBreed),
            ("Selective breeding", EffectId::EliteBreed),
            ("Delay breeding", EffectId::DelayBreeding),
        ],
    },
    Event {
        title: "Genetic Mutation",
        description: "Some individuals are showing strange new variations...",
        choices: [
            ("Favor thick fur", EffectId::GrowThickFur),
            ("Develop claws", EffectId::DevelopClaws),
            ("Enhance speed", EffectId::EnhanceSpeed),
        ],
    },
    Event {
        title: "Evolutionary Leap",
        description: "Environmental pressure is driving rapid evolution...",
        choices: [
            ("Grow larger", EffectId::GrowLarger),
            ("Boost intelligence", EffectId::BoostIntelligence),
            ("Adapt to the land", EffectId::AdaptToEnvironment),
        ],
    },
    Event {
        title: "Famine",
        description: "The food stores are nearly gone; hunger stalks the species...",
        choices: [
            ("Risk a big hunt", EffectId::RiskyHunt),
            ("Ration the food", EffectId::Ration),
            ("Seek new food", EffectId::SeekNewFood),
        ],
    },
    Event {
        title: "Disease Outbreak",
        description: "An unknown sickness is spreading through the herd...",
        choices: [
            ("Quarantine the sick", EffectId::QuarantineSick),
            ("Search for herbs", EffectId::SearchForHerbs),
            ("Let nature decide", EffectId::NaturalSelection),
        ],
    },
];

/// Returns the full event catalog.
pub fn all_events() -> &'static [Event] {
    &EVENTS
}

/// Draws one event uniformly at random; repeats across rounds are expected.
pub fn draw_event<R: Rng>(rng: &mut R) -> &'static Event {
    &EVENTS[rng.gen_range(0..EVENTS.len())]
}
