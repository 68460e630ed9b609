//! The round engine: draws events, runs the resolution gate, applies
//! effects, and advances rounds and generations until victory or
//! extinction.
//!
//! The engine only moves in response to discrete external signals: a
//! periodic [`tick`](RoundEngine::tick) while the gate is rolling, and the
//! choice / continue / restart signals from the player. Signals that do not
//! match the current phase are ignored rather than corrupting state. The
//! presentation layer reads snapshots through the accessor methods and
//! never mutates the species directly.

use crate::core::constants::{
    CHOICE_REVEAL_CHANCE, MAX_ROUNDS, REBIRTH_FOOD_COST, REBIRTH_POPULATION_FLOOR,
    REBIRTH_SURVIVAL_RATE, ROLL_ANIMATION_TICKS, VICTORY_GENERATION,
};
use crate::core::events::{draw_event, Event};
use crate::core::species::SpeciesState;
use rand::Rng;

/// Phase of the resolution gate for the current event.
///
/// `Idle → Rolling → {ChoicesRevealed | AutoResolved} → Idle`. Most rounds
/// resolve automatically to keep the game moving; a minority reveal a real
/// decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// No event in flight (only after the game has ended).
    Idle,
    /// The die is tumbling; decremented once per external tick.
    Rolling { ticks_left: u32 },
    /// The three choices are selectable; waiting for a choice signal.
    ChoicesRevealed,
    /// Fate already applied a choice; waiting for a continue signal.
    AutoResolved,
}

/// Owns the species state, the event in flight, and the outcome log.
pub struct RoundEngine {
    species: SpeciesState,
    current_event: Option<&'static Event>,
    phase: GatePhase,
    last_outcome: Option<String>,
    log: Vec<String>,
    game_over: bool,
    victory: bool,
}

impl RoundEngine {
    /// Starts a new game: fresh species, first event drawn, gate rolling.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::from_species(SpeciesState::new(), rng)
    }

    /// Starts an engine from a prepared species state.
    pub fn from_species<R: Rng>(species: SpeciesState, rng: &mut R) -> Self {
        Self {
            species,
            current_event: Some(draw_event(rng)),
            phase: GatePhase::Rolling {
                ticks_left: ROLL_ANIMATION_TICKS,
            },
            last_outcome: None,
            log: Vec::new(),
            game_over: false,
            victory: false,
        }
    }

    // ── External signals ────────────────────────────────────────

    /// Periodic tick. Advances the rolling animation; on its final tick a
    /// single uniform draw either reveals the choices or hands the event to
    /// fate. No-op in every other phase.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        if self.game_over {
            return;
        }
        if let GatePhase::Rolling { ticks_left } = self.phase {
            let remaining = ticks_left.saturating_sub(1);
            if remaining > 0 {
                self.phase = GatePhase::Rolling {
                    ticks_left: remaining,
                };
            } else if rng.gen::<f64>() < CHOICE_REVEAL_CHANCE {
                self.phase = GatePhase::ChoicesRevealed;
            } else {
                self.auto_resolve(rng);
            }
        }
    }

    /// Player picked choice `index` (0–2). Applies the bound effect and, if
    /// the species survives, advances the round immediately (unlike the
    /// auto-resolved branch there is no continue step). Rejected as a no-op
    /// unless the gate is in `ChoicesRevealed` and the index is in range.
    pub fn choose<R: Rng>(&mut self, index: usize, rng: &mut R) {
        if self.game_over || self.phase != GatePhase::ChoicesRevealed || index >= 3 {
            return;
        }
        let event = match self.current_event {
            Some(event) => event,
            None => return,
        };
        let (_, effect) = event.choices[index];
        let outcome = effect.apply(&mut self.species, rng);
        self.log.push(format!("{}: {}", event.title, outcome));
        self.last_outcome = Some(outcome);

        if !self.species.is_alive() {
            self.end_in_extinction();
        } else {
            self.advance_round(rng);
        }
    }

    /// Player acknowledged an auto-resolved outcome. Advances the round.
    /// No-op unless the gate is parked in `AutoResolved`.
    pub fn continue_round<R: Rng>(&mut self, rng: &mut R) {
        if self.game_over || self.phase != GatePhase::AutoResolved {
            return;
        }
        self.advance_round(rng);
    }

    /// Full re-initialization: fresh species, empty log, first event drawn.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }

    // ── Internals ───────────────────────────────────────────────

    /// Fate picks one of the three choices uniformly and applies it, then
    /// parks the gate awaiting a continue signal (if the species survives).
    fn auto_resolve<R: Rng>(&mut self, rng: &mut R) {
        let event = match self.current_event {
            Some(event) => event,
            None => return,
        };
        let index = rng.gen_range(0..event.choices.len());
        let (label, effect) = event.choices[index];
        let outcome = effect.apply(&mut self.species, rng);
        self.log.push(format!("{}: {}", event.title, outcome));
        self.last_outcome = Some(format!("The die chose \"{}\" — {}", label, outcome));

        if !self.species.is_alive() {
            self.end_in_extinction();
        } else {
            self.phase = GatePhase::AutoResolved;
        }
    }

    /// Round advancement after a successful resolution: generation rollover
    /// with rebirth-or-starvation at the boundary, then the victory check,
    /// then the next event draw.
    fn advance_round<R: Rng>(&mut self, rng: &mut R) {
        self.species.round += 1;
        if self.species.round > MAX_ROUNDS {
            self.species.round = 1;
            self.species.generation += 1;
            if self.species.food >= REBIRTH_FOOD_COST {
                let reborn = ((self.species.population as f64 * REBIRTH_SURVIVAL_RATE).round()
                    as u32)
                    .max(REBIRTH_POPULATION_FLOOR);
                self.species.population = reborn;
                self.species.food -= REBIRTH_FOOD_COST;
                self.log.push(format!(
                    "Generation {} is born! Population: {}",
                    self.species.generation, reborn
                ));
            } else {
                self.game_over = true;
                self.phase = GatePhase::Idle;
                self.log
                    .push("Not enough food — the species has gone extinct...".to_string());
                return;
            }
        }

        if self.species.generation >= VICTORY_GENERATION {
            self.victory = true;
            self.game_over = true;
            self.phase = GatePhase::Idle;
            return;
        }

        self.current_event = Some(draw_event(rng));
        self.phase = GatePhase::Rolling {
            ticks_left: ROLL_ANIMATION_TICKS,
        };
    }

    fn end_in_extinction(&mut self) {
        self.game_over = true;
        self.phase = GatePhase::Idle;
        self.log.push("The species has gone extinct...".to_string());
    }

    // ── Read-only snapshot ──────────────────────────────────────

    pub fn species(&self) -> &SpeciesState {
        &self.species
    }

    pub fn current_event(&self) -> Option<&'static Event> {
        self.current_event
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn last_outcome(&self) -> Option<&str> {
        self.last_outcome.as_deref()
    }

    /// Historical outcomes, oldest first. Never truncated or re-ordered.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_victory(&self) -> bool {
        self.victory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::all_events;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// Finds a seed whose gate draw lands on the requested branch, by
    /// replaying the engine's exact draw order: one event draw at
    /// construction, then the gate's uniform draw.
    fn rng_forcing_gate(reveal: bool) -> ChaCha8Rng {
        for seed in 0..10_000 {
            let mut probe = ChaCha8Rng::seed_from_u64(seed);
            let _ = probe.gen_range(0..all_events().len());
            let revealed = probe.gen::<f64>() < CHOICE_REVEAL_CHANCE;
            if revealed == reveal {
                return ChaCha8Rng::seed_from_u64(seed);
            }
        }
        panic!("no seed produced the requested gate branch");
    }

    fn roll_through_gate(engine: &mut RoundEngine, rng: &mut ChaCha8Rng) {
        for _ in 0..ROLL_ANIMATION_TICKS {
            engine.tick(rng);
        }
    }

    #[test]
    fn test_new_engine_starts_rolling_with_an_event() {
        let mut rng = test_rng();
        let engine = RoundEngine::new(&mut rng);

        assert!(engine.current_event().is_some());
        assert_eq!(
            engine.phase(),
            GatePhase::Rolling {
                ticks_left: ROLL_ANIMATION_TICKS
            }
        );
        assert!(!engine.is_game_over());
        assert!(!engine.is_victory());
        assert!(engine.log().is_empty());
        assert_eq!(engine.species().round, 1);
        assert_eq!(engine.species().generation, 1);
    }

    #[test]
    fn test_rolling_counts_down_one_per_tick() {
        let mut rng = test_rng();
        let mut engine = RoundEngine::new(&mut rng);

        engine.tick(&mut rng);
        assert_eq!(
            engine.phase(),
            GatePhase::Rolling {
                ticks_left: ROLL_ANIMATION_TICKS - 1
            }
        );
    }

    #[test]
    fn test_gate_reveals_choices_when_draw_is_low() {
        let mut rng = rng_forcing_gate(true);
        let mut engine = RoundEngine::new(&mut rng);

        roll_through_gate(&mut engine, &mut rng);

        assert_eq!(engine.phase(), GatePhase::ChoicesRevealed);
        // Nothing resolved yet
        assert!(engine.log().is_empty());
        assert!(engine.last_outcome().is_none());
    }

    #[test]
    fn test_gate_auto_resolves_when_draw_is_high() {
        let mut rng = rng_forcing_gate(false);
        let mut engine = RoundEngine::new(&mut rng);

        roll_through_gate(&mut engine, &mut rng);

        // Exactly one effect applied without any choice signal
        assert_eq!(engine.phase(), GatePhase::AutoResolved);
        assert_eq!(engine.log().len(), 1);
        assert!(engine.last_outcome().unwrap().starts_with("The die chose"));
        // Parked: further ticks change nothing
        engine.tick(&mut rng);
        assert_eq!(engine.phase(), GatePhase::AutoResolved);
        assert_eq!(engine.log().len(), 1);
    }

    #[test]
    fn test_continue_after_auto_resolution_advances_the_round() {
        let mut rng = rng_forcing_gate(false);
        let mut engine = RoundEngine::new(&mut rng);
        roll_through_gate(&mut engine, &mut rng);

        engine.continue_round(&mut rng);

        assert_eq!(engine.species().round, 2);
        assert_eq!(
            engine.phase(),
            GatePhase::Rolling {
                ticks_left: ROLL_ANIMATION_TICKS
            }
        );
    }

    #[test]
    fn test_choice_advances_the_round_without_a_continue_step() {
        let mut rng = rng_forcing_gate(true);
        let mut engine = RoundEngine::new(&mut rng);
        roll_through_gate(&mut engine, &mut rng);
        assert_eq!(engine.phase(), GatePhase::ChoicesRevealed);

        engine.choose(0, &mut rng);

        assert_eq!(engine.log().len(), 1);
        if !engine.is_game_over() {
            assert_eq!(engine.species().round, 2);
            assert_eq!(
                engine.phase(),
                GatePhase::Rolling {
                    ticks_left: ROLL_ANIMATION_TICKS
                }
            );
        }
    }

    #[test]
    fn test_choose_is_rejected_while_rolling() {
        let mut rng = test_rng();
        let mut engine = RoundEngine::new(&mut rng);

        engine.choose(0, &mut rng);

        assert_eq!(
            engine.phase(),
            GatePhase::Rolling {
                ticks_left: ROLL_ANIMATION_TICKS
            }
        );
        assert!(engine.log().is_empty());
        assert_eq!(engine.species().round, 1);
    }

    #[test]
    fn test_out_of_range_choice_is_rejected() {
        let mut rng = rng_forcing_gate(true);
        let mut engine = RoundEngine::new(&mut rng);
        roll_through_gate(&mut engine, &mut rng);

        engine.choose(3, &mut rng);

        assert_eq!(engine.phase(), GatePhase::ChoicesRevealed);
        assert!(engine.log().is_empty());
    }

    #[test]
    fn test_continue_is_rejected_outside_auto_resolved() {
        let mut rng = test_rng();
        let mut engine = RoundEngine::new(&mut rng);

        engine.continue_round(&mut rng);

        assert_eq!(
            engine.phase(),
            GatePhase::Rolling {
                ticks_left: ROLL_ANIMATION_TICKS
            }
        );
        assert_eq!(engine.species().round, 1);
    }

    #[test]
    fn test_choices_revealed_suspends_until_a_choice_arrives() {
        let mut rng = rng_forcing_gate(true);
        let mut engine = RoundEngine::new(&mut rng);
        roll_through_gate(&mut engine, &mut rng);

        // No timeout: ticks and continues leave the gate untouched
        for _ in 0..500 {
            engine.tick(&mut rng);
            engine.continue_round(&mut rng);
        }

        assert_eq!(engine.phase(), GatePhase::ChoicesRevealed);
        assert!(engine.log().is_empty());
    }

    #[test]
    fn test_extinction_parks_the_engine_and_suppresses_advancement() {
        // With one individual, most effects wipe the species. Scan seeds
        // until a lethal auto-resolution shows up.
        let mut engine = None;
        for seed in 0..10_000 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut species = SpeciesState::new();
            species.population = 1;
            let mut candidate = RoundEngine::from_species(species, &mut rng);
            roll_through_gate(&mut candidate, &mut rng);
            if candidate.is_game_over() {
                engine = Some((candidate, rng));
                break;
            }
        }
        let (mut engine, mut rng) = engine.expect("no seed produced a lethal resolution");

        assert!(!engine.is_victory());
        assert_eq!(engine.phase(), GatePhase::Idle);
        assert_eq!(engine.species().population, 0);
        assert_eq!(engine.species().round, 1);
        assert!(engine
            .log()
            .iter()
            .any(|line| line.contains("gone extinct")));
        // All further signals are no-ops
        engine.tick(&mut rng);
        engine.choose(0, &mut rng);
        engine.continue_round(&mut rng);
        assert_eq!(engine.phase(), GatePhase::Idle);
        assert_eq!(engine.species().round, 1);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut rng = rng_forcing_gate(false);
        let mut engine = RoundEngine::new(&mut rng);
        roll_through_gate(&mut engine, &mut rng);
        engine.continue_round(&mut rng);
        assert!(!engine.log().is_empty());

        engine.restart(&mut rng);

        assert_eq!(engine.species().round, 1);
        assert_eq!(engine.species().generation, 1);
        assert_eq!(engine.species().population, 100);
        assert!(engine.log().is_empty());
        assert!(!engine.is_game_over());
        assert_eq!(
            engine.phase(),
            GatePhase::Rolling {
                ticks_left: ROLL_ANIMATION_TICKS
            }
        );
    }

    #[test]
    fn test_log_is_append_only_across_rounds() {
        let mut rng = test_rng();
        let mut engine = RoundEngine::new(&mut rng);

        let mut last_len = 0;
        for _ in 0..200 {
            engine.tick(&mut rng);
            match engine.phase() {
                GatePhase::ChoicesRevealed => engine.choose(0, &mut rng),
                GatePhase::AutoResolved => engine.continue_round(&mut rng),
                _ => {}
            }
            assert!(engine.log().len() >= last_len);
            last_len = engine.log().len();
            if engine.is_game_over() {
                break;
            }
        }
    }
}
