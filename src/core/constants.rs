// Round and generation structure
pub const MAX_ROUNDS: u32 = 5;
pub const VICTORY_GENERATION: u32 = 10;

// Starting resources
pub const STARTING_POPULATION: u32 = 100;
pub const STARTING_FOOD: i32 = 50;

// Generational rebirth
pub const REBIRTH_FOOD_COST: i32 = 10;
pub const REBIRTH_SURVIVAL_RATE: f64 = 0.8;
pub const REBIRTH_POPULATION_FLOOR: u32 = 50;

// Resolution gate
// After the roll animation finishes, one uniform draw below this threshold
// reveals the three choices; otherwise fate picks one at random.
pub const CHOICE_REVEAL_CHANCE: f64 = 0.4;
pub const ROLL_ANIMATION_TICKS: u32 = 20;

// Terminal frame pacing
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS

// Outcome log lines shown in the history panel
pub const LOG_PANEL_LINES: usize = 8;
