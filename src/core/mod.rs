//! Core value types: game state, word slots, status tags, configuration,
//! RNG.

pub mod config;
pub mod rng;
pub mod state;
pub mod status;
pub mod word;

pub use config::{GameConfig, DEFAULT_PLACEHOLDER, DEFAULT_STARTING_TURNS};
pub use rng::GameRng;
pub use state::GameState;
pub use status::{GameProgress, GuessOutcome, Status};
pub use word::{Slot, Word};
