//! # hangman-engine
//!
//! A pure, stateless-transition game engine for Hangman.
//!
//! ## Design Principles
//!
//! 1. **Value Threading**: Every operation takes a state and returns a new
//!    one. Nothing is mutated in place, nothing is shared; the caller holds
//!    and rebinds the latest value. Independent games on separate threads
//!    need no coordination.
//!
//! 2. **Closed Status Enums**: `GameProgress` and `GuessOutcome` are sum
//!    types, so invalid tag combinations are unrepresentable.
//!
//! 3. **Total Functions**: There is no error channel. Repeats, misses, and
//!    post-game guesses are domain outcomes in the data, not failures.
//!
//! 4. **Capabilities Over Globals**: Word selection is a trait the client
//!    supplies; the engine never reads a dictionary itself.
//!
//! ## Example
//!
//! ```
//! use hangman_engine::{make_move, new_game, GameProgress, GuessOutcome};
//!
//! let state = new_game("wombat");
//!
//! let (state, status) = make_move(&state, 'a');
//! assert_eq!(status.outcome, Some(GuessOutcome::Good));
//! assert_eq!(status.letters, vec!["_", "_", "_", "_", "a", "_"]);
//! assert_eq!(status.turns_left, 10);
//!
//! let (state, status) = make_move(&state, 'c');
//! assert_eq!(status.outcome, Some(GuessOutcome::Bad));
//! assert_eq!(status.turns_left, 9);
//!
//! let (_, status) = make_move(&state, 'a');
//! assert_eq!(status.outcome, Some(GuessOutcome::AlreadyGuessed));
//! assert_eq!(status.turns_left, 9);
//! ```
//!
//! ## Modules
//!
//! - `core`: Game state, word slots, status tags, configuration, RNG
//! - `engine`: The transition pipeline (`new_game`, `make_move`,
//!   `get_status`, `reset_game`)
//! - `words`: The word-source capability and implementations

pub mod core;
pub mod engine;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameProgress, GameRng, GameState, GuessOutcome, Slot, Status, Word,
    DEFAULT_PLACEHOLDER, DEFAULT_STARTING_TURNS,
};

pub use crate::engine::{get_status, make_move, new_game, new_game_with, reset_game, reset_game_with};

pub use crate::words::{FixedWord, WordList, WordSource, DEFAULT_WORDS};
