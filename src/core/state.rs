//! Game state: one immutable snapshot of one game.
//!
//! A `GameState` is created once by `new_game` and then superseded, never
//! mutated in place: each `make_move` returns a brand-new value and the
//! caller rebinds it. The `im` persistent collections make that supersession
//! cheap, and the absence of shared storage makes independent games on
//! separate threads safe without coordination.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::status::{GameProgress, GuessOutcome, Status};
use super::word::Word;

/// Immutable snapshot of one game's progress.
///
/// Fields are crate-visible so the transition pipeline can build successor
/// states; external code reads through the accessors or projects a
/// [`Status`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The secret word with per-slot reveal flags. Length fixed at creation.
    pub(crate) word: Word,

    /// Display strings derived from `word`. Rebuilt on every reveal, never
    /// independently mutated.
    pub(crate) letters: Vector<String>,

    /// Letters submitted so far. Insertion is idempotent.
    pub(crate) guessed: ImHashSet<char>,

    /// The most recent guess, or `None` before any move.
    pub(crate) last_guess: Option<char>,

    /// Turns remaining. Monotonically non-increasing, floored at 0.
    pub(crate) turns_left: u32,

    /// Where the game stands. Terminal progress never changes.
    pub(crate) progress: GameProgress,

    /// Outcome of the most recent move, or `None` before any move.
    pub(crate) last_outcome: Option<GuessOutcome>,

    /// Placeholder glyph, captured from config so `letters` can be rebuilt
    /// consistently across transitions.
    pub(crate) placeholder: char,
}

impl GameState {
    /// Create a fresh game for `word` with the default configuration.
    ///
    /// ## Panics
    ///
    /// Panics if `word` is empty.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self::with_config(word, &GameConfig::default())
    }

    /// Create a fresh game for `word` with an explicit configuration.
    ///
    /// ## Panics
    ///
    /// Panics if `word` is empty.
    #[must_use]
    pub fn with_config(word: &str, config: &GameConfig) -> Self {
        let word = Word::hidden(word);
        let letters = word.render(config.placeholder);

        Self {
            word,
            letters,
            guessed: ImHashSet::new(),
            last_guess: None,
            turns_left: config.starting_turns,
            progress: GameProgress::InProgress,
            last_outcome: None,
            placeholder: config.placeholder,
        }
    }

    /// Word length in code points.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Turns remaining before the game is lost.
    #[must_use]
    pub fn turns_left(&self) -> u32 {
        self.turns_left
    }

    /// Where the game stands.
    #[must_use]
    pub fn progress(&self) -> GameProgress {
        self.progress
    }

    /// Outcome of the most recent move, or `None` before any move.
    #[must_use]
    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.last_outcome
    }

    /// The most recent guess, or `None` before any move.
    #[must_use]
    pub fn last_guess(&self) -> Option<char> {
        self.last_guess
    }

    /// Whether `guess` has been submitted before.
    #[must_use]
    pub fn has_guessed(&self, guess: char) -> bool {
        self.guessed.contains(&guess)
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.progress.is_terminal()
    }

    /// Project this state into its externally visible status.
    ///
    /// Total over any well-formed state; never fails. `guessed` is sorted
    /// for stable display.
    #[must_use]
    pub fn status(&self) -> Status {
        let mut guessed: Vec<char> = self.guessed.iter().copied().collect();
        guessed.sort_unstable();

        Status {
            last_guess: self.last_guess,
            progress: self.progress,
            outcome: self.last_outcome,
            turns_left: self.turns_left,
            letters: self.letters.iter().cloned().collect(),
            guessed,
        }
    }
}
