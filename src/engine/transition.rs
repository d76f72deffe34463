//! The guess-validation and state-transition pipeline.
//!
//! `make_move` applies a fixed sequence of small pure stages:
//!
//! 1. Record the guess as `last_guess` (unconditional).
//! 2. Classify: `GameOver` if the game already ended, `AlreadyGuessed` if
//!    the guess was submitted before, otherwise `Good`/`Bad` by exact
//!    code-point match against the word.
//! 3. Moves that did not advance (`GameOver`, `AlreadyGuessed`) stop here;
//!    everything else in the state is carried over unchanged.
//! 4. Record the guess into the guessed set.
//! 5. `Bad`: consume a turn (saturating at 0); the game is lost when the
//!    budget reaches 0.
//! 6. `Good`: reveal matching slots, rebuild the display letters; the game
//!    is won when no placeholder remains.
//!
//! Every stage is a pure function of the input state; the caller receives a
//! new state and must thread it into the next call.

use crate::core::{GameConfig, GameProgress, GameState, GuessOutcome, Status};
use crate::words::WordSource;

/// Start a fresh game for `word` with the default configuration.
///
/// ## Panics
///
/// Panics if `word` is empty.
#[must_use]
pub fn new_game(word: &str) -> GameState {
    GameState::new(word)
}

/// Start a fresh game for `word` with an explicit configuration.
///
/// ## Panics
///
/// Panics if `word` is empty.
#[must_use]
pub fn new_game_with(word: &str, config: &GameConfig) -> GameState {
    GameState::with_config(word, config)
}

/// Validate and apply one guessed character.
///
/// Returns the successor state and its status snapshot. The input state is
/// never mutated; the caller rebinds the returned state. There is no error
/// channel: a character that cannot occur in the word is simply a bad
/// guess, a repeat is `AlreadyGuessed`, and a guess after the game ended is
/// `GameOver` with nothing else changed.
#[must_use]
pub fn make_move(state: &GameState, guess: char) -> (GameState, Status) {
    let outcome = classify(state, guess);

    let mut next = state.clone();
    next.last_guess = Some(guess);
    next.last_outcome = Some(outcome);

    match outcome {
        GuessOutcome::GameOver | GuessOutcome::AlreadyGuessed => {}
        GuessOutcome::Bad => {
            next.guessed.insert(guess);
            apply_bad_guess(&mut next);
        }
        GuessOutcome::Good => {
            next.guessed.insert(guess);
            apply_good_guess(&mut next, guess);
        }
    }

    tracing::debug!(
        %guess,
        ?outcome,
        turns_left = next.turns_left,
        progress = %next.progress,
        "applied move"
    );

    let status = next.status();
    (next, status)
}

/// Project a state into its externally visible status.
///
/// Total over any well-formed state.
#[must_use]
pub fn get_status(state: &GameState) -> Status {
    state.status()
}

/// Discard a state and start over with a fresh word from `source`.
///
/// The input state only marks which game is being replaced; nothing of it
/// survives into the result.
#[must_use]
pub fn reset_game<S: WordSource + ?Sized>(_state: &GameState, source: &mut S) -> GameState {
    new_game(&source.next_word())
}

/// [`reset_game`] with an explicit configuration.
#[must_use]
pub fn reset_game_with<S: WordSource + ?Sized>(
    _state: &GameState,
    source: &mut S,
    config: &GameConfig,
) -> GameState {
    new_game_with(&source.next_word(), config)
}

/// Classify a guess against a state without applying it.
fn classify(state: &GameState, guess: char) -> GuessOutcome {
    if state.progress.is_terminal() {
        return GuessOutcome::GameOver;
    }
    if state.guessed.contains(&guess) {
        return GuessOutcome::AlreadyGuessed;
    }
    if state.word.contains(guess) {
        GuessOutcome::Good
    } else {
        GuessOutcome::Bad
    }
}

/// Consume a turn and check for loss. Saturates at 0 so repeated bad
/// guesses can never underflow the budget.
fn apply_bad_guess(next: &mut GameState) {
    next.turns_left = next.turns_left.saturating_sub(1);
    if next.turns_left == 0 {
        next.progress = GameProgress::Lost;
        tracing::debug!("turns exhausted, game lost");
    }
}

/// Reveal matching slots, rebuild the display letters, and check for win.
fn apply_good_guess(next: &mut GameState, guess: char) {
    let hits = next.word.positions_of(guess);
    tracing::trace!(%guess, hits = hits.len(), "revealing matched slots");
    next.word = next.word.reveal(guess);
    next.letters = next.word.render(next.placeholder);
    if next.word.fully_revealed() {
        next.progress = GameProgress::Won;
        tracing::debug!("word fully revealed, game won");
    }
}
