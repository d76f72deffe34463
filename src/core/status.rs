//! Status tags and the externally visible status projection.
//!
//! `GameProgress` and `GuessOutcome` are closed enums rather than strings,
//! so invalid tag combinations are unrepresentable. `Status` is the
//! projection a presentation layer renders; it never exposes the unrevealed
//! letters of the secret word.

use serde::{Deserialize, Serialize};

/// Where the game stands. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameProgress {
    /// Guesses are still being accepted.
    InProgress,
    /// Every letter of the word has been revealed.
    Won,
    /// Turns ran out on a bad guess.
    Lost,
}

impl GameProgress {
    /// Whether the game has ended. Terminal progress never changes.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl std::fmt::Display for GameProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Outcome of the most recent move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess occurs in the word; matching slots were revealed.
    Good,
    /// The guess does not occur in the word; a turn was consumed.
    Bad,
    /// The guess was already submitted earlier; nothing advanced.
    AlreadyGuessed,
    /// The game was already over when the guess arrived; nothing advanced.
    GameOver,
}

impl GuessOutcome {
    /// Whether the move advanced the game (consumed a turn or revealed
    /// letters).
    #[must_use]
    pub const fn advanced(self) -> bool {
        matches!(self, Self::Good | Self::Bad)
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good guess"),
            Self::Bad => write!(f, "bad guess"),
            Self::AlreadyGuessed => write!(f, "already guessed"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}

/// Externally visible snapshot of a game, derived from a `GameState`.
///
/// Everything a presentation layer needs to render one game: the display
/// letters, the remaining turns, the outcome tags, and the letters guessed
/// so far (sorted, for stable display). The secret word itself is not
/// exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The most recent guess, or `None` before any move.
    pub last_guess: Option<char>,

    /// Where the game stands.
    pub progress: GameProgress,

    /// Outcome of the most recent move, or `None` before any move.
    pub outcome: Option<GuessOutcome>,

    /// Turns remaining before the game is lost.
    pub turns_left: u32,

    /// Display strings, one per word position: the letter if revealed, the
    /// placeholder glyph otherwise.
    pub letters: Vec<String>,

    /// Letters guessed so far, sorted.
    pub guessed: Vec<char>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_progress() {
        assert!(!GameProgress::InProgress.is_terminal());
        assert!(GameProgress::Won.is_terminal());
        assert!(GameProgress::Lost.is_terminal());
    }

    #[test]
    fn test_outcome_advanced() {
        assert!(GuessOutcome::Good.advanced());
        assert!(GuessOutcome::Bad.advanced());
        assert!(!GuessOutcome::AlreadyGuessed.advanced());
        assert!(!GuessOutcome::GameOver.advanced());
    }

    #[test]
    fn test_display_tags() {
        assert_eq!(GameProgress::Won.to_string(), "won");
        assert_eq!(GuessOutcome::AlreadyGuessed.to_string(), "already guessed");
    }

    #[test]
    fn test_status_serialization() {
        let status = Status {
            last_guess: Some('a'),
            progress: GameProgress::InProgress,
            outcome: Some(GuessOutcome::Good),
            turns_left: 10,
            letters: vec!["_".into(), "a".into()],
            guessed: vec!['a'],
        };

        let json = serde_json::to_string(&status).unwrap();
        let deserialized: Status = serde_json::from_str(&json).unwrap();

        assert_eq!(status, deserialized);
    }
}
