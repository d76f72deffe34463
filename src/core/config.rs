//! Game configuration.
//!
//! The engine hardcodes no turn budget or display glyph; a game captures
//! them from `GameConfig` at creation. The defaults (10 turns, `_`
//! placeholder) match the classic rules.

use serde::{Deserialize, Serialize};

/// Turn budget a fresh game starts with under the default configuration.
pub const DEFAULT_STARTING_TURNS: u32 = 10;

/// Placeholder glyph shown for unrevealed letters under the default
/// configuration.
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Configuration for a game.
///
/// ## Example
///
/// ```
/// use hangman_engine::GameConfig;
///
/// let config = GameConfig::new().with_starting_turns(6).with_placeholder('?');
/// assert_eq!(config.starting_turns, 6);
/// assert_eq!(config.placeholder, '?');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Turn budget at game start. Each bad guess consumes one.
    pub starting_turns: u32,

    /// Display glyph for unrevealed letters.
    pub placeholder: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_turns: DEFAULT_STARTING_TURNS,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting turn budget.
    #[must_use]
    pub fn with_starting_turns(mut self, turns: u32) -> Self {
        self.starting_turns = turns;
        self
    }

    /// Set the placeholder glyph.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.starting_turns, 10);
        assert_eq!(config.placeholder, '_');
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new().with_starting_turns(3).with_placeholder('*');

        assert_eq!(config.starting_turns, 3);
        assert_eq!(config.placeholder, '*');
    }
}
