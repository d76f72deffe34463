//! The word-source capability.
//!
//! The engine itself never picks words; `new_game` takes the secret word as
//! an argument. `reset_game` needs a fresh word, and that dependency is
//! modeled as a capability: anything that can produce one word string on
//! demand. [`WordList`] is a deterministic seeded implementation for real
//! clients; [`FixedWord`] lets tests and scripted clients inject a known
//! word.

use crate::core::GameRng;

/// A built-in word list so a deterministic source works out of the box.
pub const DEFAULT_WORDS: &[&str] = &[
    "wombat", "alpaca", "badger", "cobra", "donkey", "ferret", "gecko", "heron", "iguana",
    "jackal", "koala", "lemur", "marmot", "newt", "ocelot", "python", "quokka", "raccoon",
    "stoat", "toucan", "urchin", "vole", "walrus", "yak", "zebra",
];

/// A capability that produces one word string on demand.
pub trait WordSource {
    /// Produce the next secret word.
    fn next_word(&mut self) -> String;
}

/// Word source that always produces the same word.
///
/// Useful in tests and in clients that let one player choose the word for
/// another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedWord(String);

impl FixedWord {
    /// Create a source that always produces `word`.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

impl WordSource for FixedWord {
    fn next_word(&mut self) -> String {
        self.0.clone()
    }
}

/// Deterministic word source: uniform choice from an owned list.
///
/// Same seed, same word sequence. Use [`WordList::fork`] to split off an
/// independent source for another game.
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<String>,
    rng: GameRng,
}

impl WordList {
    /// Create a word source over `words`.
    ///
    /// ## Panics
    ///
    /// Panics if `words` is empty.
    #[must_use]
    pub fn new(words: Vec<String>, seed: u64) -> Self {
        assert!(!words.is_empty(), "Word list must be non-empty");

        Self {
            words,
            rng: GameRng::new(seed),
        }
    }

    /// Create a word source over the built-in [`DEFAULT_WORDS`].
    #[must_use]
    pub fn with_defaults(seed: u64) -> Self {
        Self::new(DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(), seed)
    }

    /// Split off an independent word source with its own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            words: self.words.clone(),
            rng: self.rng.fork(),
        }
    }

    /// Number of words in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn next_word(&mut self) -> String {
        let idx = self.rng.gen_index(0..self.words.len());
        self.words[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_draws_from_list() {
        let mut source = WordList::with_defaults(42);

        for _ in 0..50 {
            let word = source.next_word();
            assert!(DEFAULT_WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn test_word_list_is_deterministic() {
        let mut source1 = WordList::with_defaults(42);
        let mut source2 = WordList::with_defaults(42);

        for _ in 0..20 {
            assert_eq!(source1.next_word(), source2.next_word());
        }
    }

    #[test]
    fn test_forked_sources_diverge() {
        let mut source = WordList::with_defaults(42);
        let mut forked = source.fork();

        let seq1: Vec<_> = (0..20).map(|_| source.next_word()).collect();
        let seq2: Vec<_> = (0..20).map(|_| forked.next_word()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_empty_list_rejected() {
        let _ = WordList::new(Vec::new(), 42);
    }

    #[test]
    fn test_fixed_word_repeats() {
        let mut source = FixedWord::new("wombat");

        assert_eq!(source.next_word(), "wombat");
        assert_eq!(source.next_word(), "wombat");
    }
}
