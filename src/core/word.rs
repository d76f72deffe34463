//! The secret word and its per-letter reveal state.
//!
//! ## Slot
//!
//! One (letter, revealed) pair per code point of the secret word. The slot
//! sequence is fixed at creation and never resized.
//!
//! ## Word
//!
//! A persistent sequence of slots. Reveal operations return a new `Word`
//! rather than mutating in place, so a superseded state and its successor
//! share structure.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One position of the secret word: the letter and whether a correct guess
/// has revealed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// The secret letter at this position.
    pub letter: char,

    /// Whether the letter has been revealed by a correct guess.
    pub revealed: bool,
}

impl Slot {
    /// Create an unrevealed slot for a letter.
    #[must_use]
    pub const fn hidden(letter: char) -> Self {
        Self {
            letter,
            revealed: false,
        }
    }
}

/// The secret word as a fixed-length sequence of slots, in word order.
///
/// Matching is case-sensitive, single code point, exact. Length is fixed at
/// creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    slots: Vector<Slot>,
}

impl Word {
    /// Build a word with every slot hidden, one slot per code point.
    ///
    /// ## Panics
    ///
    /// Panics if `word` is empty. A game needs at least one letter.
    #[must_use]
    pub fn hidden(word: &str) -> Self {
        assert!(!word.is_empty(), "Secret word must be non-empty");

        Self {
            slots: word.chars().map(Slot::hidden).collect(),
        }
    }

    /// Number of slots (code points).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the word has no slots. Always false for words built by
    /// [`Word::hidden`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `guess` occurs anywhere in the word.
    #[must_use]
    pub fn contains(&self, guess: char) -> bool {
        self.slots.iter().any(|slot| slot.letter == guess)
    }

    /// Positions whose letter equals `guess`.
    ///
    /// SmallVec covers the common case of a letter occurring a handful of
    /// times without heap allocation.
    #[must_use]
    pub fn positions_of(&self, guess: char) -> SmallVec<[usize; 8]> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.letter == guess)
            .map(|(i, _)| i)
            .collect()
    }

    /// Return a new word with every slot matching `guess` revealed.
    ///
    /// Slots that do not match are carried over unchanged; already-revealed
    /// slots stay revealed.
    #[must_use]
    pub fn reveal(&self, guess: char) -> Self {
        let slots = self
            .slots
            .iter()
            .map(|slot| {
                if slot.letter == guess {
                    Slot {
                        revealed: true,
                        ..*slot
                    }
                } else {
                    *slot
                }
            })
            .collect();

        Self { slots }
    }

    /// Whether every slot has been revealed.
    #[must_use]
    pub fn fully_revealed(&self) -> bool {
        self.slots.iter().all(|slot| slot.revealed)
    }

    /// Display strings: the literal letter when revealed, `placeholder`
    /// otherwise. Same length as the word, in word order.
    #[must_use]
    pub fn render(&self, placeholder: char) -> Vector<String> {
        self.slots
            .iter()
            .map(|slot| {
                if slot.revealed {
                    slot.letter.to_string()
                } else {
                    placeholder.to_string()
                }
            })
            .collect()
    }

    /// Iterate over slots in word order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_builds_one_slot_per_code_point() {
        let word = Word::hidden("wombat");

        assert_eq!(word.len(), 6);
        assert!(word.slots().all(|slot| !slot.revealed));
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_hidden_rejects_empty_word() {
        let _ = Word::hidden("");
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let word = Word::hidden("Wombat");

        assert!(word.contains('W'));
        assert!(!word.contains('w'));
    }

    #[test]
    fn test_positions_of_finds_every_occurrence() {
        let word = Word::hidden("banana");

        assert_eq!(word.positions_of('a').as_slice(), &[1, 3, 5]);
        assert_eq!(word.positions_of('b').as_slice(), &[0]);
        assert!(word.positions_of('z').is_empty());
    }

    #[test]
    fn test_reveal_only_touches_matching_slots() {
        let word = Word::hidden("banana");
        let revealed = word.reveal('a');

        let flags: Vec<bool> = revealed.slots().map(|slot| slot.revealed).collect();
        assert_eq!(flags, vec![false, true, false, true, false, true]);

        // Input word untouched.
        assert!(word.slots().all(|slot| !slot.revealed));
    }

    #[test]
    fn test_reveal_miss_is_identity() {
        let word = Word::hidden("banana").reveal('a');
        let after = word.reveal('z');

        assert_eq!(word, after);
    }

    #[test]
    fn test_fully_revealed() {
        let word = Word::hidden("ab");

        assert!(!word.fully_revealed());
        assert!(!word.reveal('a').fully_revealed());
        assert!(word.reveal('a').reveal('b').fully_revealed());
    }

    #[test]
    fn test_render_uses_placeholder_for_hidden_slots() {
        let word = Word::hidden("wombat").reveal('a');
        let letters: Vec<String> = word.render('_').iter().cloned().collect();

        assert_eq!(letters, vec!["_", "_", "_", "_", "a", "_"]);
    }

    #[test]
    fn test_render_multi_byte_code_points() {
        let word = Word::hidden("näve").reveal('ä');
        let letters: Vec<String> = word.render('_').iter().cloned().collect();

        assert_eq!(letters, vec!["_", "ä", "_", "_"]);
    }
}
