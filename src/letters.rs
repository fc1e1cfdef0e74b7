//! Letter extraction and per-word frequency counting.
//!
//! Only the 26 ASCII letters take part in a fingerprint. Input is lowercased
//! first (full Unicode lowercasing), then everything outside `a..=z` is
//! dropped, so punctuation, digits and whitespace never reach a slot.

use std::fmt;

use crate::LETTERS;

/// Yields the alphabet index (`a = 0` .. `z = 25`) of every letter in `word`.
pub fn letter_indices(word: &str) -> impl Iterator<Item = usize> + '_ {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .map(|c| c as usize - 'a' as usize)
}

/// Occurrence count of each letter in a word (or the running maximum over a
/// corpus, see [`merge_max`](Self::merge_max)).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterCounts([usize; LETTERS]);

impl LetterCounts {
    /// All counts zero.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; LETTERS])
    }

    /// Counts the letters of `word`.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = Self::new();
        for i in letter_indices(word) {
            counts.0[i] += 1;
        }
        counts
    }

    /// Count for the letter at alphabet index `letter`.
    ///
    /// # Panics
    ///
    /// Panics if `letter >= 26`.
    #[must_use]
    pub const fn get(&self, letter: usize) -> usize {
        self.0[letter]
    }

    /// Number of letters counted, ignoring filtered characters.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Raises each count to at least the matching count in `other`.
    pub fn merge_max(&mut self, other: &Self) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0) {
            *mine = (*mine).max(theirs);
        }
    }

    /// Iterates counts in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Returns the raw count array.
    #[must_use]
    pub const fn as_array(&self) -> &[usize; LETTERS] {
        &self.0
    }
}

impl Default for LetterCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[usize; LETTERS]> for LetterCounts {
    fn from(counts: [usize; LETTERS]) -> Self {
        Self(counts)
    }
}

// Only non-zero letters, keyed by the letter itself.
impl fmt::Debug for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                ('a'..='z')
                    .zip(self.0)
                    .filter(|&(_, count)| count > 0),
            )
            .finish()
    }
}
