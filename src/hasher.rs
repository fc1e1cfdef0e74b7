//! Corpus-calibrated anagram hasher.

use std::fmt;

use tracing::trace;

use crate::error::Result;
use crate::groups::AnagramGroups;
use crate::layout::BitLayout;
use crate::letters::{LetterCounts, letter_indices};

/// Anagram hasher over a corpus-calibrated [`BitLayout`].
///
/// Two words are anagrams exactly when their fingerprints are equal, provided
/// neither word holds more of any letter than the calibrating corpus did.
/// The layout is fixed at construction; every method takes `&self`, so one
/// hasher can be shared freely between threads.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedAnagramHasher {
    layout: BitLayout,
}

impl PackedAnagramHasher {
    /// Calibrates a hasher from `corpus`.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::CapacityExceeded`](crate::PackError::CapacityExceeded)
    /// if the corpus needs more than 64 bits.
    pub fn new<I>(corpus: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        BitLayout::calibrate(corpus).map(Self::from_layout)
    }

    /// Wraps an already calibrated layout.
    #[must_use]
    pub const fn from_layout(layout: BitLayout) -> Self {
        Self { layout }
    }

    /// The layout fingerprints are packed with.
    #[must_use]
    pub const fn layout(&self) -> &BitLayout {
        &self.layout
    }

    /// Total width of all letter slots.
    #[must_use]
    pub const fn total_bits(&self) -> u32 {
        self.layout.total_bits()
    }

    /// Fingerprint of `word`.
    ///
    /// Letters are case-folded and everything outside `a..=z` is ignored.
    /// The empty string hashes to 0. A letter occurring more often than the
    /// corpus maximum carries into the neighbouring slot unnoticed; use
    /// [`hash_checked`](Self::hash_checked) to detect that.
    #[must_use]
    pub fn hash(&self, word: &str) -> u64 {
        letter_indices(word).fold(0, |h, i| self.layout.bump(h, i))
    }

    /// Fingerprint of `word`, or `None` if some letter overflows its slot.
    ///
    /// Agrees with [`hash`](Self::hash) whenever it returns `Some`.
    #[must_use]
    pub fn hash_checked(&self, word: &str) -> Option<u64> {
        let counts = LetterCounts::from_word(word);
        self.layout
            .fits(&counts)
            .then(|| self.layout.pack(&counts))
    }

    /// Returns `true` if `word1` and `word2` have equal fingerprints.
    #[must_use]
    pub fn are_anagrams(&self, word1: &str, word2: &str) -> bool {
        self.hash(word1) == self.hash(word2)
    }

    /// Buckets `words` by fingerprint, keeping first-seen order per bucket.
    #[must_use]
    pub fn group_anagrams<I>(&self, words: I) -> AnagramGroups
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut groups = AnagramGroups::new();
        self.extend_groups(&mut groups, words);
        groups
    }

    /// Streams more `words` into an existing grouping.
    pub fn extend_groups<I>(&self, groups: &mut AnagramGroups, words: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for word in words {
            let word = word.into();
            let fingerprint = self.hash(&word);
            trace!(%word, fingerprint, "grouping word");
            groups.insert(fingerprint, word);
        }
    }
}

impl fmt::Display for PackedAnagramHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedAnagramHasher(total_bits={})", self.total_bits())
    }
}

impl fmt::Debug for PackedAnagramHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedAnagramHasher")
            .field("layout", &self.layout)
            .finish()
    }
}
