//! Corpus-free fingerprints with a fixed 3-bit slot per letter.
//!
//! Letter `i` occupies bits `3i .. 3i + 3`, for a 78-bit span, so the result
//! is a `u128`. A slot holds up to 7 occurrences; an eighth carries into the
//! next letter without any check.

use crate::letters::letter_indices;

/// Bits reserved per letter.
pub const QUICK_SLOT_BITS: u32 = 3;

/// Total span of all 26 slots.
pub const QUICK_SPAN_BITS: u32 = QUICK_SLOT_BITS * crate::LETTERS as u32;

/// Fixed-width fingerprint of `word`.
///
/// Same folding and filtering as [`PackedAnagramHasher::hash`](crate::PackedAnagramHasher::hash);
/// the empty string hashes to 0.
#[must_use]
pub fn quick_hash(word: &str) -> u128 {
    letter_indices(word).fold(0, |h: u128, i| {
        h.wrapping_add(1 << (i as u32 * QUICK_SLOT_BITS))
    })
}

/// Returns `true` if `word1` and `word2` have equal [`quick_hash`]es.
#[must_use]
pub fn are_anagrams(word1: &str, word2: &str) -> bool {
    quick_hash(word1) == quick_hash(word2)
}
