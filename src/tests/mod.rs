mod properties;
mod traits;

use crate::PackedAnagramHasher;

/// Reference corpus: five anagram classes, a singleton and a run of
/// repeated `a`s.
pub const SAMPLE_CORPUS: [&str; 18] = [
    "store", "rotes", "tores", "stroe", "stare", "rates", "tears", "aster", "listen", "silent",
    "enlist", "cat", "act", "tac", "dog", "aaa", "aa", "a",
];

pub fn sample_hasher() -> PackedAnagramHasher {
    PackedAnagramHasher::new(SAMPLE_CORPUS).expect("sample corpus fits 64 bits")
}
