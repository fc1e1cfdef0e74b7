//! Packed bit-width anagram hashing.
//!
//! Maps a word to an integer fingerprint such that two words are anagrams
//! iff their fingerprints are equal. Each letter's occurrence count is
//! stored in its own bit slot; once hashed, anagram equality is a single
//! integer comparison regardless of word length.
//!
//! # Schemes
//!
//! - [`PackedAnagramHasher`]: slot widths calibrated from a corpus so that
//!   all 26 slots fit one `u64`. Construction fails with
//!   [`PackError::CapacityExceeded`] when they do not.
//! - [`quick_hash`]: no corpus, fixed 3-bit slots, 78-bit `u128` result.
//!
//! ```
//! use packed_anagram_hash::{PackedAnagramHasher, are_anagrams};
//!
//! let hasher = PackedAnagramHasher::new(["store", "rotes", "tores"])?;
//! assert!(hasher.are_anagrams("store", "rotes"));
//! assert!(are_anagrams("listen", "silent"));
//! # Ok::<(), packed_anagram_hash::PackError>(())
//! ```
//!
//! # References
//!
//! - Brown — "Packed Bit-Width Anagram Hashing",
//!   <https://doi.org/10.5281/zenodo.18167975>

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod groups;
pub mod layout;
pub mod letters;
pub mod quick;

mod hasher;

#[cfg(test)]
mod tests;

pub use error::{PackError, Result};
pub use groups::{AnagramGroups, Group, GroupsCheckpoint};
pub use hasher::PackedAnagramHasher;
pub use layout::BitLayout;
pub use letters::LetterCounts;
pub use quick::{are_anagrams, quick_hash};

/// Number of letters with a slot (`a..=z`).
pub const LETTERS: usize = 26;

/// Width of the register a calibrated layout must fit.
pub const REGISTER_BITS: u32 = u64::BITS;
