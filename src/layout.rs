//! Corpus-calibrated bit layout.
//!
//! Each letter gets a contiguous slot exactly as wide as the largest count
//! observed for it in the corpus. Slots are packed low-to-high in alphabet
//! order with no padding:
//!
//! ```text
//!  bit 63                                                     bit 0
//!  ┌──────── unused ────────┬─ z ─┬ ... ┬─── b ───┬───── a ─────┐
//!  │                        │     │     │         │             │
//!  └────────────────────────┴─────┴ ... ┴─────────┴─────────────┘
//!                     offset(z)       offset(b)    offset(a) = 0
//! ```
//!
//! A letter absent from the corpus has width 0 and shares its offset with
//! the next letter.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{PackError, Result};
use crate::letters::LetterCounts;
use crate::{LETTERS, REGISTER_BITS};

/// Per-letter slot widths and offsets inside a 64-bit register.
///
/// Invariants:
/// - `widths[i] == 0` iff the calibrating maximum for letter `i` was 0,
///   otherwise it is the bit-length of that maximum.
/// - `offsets[i + 1] - offsets[i] == widths[i]`.
/// - `total_bits <= 64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitLayout {
    widths: [u32; LETTERS],
    offsets: [u32; LETTERS],
    total_bits: u32,
}

impl BitLayout {
    /// Calibrates a layout from the per-letter maxima over `corpus`.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::CapacityExceeded`] if the widths sum to more
    /// than 64 bits.
    pub fn calibrate<I>(corpus: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut max_counts = LetterCounts::new();
        let mut words = 0_usize;
        for word in corpus {
            max_counts.merge_max(&LetterCounts::from_word(word.as_ref()));
            words += 1;
        }
        let layout = Self::from_max_counts(&max_counts)?;
        debug!(words, total_bits = layout.total_bits, "calibrated bit layout");
        Ok(layout)
    }

    /// Builds the layout for the given per-letter maxima.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::CapacityExceeded`] if the widths sum to more
    /// than 64 bits.
    pub fn from_max_counts(max_counts: &LetterCounts) -> Result<Self> {
        let mut widths = [0; LETTERS];
        let mut offsets = [0; LETTERS];
        let mut offset = 0_u32;
        for (i, max) in max_counts.iter().enumerate() {
            widths[i] = bit_length(max);
            offsets[i] = offset;
            offset += widths[i];
        }

        if offset > REGISTER_BITS {
            warn!(required_bits = offset, "corpus exceeds register capacity");
            return Err(PackError::CapacityExceeded {
                required_bits: offset,
                register_bits: REGISTER_BITS,
            });
        }

        Ok(Self {
            widths,
            offsets,
            total_bits: offset,
        })
    }

    /// Slot width of the letter at alphabet index `letter`.
    ///
    /// # Panics
    ///
    /// Panics if `letter >= 26`.
    #[must_use]
    pub const fn width(&self, letter: usize) -> u32 {
        self.widths[letter]
    }

    /// Bit position of the lowest bit of the letter's slot.
    ///
    /// # Panics
    ///
    /// Panics if `letter >= 26`.
    #[must_use]
    pub const fn offset(&self, letter: usize) -> u32 {
        self.offsets[letter]
    }

    /// Largest count the letter's slot holds without carrying.
    ///
    /// # Panics
    ///
    /// Panics if `letter >= 26`.
    #[must_use]
    pub const fn capacity(&self, letter: usize) -> u64 {
        match self.widths[letter] {
            0 => 0,
            w => u64::MAX >> (u64::BITS - w),
        }
    }

    /// All slot widths in alphabet order.
    #[must_use]
    pub const fn widths(&self) -> &[u32; LETTERS] {
        &self.widths
    }

    /// All slot offsets in alphabet order.
    #[must_use]
    pub const fn offsets(&self) -> &[u32; LETTERS] {
        &self.offsets
    }

    /// Sum of all slot widths.
    #[must_use]
    pub const fn total_bits(&self) -> u32 {
        self.total_bits
    }

    /// Returns `true` if every count fits its slot.
    #[must_use]
    pub fn fits(&self, counts: &LetterCounts) -> bool {
        counts
            .iter()
            .enumerate()
            .all(|(i, count)| count as u64 <= self.capacity(i))
    }

    /// Packs `counts` into a fingerprint: `Σ count[i] << offset[i]`.
    ///
    /// Counts beyond a slot's capacity carry into the next slot; bits past
    /// the register are dropped.
    #[must_use]
    pub fn pack(&self, counts: &LetterCounts) -> u64 {
        counts
            .iter()
            .zip(self.offsets)
            .fold(0_u64, |acc, (count, offset)| {
                acc.wrapping_add((count as u64).checked_shl(offset).unwrap_or(0))
            })
    }

    /// Adds one occurrence of `letter` to `fingerprint`.
    #[inline]
    #[must_use]
    pub const fn bump(&self, fingerprint: u64, letter: usize) -> u64 {
        match 1_u64.checked_shl(self.offsets[letter]) {
            Some(unit) => fingerprint.wrapping_add(unit),
            None => fingerprint,
        }
    }
}

/// Number of bits needed to write `n` in binary (0 for 0).
#[inline]
const fn bit_length(n: usize) -> u32 {
    usize::BITS - n.leading_zeros()
}

impl fmt::Debug for BitLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Slots<'a>(&'a BitLayout);

        impl fmt::Debug for Slots<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(
                        ('a'..='z')
                            .enumerate()
                            .filter(|&(i, _)| self.0.widths[i] > 0)
                            .map(|(i, c)| (c, (self.0.offsets[i], self.0.widths[i]))),
                    )
                    .finish()
            }
        }

        f.debug_struct("BitLayout")
            .field("total_bits", &self.total_bits)
            .field("slots", &Slots(self))
            .finish()
    }
}
