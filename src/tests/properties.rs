//! Property tests for the anagram equivalence contract.

use proptest::prelude::*;

use crate::{PackedAnagramHasher, are_anagrams, quick_hash};

fn sorted_letters(word: &str) -> Vec<char> {
    let mut letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    letters.sort_unstable();
    letters
}

proptest! {
    /// Any permutation hashes like the original.
    #[test]
    fn permutation_same_hash(word in "[a-z]{0,16}", rotate in 0_usize..16) {
        let hasher = PackedAnagramHasher::new([&word]).unwrap();
        let mut chars: Vec<char> = word.chars().collect();
        let reversed: String = chars.iter().rev().collect();
        if !chars.is_empty() {
            let k = rotate % chars.len();
            chars.rotate_left(k);
        }
        let rotated: String = chars.into_iter().collect();

        prop_assert_eq!(hasher.hash(&word), hasher.hash(&reversed));
        prop_assert_eq!(hasher.hash(&word), hasher.hash(&rotated));
        prop_assert!(are_anagrams(&word, &reversed));
    }

    /// Different multisets, layout calibrated on both: different hashes.
    #[test]
    fn discrimination(w1 in "[a-z]{0,12}", w2 in "[a-z]{0,12}") {
        let hasher = PackedAnagramHasher::new([&w1, &w2]).unwrap();
        let same = sorted_letters(&w1) == sorted_letters(&w2);
        prop_assert_eq!(hasher.are_anagrams(&w1, &w2), same);
    }

    #[test]
    fn case_insensitive(word in "[a-zA-Z]{0,16}") {
        let hasher = PackedAnagramHasher::new([&word]).unwrap();
        let h = hasher.hash(&word);
        prop_assert_eq!(h, hasher.hash(&word.to_uppercase()));
        prop_assert_eq!(h, hasher.hash(&word.to_lowercase()));
        prop_assert_eq!(quick_hash(&word), quick_hash(&word.to_uppercase()));
    }

    #[test]
    fn noise_stripped(word in "[a-z]{1,10}", noise in "[0-9 _.,!?-]{1,4}") {
        let hasher = PackedAnagramHasher::new([&word]).unwrap();
        let noisy: String = word
            .chars()
            .flat_map(|c| std::iter::once(c).chain(noise.chars()))
            .collect();
        prop_assert_eq!(hasher.hash(&word), hasher.hash(&noisy));
        prop_assert_eq!(quick_hash(&word), quick_hash(&noisy));
    }

    /// Up to seven letters can never overflow a quick slot, so both
    /// schemes give the same verdict.
    #[test]
    fn quick_agrees_with_packed(w1 in "[a-h]{0,7}", w2 in "[a-h]{0,7}") {
        let hasher = PackedAnagramHasher::new([&w1, &w2]).unwrap();
        prop_assert_eq!(are_anagrams(&w1, &w2), hasher.are_anagrams(&w1, &w2));
    }

    /// In-capacity words never leave the calibrated bit range.
    #[test]
    fn within_total_bits(words in prop::collection::vec("[a-z]{0,8}", 1..6)) {
        let hasher = PackedAnagramHasher::new(&words).unwrap();
        for word in &words {
            let h = hasher.hash(word);
            prop_assert!(hasher.total_bits() == 64 || h < 1_u64 << hasher.total_bits());
            prop_assert_eq!(hasher.hash_checked(word), Some(h));
        }
    }
}
