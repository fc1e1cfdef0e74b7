use super::sample_hasher;
use crate::{AnagramGroups, PackedAnagramHasher};

#[test]
fn display_reports_total_bits() {
    let hasher = PackedAnagramHasher::new(["test"]).unwrap();
    assert_eq!(hasher.to_string(), "PackedAnagramHasher(total_bits=4)");
}

#[test]
fn debug_format() {
    let dbg = format!("{:?}", sample_hasher());
    assert!(dbg.contains("PackedAnagramHasher"));
    assert!(dbg.contains("total_bits"));
}

#[test]
fn copies_compare_equal() {
    let hasher = sample_hasher();
    let copy = hasher;
    assert_eq!(hasher, copy);
    assert_eq!(copy.hash("store"), hasher.hash("rotes"));
}

#[test]
fn same_corpus_same_layout() {
    let a = PackedAnagramHasher::new(["cat", "dog"]).unwrap();
    let b = PackedAnagramHasher::new(["god", "act"]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.layout(), b.layout());
}

#[test]
fn from_layout_round_trips() {
    let hasher = sample_hasher();
    let rebuilt = PackedAnagramHasher::from_layout(*hasher.layout());
    assert_eq!(rebuilt, hasher);
}

#[test]
fn groups_default_is_empty() {
    let groups = AnagramGroups::default();
    assert!(groups.is_empty());
    assert_eq!(groups.len(), 0);
}

#[test]
fn groups_debug_format() {
    let groups = sample_hasher().group_anagrams(["cat", "act"]);
    let dbg = format!("{groups:?}");
    assert!(dbg.contains("\"cat\""));
    assert!(dbg.contains("\"act\""));
}

#[test]
fn checkpoint_debug_format() {
    let groups = sample_hasher().group_anagrams(["cat"]);
    let dbg = format!("{:?}", groups.checkpoint());
    assert!(dbg.contains("GroupsCheckpoint"));
    assert!(dbg.contains("word_count: 1"));
}
