//! Anagram buckets keyed by fingerprint.
//!
//! Words live in a single append-only [`Arena`]; each bucket holds arena
//! indices in insertion order. Because indices only grow, a checkpoint is
//! just the arena checkpoint plus the bucket count, and rollback pops every
//! index past the saved arena length.

use std::collections::HashMap;
use std::fmt;
use std::slice;

use safe_bump::{Arena, Checkpoint, Idx};

/// Saved grouping state for rollback.
///
/// Created by [`AnagramGroups::checkpoint`].
pub struct GroupsCheckpoint {
    /// Word arena checkpoint.
    pub words: Checkpoint<String>,
    /// Number of words at checkpoint time.
    pub word_count: usize,
    /// Number of buckets at checkpoint time.
    pub group_count: usize,
}

// Contains only a Checkpoint (Copy) and counters.

impl Clone for GroupsCheckpoint {
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for GroupsCheckpoint {}

impl fmt::Debug for GroupsCheckpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupsCheckpoint")
            .field("word_count", &self.word_count)
            .field("group_count", &self.group_count)
            .finish_non_exhaustive()
    }
}

/// Words grouped by fingerprint.
///
/// Buckets are visited in the order their first word arrived; words inside
/// a bucket keep their arrival order. Identical words are not deduplicated.
pub struct AnagramGroups {
    words: Arena<String>,
    buckets: HashMap<u64, Vec<Idx<String>>>,
    order: Vec<u64>,
}

impl AnagramGroups {
    /// Creates an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: Arena::new(),
            buckets: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Number of distinct fingerprints.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no word has been grouped.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of grouped words across all buckets.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Appends `word` to the bucket for `fingerprint`.
    pub fn insert(&mut self, fingerprint: u64, word: String) {
        let idx = self.words.alloc(word);
        self.buckets
            .entry(fingerprint)
            .or_insert_with(|| {
                self.order.push(fingerprint);
                Vec::new()
            })
            .push(idx);
    }

    /// Returns the bucket for `fingerprint`.
    #[must_use]
    pub fn get(&self, fingerprint: u64) -> Option<Group<'_>> {
        self.buckets.get(&fingerprint).map(|members| Group {
            words: &self.words,
            members: members.iter(),
        })
    }

    /// Returns `true` if some grouped word has this fingerprint.
    #[must_use]
    pub fn contains(&self, fingerprint: u64) -> bool {
        self.buckets.contains_key(&fingerprint)
    }

    /// Iterates `(fingerprint, bucket)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, Group<'_>)> + '_ {
        self.order.iter().map(|&fingerprint| {
            let members = self.buckets.get(&fingerprint).map_or(&[][..], Vec::as_slice);
            (
                fingerprint,
                Group {
                    words: &self.words,
                    members: members.iter(),
                },
            )
        })
    }

    /// Copies the grouping into an owned map.
    #[must_use]
    pub fn to_map(&self) -> HashMap<u64, Vec<String>> {
        self.iter()
            .map(|(fingerprint, group)| (fingerprint, group.map(str::to_owned).collect()))
            .collect()
    }

    /// Saves the current state for later rollback.
    #[must_use]
    pub fn checkpoint(&self) -> GroupsCheckpoint {
        GroupsCheckpoint {
            words: self.words.checkpoint(),
            word_count: self.words.len(),
            group_count: self.order.len(),
        }
    }

    /// Discards every word added after `cp`.
    ///
    /// Buckets created after the checkpoint disappear with their words.
    pub fn rollback(&mut self, cp: GroupsCheckpoint) {
        for &fingerprint in &self.order[cp.group_count.min(self.order.len())..] {
            self.buckets.remove(&fingerprint);
        }
        self.order.truncate(cp.group_count);
        for members in self.buckets.values_mut() {
            while members.last().is_some_and(|idx| idx.into_raw() >= cp.word_count) {
                members.pop();
            }
        }
        self.words.rollback(cp.words);
    }
}

impl Default for AnagramGroups {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnagramGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(fingerprint, group)| {
                (format!("{fingerprint:#x}"), group.collect::<Vec<_>>())
            }))
            .finish()
    }
}

/// Words sharing one fingerprint, in arrival order.
pub struct Group<'a> {
    words: &'a Arena<String>,
    members: slice::Iter<'a, Idx<String>>,
}

impl<'a> Iterator for Group<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let words = self.words;
        self.members.next().map(|&idx| words.get(idx).as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.members.size_hint()
    }
}

impl ExactSizeIterator for Group<'_> {}

impl<'a> DoubleEndedIterator for Group<'a> {
    fn next_back(&mut self) -> Option<&'a str> {
        let words = self.words;
        self.members.next_back().map(|&idx| words.get(idx).as_str())
    }
}
