//! # Clue Index
//!
//! The clues collected during one exploration, kept sorted and free of
//! duplicates. Ordering is plain byte-wise string comparison, so it is
//! case-sensitive ("Zebra" sorts before "apple").

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueIndex {
    entries: BTreeSet<String>,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `clue` unless an identical entry is already present.
    /// Returns `true` if the index grew.
    pub fn insert(&mut self, clue: &str) -> bool {
        debug_assert!(!clue.is_empty(), "empty clues are filtered out by the map");
        if self.entries.contains(clue) {
            return false;
        }
        self.entries.insert(clue.to_string())
    }

    pub fn contains(&self, clue: &str) -> bool {
        self.entries.contains(clue)
    }

    /// Every entry in ascending order. Call again to restart.
    pub fn enumerate(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. Returns how many there were.
    pub fn release(self) -> usize {
        self.entries.len()
    }
}
