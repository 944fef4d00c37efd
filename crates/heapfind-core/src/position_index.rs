//! Reverse index from heap values to the positions holding them.
//!
//! Equal values may occupy several heap slots at once, so each value maps to
//! an ordered set of positions. When a single position has to be chosen for a
//! value (removal by value), the **largest** tracked position is used.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// Mapping `value -> {positions}` kept in lockstep with a heap's backing store.
///
/// The index does not know about the store itself; the owning heap is
/// responsible for calling [`PositionIndex::insert`], [`PositionIndex::remove`]
/// and [`PositionIndex::relocate`] for every change it makes to element
/// positions. A value whose position set becomes empty is dropped from the
/// map, so [`PositionIndex::contains`] is a plain key lookup.
#[derive(Debug, Clone)]
pub struct PositionIndex<T> {
    map: HashMap<T, BTreeSet<usize>>,
    tracked: usize,
}

impl<T> Default for PositionIndex<T> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            tracked: 0,
        }
    }
}

impl<T: Hash + Eq> PositionIndex<T> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with room for `capacity` distinct values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            tracked: 0,
        }
    }

    /// Records that `value` is stored at `position`.
    pub fn insert(&mut self, value: T, position: usize) {
        if self.map.entry(value).or_default().insert(position) {
            self.tracked += 1;
        }
    }

    /// Forgets that `value` is stored at `position`.
    ///
    /// Returns `true` if the pair was tracked.
    pub fn remove(&mut self, value: &T, position: usize) -> bool {
        let Some(positions) = self.map.get_mut(value) else {
            return false;
        };
        let removed = positions.remove(&position);
        if positions.is_empty() {
            self.map.remove(value);
        }
        if removed {
            self.tracked -= 1;
        }
        removed
    }

    /// Moves one occurrence of `value` from position `from` to position `to`.
    ///
    /// Callers swapping two *equal* values must skip the relocation entirely:
    /// both positions already belong to the same set.
    pub fn relocate(&mut self, value: &T, from: usize, to: usize) {
        if let Some(positions) = self.map.get_mut(value) {
            let moved = positions.remove(&from);
            debug_assert!(moved, "relocating an untracked position {from}");
            positions.insert(to);
        }
    }

    /// Returns the canonical position of `value`: the largest one tracked.
    pub fn canonical(&self, value: &T) -> Option<usize> {
        self.map
            .get(value)
            .and_then(|positions| positions.last().copied())
    }

    /// Returns `true` if at least one position holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// Returns the number of positions holding `value`.
    pub fn count(&self, value: &T) -> usize {
        self.map.get(value).map_or(0, BTreeSet::len)
    }

    /// Iterates the positions holding `value` in ascending order.
    pub fn positions<'a>(&'a self, value: &T) -> impl Iterator<Item = usize> + 'a {
        self.map
            .get(value)
            .into_iter()
            .flat_map(|positions| positions.iter().copied())
    }

    /// Number of distinct values tracked.
    pub fn distinct_len(&self) -> usize {
        self.map.len()
    }

    /// Total number of `(value, position)` pairs tracked.
    pub fn tracked_len(&self) -> usize {
        self.tracked
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.map.clear();
        self.tracked = 0;
    }
}
