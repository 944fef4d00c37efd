//! Binary min-heap priority queue with logarithmic removal of arbitrary values.
//!
//! The heap is stored in a `Vec` using the usual implicit layout: the
//! children of position `k` live at `2k + 1` and `2k + 2`, its parent at
//! `(k - 1) / 2`. Alongside the store the heap keeps a [`PositionIndex`]
//! mapping each value to the positions currently holding it. That index is
//! what makes [`IndexedMinHeap::contains`] a hash lookup and
//! [`IndexedMinHeap::remove`] logarithmic instead of linear.
//!
//! Every position exchange goes through a single private `swap` routine that
//! updates the store and the index together. Nothing else moves elements
//! except `remove_at`, which patches the index for the two positions it
//! touches before repairing the heap.

use std::fmt;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::HeapError;
use crate::position_index::PositionIndex;

/// A min-priority queue over a multiset of totally ordered values.
///
/// Duplicates are allowed. When a value occurs more than once,
/// [`IndexedMinHeap::remove`] removes the occurrence stored at the largest
/// position.
///
/// # Complexity
///
/// | operation | cost |
/// |---|---|
/// | [`add`](Self::add), [`poll`](Self::poll), [`remove`](Self::remove), [`remove_at`](Self::remove_at) | O(log n) |
/// | [`peek`](Self::peek), [`contains`](Self::contains), [`len`](Self::len) | O(1) |
/// | [`from_vec`](Self::from_vec) | O(n) |
/// | [`clear`](Self::clear) | O(n) |
///
/// The structure is not internally synchronized; wrap it in a mutex to share
/// it between threads.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T> {
    heap: Vec<T>,
    index: PositionIndex<T>,
}

impl<T> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            index: PositionIndex::default(),
        }
    }
}

impl<T: Ord + Hash + Clone> IndexedMinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: PositionIndex::with_capacity(capacity),
        }
    }

    /// Builds a heap from `elems` in O(n) by sinking every internal node,
    /// deepest first.
    pub fn from_vec(elems: Vec<T>) -> Self {
        let mut index = PositionIndex::with_capacity(elems.len());
        for (position, elem) in elems.iter().enumerate() {
            index.insert(elem.clone(), position);
        }

        let mut heap = Self { heap: elems, index };
        let len = heap.heap.len();
        for k in (0..len / 2).rev() {
            heap.sink(k);
        }
        debug!("heapified {len} element(s)");
        heap
    }

    /// Returns the number of elements, counting duplicates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every element and every index entry.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Returns the minimum element without removing it, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Removes and returns the minimum element, or `None` when empty.
    pub fn poll(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        self.remove_at(0).ok()
    }

    /// Returns `true` if at least one element equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains(value)
    }

    /// Returns how many stored elements are equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.index.count(value)
    }

    /// Returns the position [`remove`](Self::remove) would take `value` from.
    pub fn position_of(&self, value: &T) -> Option<usize> {
        self.index.canonical(value)
    }

    /// Returns the element stored at `position`.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.heap.get(position)
    }

    /// Returns the backing store in position order.
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Iterates the elements in storage (not sorted) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Inserts `value`, restoring the heap property by swimming it up.
    pub fn add(&mut self, value: T) {
        let position = self.heap.len();
        self.index.insert(value.clone(), position);
        self.heap.push(value);
        self.swim(position);
        debug_assert_eq!(self.index.tracked_len(), self.heap.len());
    }

    /// Removes one occurrence of `value`.
    ///
    /// Returns `false` if no element equal to `value` is stored.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index.canonical(value) {
            Some(position) => self.remove_at(position).is_ok(),
            None => false,
        }
    }

    /// Removes and returns the element at `position`.
    ///
    /// The last element takes the vacated slot and is then sunk, or swum if
    /// sinking leaves it in place. Only one of the two directions can apply.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::PositionOutOfRange`] if `position >= len()`.
    pub fn remove_at(&mut self, position: usize) -> Result<T, HeapError> {
        let len = self.heap.len();
        if position >= len {
            return Err(HeapError::PositionOutOfRange { position, len });
        }

        let last = len - 1;
        let removed = self.heap.swap_remove(position);
        self.index.remove(&removed, position);

        if position != last {
            self.index.relocate(&self.heap[position], last, position);
            let settled = self.sink(position);
            if settled == position {
                let settled = self.swim(position);
                trace!("remove_at({position}): moved element swam to {settled}");
            } else {
                trace!("remove_at({position}): moved element sank to {settled}");
            }
        }

        debug_assert_eq!(self.index.tracked_len(), self.heap.len());
        Ok(removed)
    }

    /// Drains the heap into a vector in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(value) = self.poll() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks the min-heap property for the subtree rooted at `k`.
    ///
    /// Positions past the end are trivially valid. Intended for tests and
    /// invariant checks; this walks the whole subtree.
    pub fn is_min_heap(&self, k: usize) -> bool {
        let len = self.heap.len();
        if k >= len {
            return true;
        }
        let left = 2 * k + 1;
        let right = left + 1;
        if left < len && self.heap[k] > self.heap[left] {
            return false;
        }
        if right < len && self.heap[k] > self.heap[right] {
            return false;
        }
        self.is_min_heap(left) && self.is_min_heap(right)
    }

    /// Checks that the position index describes the store exactly: every
    /// stored `(value, position)` pair is tracked and nothing else is.
    pub fn is_index_consistent(&self) -> bool {
        if self.index.tracked_len() != self.heap.len() {
            return false;
        }
        self.heap
            .iter()
            .enumerate()
            .all(|(position, value)| self.index.positions(value).any(|p| p == position))
    }

    /// Moves the element at `k` toward the leaves while a child is smaller.
    /// Returns its final position.
    fn sink(&mut self, mut k: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * k + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.heap[right] < self.heap[left] {
                smallest = right;
            }
            if self.heap[k] <= self.heap[smallest] {
                break;
            }
            self.swap(k, smallest);
            k = smallest;
        }
        k
    }

    /// Moves the element at `k` toward the root while it is smaller than its
    /// parent. Returns its final position.
    fn swim(&mut self, mut k: usize) -> usize {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.heap[k] >= self.heap[parent] {
                break;
            }
            self.swap(k, parent);
            k = parent;
        }
        k
    }

    /// Exchanges two positions in the store and the index as one step.
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        // Equal values share one position set that already lists both slots.
        if self.heap[i] != self.heap[j] {
            self.index.relocate(&self.heap[i], i, j);
            self.index.relocate(&self.heap[j], j, i);
        }
        self.heap.swap(i, j);
    }
}

impl<T: Ord + Hash + Clone> From<Vec<T>> for IndexedMinHeap<T> {
    fn from(elems: Vec<T>) -> Self {
        Self::from_vec(elems)
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for IndexedMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for IndexedMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a IndexedMinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.heap.iter()
    }
}

/// Renders the backing store in position order, e.g. `[1, 3, 2]`.
impl<T: fmt::Display> fmt::Display for IndexedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.heap.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
