//! Union-Find (disjoint set) over the integer universe `[0, size)`.
//!
//! [`UnionFind::find`] uses full path compression: a first pass walks parent
//! pointers to the root, a second pass re-points every visited node directly
//! at that root. [`UnionFind::unify`] uses union by size, attaching the root
//! of the smaller tree under the root of the larger one. Together they give
//! the inverse-Ackermann amortized bound for both operations.
//!
//! On a size tie the root of the **second** argument is attached under the
//! root of the first, so `unify(p, q)` on two singletons makes `p` the
//! representative.

use std::collections::BTreeMap;

use log::debug;

use crate::error::UnionFindError;

/// A union-find structure with path compression and union by size.
///
/// The universe size is fixed at construction and is never zero. Every public
/// operation validates its element arguments and reports
/// [`UnionFindError::OutOfRange`] instead of indexing out of bounds.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    /// Tree size, meaningful only at roots; absorbed roots are zeroed.
    component_size: Vec<usize>,
    num_components: usize,
}

impl UnionFind {
    /// Creates `size` singleton components.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::EmptyUniverse`] if `size == 0`.
    pub fn new(size: usize) -> Result<Self, UnionFindError> {
        if size == 0 {
            return Err(UnionFindError::EmptyUniverse);
        }
        Ok(Self {
            parent: (0..size).collect(),
            component_size: vec![1; size],
            num_components: size,
        })
    }

    /// Returns the root of the component containing `p`, compressing the
    /// path from `p` to that root.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::OutOfRange`] if `p >= len()`.
    pub fn find(&mut self, p: usize) -> Result<usize, UnionFindError> {
        self.check(p)?;
        Ok(self.find_root(p))
    }

    /// Returns `true` if `p` and `q` belong to the same component.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::OutOfRange`] if either element is outside
    /// the universe.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.find_root(p) == self.find_root(q))
    }

    /// Returns the number of elements in the component containing `p`.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::OutOfRange`] if `p >= len()`.
    pub fn component_size(&mut self, p: usize) -> Result<usize, UnionFindError> {
        self.check(p)?;
        let root = self.find_root(p);
        Ok(self.component_size[root])
    }

    /// Returns the universe size fixed at construction.
    // No `is_empty`: construction rejects an empty universe.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns the current number of disjoint components.
    pub fn components(&self) -> usize {
        self.num_components
    }

    /// Merges the components containing `p` and `q`.
    ///
    /// Returns `true` if two components were merged, `false` if `p` and `q`
    /// were already connected.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::OutOfRange`] if either element is outside
    /// the universe. No state changes in that case.
    pub fn unify(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        self.check(p)?;
        self.check(q)?;

        let root_p = self.find_root(p);
        let root_q = self.find_root(q);
        if root_p == root_q {
            return Ok(false);
        }

        let (root, absorbed) = if self.component_size[root_p] < self.component_size[root_q] {
            (root_q, root_p)
        } else {
            (root_p, root_q)
        };

        self.parent[absorbed] = root;
        self.component_size[root] += self.component_size[absorbed];
        self.component_size[absorbed] = 0;
        self.num_components -= 1;

        debug!(
            "merged component {absorbed} into {root} (size {}, {} component(s) left)",
            self.component_size[root], self.num_components
        );
        Ok(true)
    }

    /// Returns the current roots in ascending order.
    pub fn roots(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &parent)| i == parent)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns every component as an ascending list of members.
    ///
    /// Groups are ordered by their smallest member.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut by_root: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for i in 0..self.parent.len() {
            let root = self.find_root(i);
            by_root.entry(root).or_default().push(i);
        }
        let mut groups: Vec<Vec<usize>> = by_root.into_values().collect();
        groups.sort_by_key(|group| group.first().copied());
        groups
    }

    /// Two-pass find: locate the root, then point the whole path at it.
    fn find_root(&mut self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = p;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn check(&self, element: usize) -> Result<(), UnionFindError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(UnionFindError::OutOfRange {
                element,
                size: self.parent.len(),
            })
        }
    }
}
