#![deny(clippy::print_stdout, clippy::print_stderr)]
//! Indexed binary min-heap and disjoint-set union-find.
//!
//! - [`IndexedMinHeap`] is a min-priority queue that also answers
//!   `contains(value)` in O(1) and removes an arbitrary value in O(log n),
//!   by keeping a [`PositionIndex`] from values to heap positions.
//! - [`UnionFind`] partitions `[0, size)` into disjoint components with path
//!   compression and union by size.
//!
//! Both structures are single-threaded and report failures through
//! [`HeapError`] and [`UnionFindError`]. Diagnostic events go through the
//! `log` facade; the library never writes to stdout or stderr.

pub mod error;
pub mod indexed_heap;
pub mod position_index;
pub mod union_find;

pub use error::{HeapError, UnionFindError};
pub use indexed_heap::IndexedMinHeap;
pub use position_index::PositionIndex;
pub use union_find::UnionFind;

/// Returns the current version of the heapfind-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
