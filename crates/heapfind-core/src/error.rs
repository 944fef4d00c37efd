//! Error types returned by the heap and union-find structures.
//!
//! Both structures are pure in-memory computations, so every error here is a
//! caller precondition violation reported synchronously. Nothing is retried.
use thiserror::Error;

/// Errors produced by [`crate::IndexedMinHeap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A position passed to [`crate::IndexedMinHeap::remove_at`] does not
    /// address a stored element. An empty heap reports `len: 0`.
    #[error("heap position {position} is out of range for a heap of {len} element(s)")]
    PositionOutOfRange {
        /// The rejected position.
        position: usize,
        /// Number of elements in the heap at the time of the call.
        len: usize,
    },
}

/// Errors produced by [`crate::UnionFind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnionFindError {
    /// The universe size given at construction was zero.
    #[error("union-find size must be greater than zero")]
    EmptyUniverse,

    /// An element identity lies outside `[0, size)`.
    #[error("element {element} is out of range for a union-find of size {size}")]
    OutOfRange {
        /// The rejected element.
        element: usize,
        /// Universe size fixed at construction.
        size: usize,
    },
}
