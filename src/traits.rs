//! Common traits for the heap
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait with insertion, inspection and extraction of the minimum
//! - [`DecreaseKeyHeap`]: Extended trait adding handle-based `decrease_key` and `delete`
//!
//! Unlike `BinaryHeap`, an empty heap is reported through [`HeapError::EmptyHeap`]
//! rather than `None`, so callers can propagate it with `?` next to the
//! handle errors.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap holds no elements
    #[error("heap is empty")]
    EmptyHeap,
    /// The handle was issued by a different heap
    #[error("handle does not belong to this heap")]
    ForeignNode,
    /// The handle is no longer valid (element was extracted or deleted)
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
}

/// A handle to an element in the heap, used for decrease_key and delete
///
/// This is an opaque type that identifies a specific element in a specific heap.
pub trait Handle: Copy + PartialEq + Eq {}

/// Base trait for heap/priority queue data structures
///
/// - `push` inserts a key
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::{FibonacciHeap, Heap, HeapError};
///
/// let mut heap: FibonacciHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pop(), Ok(2));
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
/// ```
pub trait Heap<K: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(1) for the Fibonacci heap.
    fn push(&mut self, key: K);

    /// Returns the minimum key without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&K, HeapError>;

    /// Removes and returns the minimum key
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n) amortized for the Fibonacci heap.
    fn pop(&mut self) -> Result<K, HeapError>;
}

/// Extended heap trait with `decrease_key` and `delete` support
///
/// These operations need a handle to the element, obtained from
/// `push_with_handle`. They are what algorithms such as Dijkstra's shortest
/// path rely on.
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::{DecreaseKeyHeap, FibonacciHeap, Heap};
///
/// let mut heap: FibonacciHeap<i32> = Heap::new();
/// let handle = heap.push_with_handle(10);
/// heap.push(7);
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Ok(&5));
/// assert_eq!(heap.delete(&handle), Ok(5));
/// assert_eq!(heap.peek(), Ok(&7));
/// ```
pub trait DecreaseKeyHeap<K: Ord>: Heap<K> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts a key, returning a handle to its node
    ///
    /// # Time Complexity
    /// O(1) for the Fibonacci heap.
    fn push_with_handle(&mut self, key: K) -> Self::Handle;

    /// Decreases the key of the element identified by the handle
    ///
    /// A `new_key` greater than the current key leaves the heap unchanged and
    /// is not an error.
    ///
    /// # Errors
    /// - `HeapError::ForeignNode` if the handle was issued by another heap
    /// - `HeapError::InvalidHandle` if the element was already removed
    ///
    /// # Time Complexity
    /// O(1) amortized for the Fibonacci heap.
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError>;

    /// Removes the element identified by the handle, returning its key
    ///
    /// # Errors
    /// Same as [`DecreaseKeyHeap::decrease_key`].
    ///
    /// # Time Complexity
    /// O(log n) amortized for the Fibonacci heap.
    fn delete(&mut self, handle: &Self::Handle) -> Result<K, HeapError>;
}
