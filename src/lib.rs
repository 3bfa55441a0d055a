//! Fibonacci Heap for Rust
//!
//! This crate provides an arena-backed Fibonacci heap: a priority queue with
//! handle-based `decrease_key` and `delete` support.
//!
//! # Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `insert`       | O(1)               |
//! | `peek_min`     | O(1)               |
//! | `extract_min`  | O(log n) amortized |
//! | `decrease_key` | O(1) amortized     |
//! | `delete_node`  | O(log n) amortized |
//!
//! Nodes live in a [`slotmap`] arena and link to each other through
//! generational keys, so a handle whose element is gone is detected instead of
//! dereferenced, and a handle from another heap is rejected before anything is
//! touched.
//!
//! # Example
//!
//! ```rust
//! use rust_fibonacci_heap::{FibonacciHeap, HeapError};
//!
//! let mut heap = FibonacciHeap::new();
//! let handle1 = heap.insert(5);
//! let handle2 = heap.insert(3);
//! heap.decrease_key(&handle1, 1).unwrap();
//! assert_eq!(heap.peek_min(), Ok(&1));
//!
//! assert_eq!(heap.delete_node(&handle2), Ok(3));
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
//! ```

mod consolidate;
mod cut;
pub mod fibonacci;
pub mod inspect;
mod ring;
pub mod selftest;
mod storage;
pub mod traits;
pub mod validate;

pub use fibonacci::{FibonacciHandle, FibonacciHeap, HeapId};
pub use inspect::NodeView;
pub use traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
pub use validate::InvariantError;
