//! Read-only views of the heap's forest
//!
//! These expose the structural links of individual nodes (parent, child,
//! siblings, degree, mark) so callers can assert the shape of the forest, not
//! just the order of extracted keys.
//!
//! # Example
//!
//! ```rust
//! use rust_fibonacci_heap::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! let handles: Vec<_> = (1..=5).map(|k| heap.insert(k)).collect();
//! heap.extract_min().unwrap();
//!
//! // One tree remains, rooted at 2
//! let root = heap.node(&heap.min_handle().unwrap()).unwrap();
//! assert_eq!(root.key(), &2);
//! assert_eq!(root.degree(), 2);
//! assert_eq!(root.child(), Some(handles[2]));
//! ```

use crate::fibonacci::{FibonacciHandle, FibonacciHeap};
use crate::storage::{Node, NodeKey};
use crate::traits::HeapError;

/// Borrowed view of one node
pub struct NodeView<'a, K: Ord> {
    heap: &'a FibonacciHeap<K>,
    node: &'a Node<K>,
}

impl<'a, K: Ord> NodeView<'a, K> {
    pub fn key(&self) -> &'a K {
        self.node.key.finite()
    }

    /// Number of direct children
    pub fn degree(&self) -> usize {
        self.node.degree
    }

    /// Whether the node has lost a child since it last became a child
    pub fn is_marked(&self) -> bool {
        self.node.marked
    }

    pub fn is_root(&self) -> bool {
        self.node.parent.is_none()
    }

    pub fn parent(&self) -> Option<FibonacciHandle> {
        self.node.parent.map(|n| self.heap.handle(n))
    }

    /// The representative child; its siblings are reached through `right`
    pub fn child(&self) -> Option<FibonacciHandle> {
        self.node.child.map(|n| self.heap.handle(n))
    }

    pub fn left(&self) -> FibonacciHandle {
        self.heap.handle(self.node.left)
    }

    pub fn right(&self) -> FibonacciHandle {
        self.heap.handle(self.node.right)
    }

    /// Handles of all direct children, starting at the representative child
    pub fn children(&self) -> Vec<FibonacciHandle> {
        self.node
            .child
            .map(|c| self.heap.ring_handles(c))
            .unwrap_or_default()
    }
}

impl<K: Ord> FibonacciHeap<K> {
    /// Returns a view of the node named by `handle`
    ///
    /// # Errors
    /// - `HeapError::ForeignNode` if the handle was issued by another heap
    /// - `HeapError::InvalidHandle` if the element was already removed
    pub fn node(&self, handle: &FibonacciHandle) -> Result<NodeView<'_, K>, HeapError> {
        let key = self.resolve(handle)?;
        let node = self.store.get(key).ok_or(HeapError::InvalidHandle)?;
        Ok(NodeView { heap: self, node })
    }

    /// Whether `handle` names a live element of this heap
    pub fn contains(&self, handle: &FibonacciHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Handle of the minimum node, if any
    pub fn min_handle(&self) -> Option<FibonacciHandle> {
        self.min.map(|n| self.handle(n))
    }

    /// Handles of the root ring, starting at the minimum and following `right`
    pub fn roots(&self) -> Vec<FibonacciHandle> {
        self.min
            .map(|min| self.ring_handles(min))
            .unwrap_or_default()
    }

    fn ring_handles(&self, start: NodeKey) -> Vec<FibonacciHandle> {
        self.store.ring(start).map(|n| self.handle(n)).collect()
    }
}
