//! Circular doubly-linked sibling rings over the node arena.
//!
//! In a ring:
//! - A single node points to itself (both `left` and `right`)
//! - There is no head or tail; any member can be the entry point
//! - Iteration wraps around, so it must track its starting point
//!
//! The root ring and every child ring use the same operations.

use crate::storage::{NodeKey, NodeStore};

impl<K> NodeStore<K> {
    /// Makes `node` a ring of one element.
    pub(crate) fn make_singleton(&mut self, node: NodeKey) {
        let n = &mut self[node];
        n.left = node;
        n.right = node;
    }

    /// Inserts `node` to the right of `at`.
    ///
    /// `node`'s own links are overwritten; it must not be a member of a ring
    /// that is still in use.
    pub(crate) fn insert_after(&mut self, at: NodeKey, node: NodeKey) {
        let next = self[at].right;

        self[at].right = node;
        self[node].left = at;
        self[node].right = next;
        self[next].left = node;
    }

    /// Removes `node` from its ring and leaves it as a singleton.
    ///
    /// Returns the right neighbour, or `None` if `node` was the only member.
    pub(crate) fn unlink(&mut self, node: NodeKey) -> Option<NodeKey> {
        let left = self[node].left;
        let right = self[node].right;

        if right == node {
            return None;
        }

        self[left].right = right;
        self[right].left = left;
        self.make_singleton(node);
        Some(right)
    }

    /// Iterates over every member of the ring containing `start`, beginning at
    /// `start` and following `right` links.
    ///
    /// The ring must not be modified while the iterator is alive.
    pub(crate) fn ring(&self, start: NodeKey) -> Ring<'_, K> {
        Ring {
            store: self,
            start,
            next: Some(start),
        }
    }
}

pub(crate) struct Ring<'a, K> {
    store: &'a NodeStore<K>,
    start: NodeKey,
    next: Option<NodeKey>,
}

impl<K> Iterator for Ring<'_, K> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let current = self.next?;
        let right = self.store[current].right;
        self.next = (right != self.start).then_some(right);
        Some(current)
    }
}
