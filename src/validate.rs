//! Whole-forest invariant checker.
//!
//! [`FibonacciHeap::validate`] walks every ring reachable from the minimum and
//! reports the first broken invariant. It is O(n) and meant for tests and
//! debugging, not for the hot path.

use crate::fibonacci::{FibonacciHandle, FibonacciHeap};
use crate::storage::NodeKey;
use std::collections::HashSet;
use thiserror::Error;

/// A violated structural invariant, naming the offending node where there is one
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("sibling ring is broken at {0:?}")]
    BrokenRing(FibonacciHandle),
    #[error("{child:?} orders before its parent {parent:?}")]
    HeapOrder {
        parent: FibonacciHandle,
        child: FibonacciHandle,
    },
    #[error("{child:?} sits in the child ring of {expected:?} but points to {found:?}")]
    ParentMismatch {
        child: FibonacciHandle,
        expected: Option<FibonacciHandle>,
        found: Option<FibonacciHandle>,
    },
    #[error("{node:?} records degree {recorded} but has {actual} children")]
    DegreeMismatch {
        node: FibonacciHandle,
        recorded: usize,
        actual: usize,
    },
    #[error("root {0:?} is marked")]
    MarkedRoot(FibonacciHandle),
    #[error("minimum {0:?} is not in the root ring")]
    MinimumNotRoot(FibonacciHandle),
    #[error("root {0:?} orders before the minimum")]
    MinimumNotSmallest(FibonacciHandle),
    #[error("heap records {recorded} elements but {reachable} are reachable out of {allocated} allocated")]
    SizeMismatch {
        recorded: usize,
        reachable: usize,
        allocated: usize,
    },
    #[error("heap records {recorded} roots but the root ring holds {actual}")]
    RootCountMismatch { recorded: usize, actual: usize },
    #[error("heap records {0} elements but has no minimum")]
    MissingMinimum(usize),
}

impl<K: Ord> FibonacciHeap<K> {
    /// Checks every structural invariant of the forest
    ///
    /// # Errors
    /// The first [`InvariantError`] found.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let Some(min) = self.min else {
            if self.len != 0 {
                return Err(InvariantError::MissingMinimum(self.len));
            }
            return self.check_counts(0, 0);
        };

        let roots: Vec<NodeKey> = self.store.ring(min).take(self.len + 1).collect();
        let mut seen = HashSet::with_capacity(self.len);
        let mut worklist = Vec::new();

        for &root in &roots {
            self.check_ring_links(root)?;
            if !seen.insert(root) {
                return Err(InvariantError::BrokenRing(self.handle(root)));
            }
            let node = &self.store[root];
            if node.parent.is_some() {
                return Err(InvariantError::ParentMismatch {
                    child: self.handle(root),
                    expected: None,
                    found: node.parent.map(|p| self.handle(p)),
                });
            }
            if node.marked {
                return Err(InvariantError::MarkedRoot(self.handle(root)));
            }
            if node.key < self.store[min].key {
                return Err(InvariantError::MinimumNotSmallest(self.handle(root)));
            }
            worklist.push(root);
        }

        if self.store[min].parent.is_some() {
            return Err(InvariantError::MinimumNotRoot(self.handle(min)));
        }

        while let Some(parent) = worklist.pop() {
            let node = &self.store[parent];
            let children: Vec<NodeKey> = match node.child {
                Some(child) => self.store.ring(child).take(self.len + 1).collect(),
                None => Vec::new(),
            };

            if children.len() != node.degree {
                return Err(InvariantError::DegreeMismatch {
                    node: self.handle(parent),
                    recorded: node.degree,
                    actual: children.len(),
                });
            }

            for child in children {
                self.check_ring_links(child)?;
                if !seen.insert(child) {
                    return Err(InvariantError::BrokenRing(self.handle(child)));
                }
                let c = &self.store[child];
                if c.parent != Some(parent) {
                    return Err(InvariantError::ParentMismatch {
                        child: self.handle(child),
                        expected: Some(self.handle(parent)),
                        found: c.parent.map(|p| self.handle(p)),
                    });
                }
                if c.key < node.key {
                    return Err(InvariantError::HeapOrder {
                        parent: self.handle(parent),
                        child: self.handle(child),
                    });
                }
                worklist.push(child);
            }
        }

        self.check_counts(seen.len(), roots.len())
    }

    fn check_ring_links(&self, node: NodeKey) -> Result<(), InvariantError> {
        let n = &self.store[node];
        let linked = self.store.contains(n.left)
            && self.store.contains(n.right)
            && self.store[n.right].left == node
            && self.store[n.left].right == node;
        if linked {
            Ok(())
        } else {
            Err(InvariantError::BrokenRing(self.handle(node)))
        }
    }

    fn check_counts(&self, reachable: usize, roots: usize) -> Result<(), InvariantError> {
        let allocated = self.store.len();
        if reachable != self.len || allocated != self.len {
            return Err(InvariantError::SizeMismatch {
                recorded: self.len,
                reachable,
                allocated,
            });
        }
        if roots != self.root_count {
            return Err(InvariantError::RootCountMismatch {
                recorded: self.root_count,
                actual: roots,
            });
        }
        Ok(())
    }
}
