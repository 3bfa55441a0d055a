//! Consolidation: the pass after extract-min that links roots of equal degree
//! until every root has a distinct degree, then rescans for the new minimum.

use crate::fibonacci::FibonacciHeap;
use crate::storage::NodeKey;
use log::{debug, trace};
use smallvec::{smallvec, SmallVec};

/// Number of degree buckets needed for a heap of `len` elements.
///
/// A node of degree `k` roots at least `F(k+2)` nodes, so degrees stay below
/// `log_phi(len)`, which `2 * log2(len)` bounds from above.
pub(crate) fn degree_bound(len: usize) -> usize {
    if len <= 1 {
        return 1;
    }
    (2.0 * (len as f64).log2()).floor() as usize + 1
}

impl<K: Ord> FibonacciHeap<K> {
    /// Links roots of equal degree and recomputes the minimum.
    ///
    /// `self.min` must be a provisional member of the root ring; exactly
    /// `root_count` roots are visited starting there.
    pub(crate) fn consolidate(&mut self) {
        let Some(start) = self.min else {
            return;
        };

        let mut table: SmallVec<[Option<NodeKey>; 64]> = smallvec![None; degree_bound(self.len)];
        let roots: Vec<NodeKey> = self.store.ring(start).take(self.root_count).collect();
        let roots_before = roots.len();
        let mut links = 0;

        for root in roots {
            let mut x = root;
            let mut degree = self.store[x].degree;

            loop {
                if degree >= table.len() {
                    table.resize(degree + 1, None);
                }
                let Some(y) = table[degree].take() else {
                    table[degree] = Some(x);
                    break;
                };

                // y was visited first and keeps its place on ties
                let (parent, child) = if self.store[x].key < self.store[y].key {
                    (x, y)
                } else {
                    (y, x)
                };
                self.link(child, parent);
                links += 1;

                x = parent;
                degree += 1;
            }
        }

        let mut min: Option<NodeKey> = None;
        for root in table.into_iter().flatten() {
            if min.map_or(true, |m| self.store[root].key < self.store[m].key) {
                min = Some(root);
            }
        }
        self.min = min;

        debug!(
            "consolidated {} roots into {} with {} links",
            roots_before, self.root_count, links
        );
    }

    /// Makes root `child` a child of root `parent`.
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        trace!("linking {:?} under {:?}", child, parent);

        self.store.unlink(child);
        self.root_count -= 1;

        let node = &mut self.store[child];
        node.parent = Some(parent);
        node.marked = false;

        match self.store[parent].child {
            Some(first) => self.store.insert_after(first, child),
            None => self.store[parent].child = Some(child),
        }
        self.store[parent].degree += 1;
    }
}
