//! Cuts: promoting a subtree whose root lost heap order to the root ring, and
//! the cascading cut that follows marked ancestors upward.

use crate::fibonacci::FibonacciHeap;
use crate::storage::NodeKey;
use log::trace;

impl<K: Ord> FibonacciHeap<K> {
    /// Re-establishes heap order after `node`'s key was lowered.
    pub(crate) fn restore_order(&mut self, node: NodeKey) {
        if let Some(parent) = self.store[node].parent {
            if self.store[node].key < self.store[parent].key {
                self.cut(node, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(min) = self.min {
            if self.store[node].key < self.store[min].key {
                self.min = Some(node);
            }
        }
    }

    /// Detaches `node` from `parent` and splices it into the root ring,
    /// to the right of the minimum.
    fn cut(&mut self, node: NodeKey, parent: NodeKey) {
        trace!("cutting {:?} from {:?}", node, parent);

        let sibling = self.store.unlink(node);
        let p = &mut self.store[parent];
        if p.child == Some(node) {
            p.child = sibling;
        }
        p.degree -= 1;

        // a node with a parent implies a non-empty root ring
        if let Some(min) = self.min {
            self.store.insert_after(min, node);
        }
        let n = &mut self.store[node];
        n.parent = None;
        n.marked = false;
        self.root_count += 1;
    }

    /// Walks up from `node`: an unmarked non-root is marked and the walk
    /// stops; a marked non-root is cut and the walk continues at its parent.
    fn cascading_cut(&mut self, mut node: NodeKey) {
        while let Some(parent) = self.store[node].parent {
            if !self.store[node].marked {
                self.store[node].marked = true;
                return;
            }
            trace!("cascading cut reached marked {:?}", node);
            self.cut(node, parent);
            node = parent;
        }
    }
}
