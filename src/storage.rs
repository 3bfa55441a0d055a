//! Arena storage for heap nodes
//!
//! Nodes live in a [`SlotMap`] and reference each other through generational
//! [`NodeKey`]s instead of pointers. Parent and sibling links are plain keys
//! and own nothing; the arena owns every node, so releasing a node is a single
//! `remove` and a stale key can never reach a reused slot.

use slotmap::{new_key_type, SlotMap};
use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Arena key naming one node of a heap
    pub struct NodeKey;
}

/// A node's key, extended with a value below every real key.
///
/// `NegInfinity` is only ever held while a node is being deleted; it forces the
/// node to become the minimum even when another node holds an equal real key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum KeyCell<K> {
    NegInfinity,
    Finite(K),
}

impl<K: Ord> PartialOrd for KeyCell<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for KeyCell<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KeyCell::NegInfinity, KeyCell::NegInfinity) => Ordering::Equal,
            (KeyCell::NegInfinity, KeyCell::Finite(_)) => Ordering::Less,
            (KeyCell::Finite(_), KeyCell::NegInfinity) => Ordering::Greater,
            (KeyCell::Finite(a), KeyCell::Finite(b)) => a.cmp(b),
        }
    }
}

const SENTINEL_ESCAPED: &str = "the deletion sentinel never outlives delete_node";

impl<K> KeyCell<K> {
    pub(crate) fn finite(&self) -> &K {
        match self {
            KeyCell::Finite(key) => key,
            KeyCell::NegInfinity => unreachable!("{}", SENTINEL_ESCAPED),
        }
    }

    pub(crate) fn into_finite(self) -> K {
        match self {
            KeyCell::Finite(key) => key,
            KeyCell::NegInfinity => unreachable!("{}", SENTINEL_ESCAPED),
        }
    }
}

pub(crate) struct Node<K> {
    pub(crate) key: KeyCell<K>,
    pub(crate) parent: Option<NodeKey>,
    /// Representative child; the others are reached through its sibling ring.
    pub(crate) child: Option<NodeKey>,
    pub(crate) left: NodeKey,
    pub(crate) right: NodeKey,
    pub(crate) degree: usize,
    pub(crate) marked: bool,
}

/// Owner of every node of one heap.
pub(crate) struct NodeStore<K> {
    nodes: SlotMap<NodeKey, Node<K>>,
}

impl<K> Default for NodeStore<K> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<K> NodeStore<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Allocates a fresh node: singleton ring, no parent or child, degree 0, unmarked.
    pub(crate) fn allocate(&mut self, key: K) -> NodeKey {
        self.nodes.insert_with_key(|this| Node {
            key: KeyCell::Finite(key),
            parent: None,
            child: None,
            left: this,
            right: this,
            degree: 0,
            marked: false,
        })
    }

    /// Releases a node. Returns `None` if it was already released.
    pub(crate) fn release(&mut self, node: NodeKey) -> Option<Node<K>> {
        self.nodes.remove(node)
    }

    pub(crate) fn get(&self, node: NodeKey) -> Option<&Node<K>> {
        self.nodes.get(node)
    }

    pub(crate) fn contains(&self, node: NodeKey) -> bool {
        self.nodes.contains_key(node)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<K> Index<NodeKey> for NodeStore<K> {
    type Output = Node<K>;

    fn index(&self, node: NodeKey) -> &Node<K> {
        &self.nodes[node]
    }
}

impl<K> IndexMut<NodeKey> for NodeStore<K> {
    fn index_mut(&mut self, node: NodeKey) -> &mut Node<K> {
        &mut self.nodes[node]
    }
}
