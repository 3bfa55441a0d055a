//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert and decrease_key
//! - O(log n) amortized extract_min and delete
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list (the root ring). The heap maintains the minimum
//! node, which is always a root.
//!
//! Insertion only splices a new singleton tree into the root ring. All
//! restructuring is deferred to [`FibonacciHeap::extract_min`], which
//! consolidates the forest so that no two roots share a degree, and to
//! [`FibonacciHeap::decrease_key`], which cuts subtrees that violate heap
//! order and cascades the cut through marked ancestors.

use crate::storage::{KeyCell, NodeKey, NodeStore};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
use log::debug;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a heap, carried by every handle it issues.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HeapId(u64);

impl HeapId {
    fn next() -> Self {
        HeapId(NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to an element in a Fibonacci heap
///
/// The handle names both the heap that issued it and the node, so it can be
/// checked before any link is touched: a handle from another heap is rejected
/// with [`HeapError::ForeignNode`], and a handle whose element was already
/// removed with [`HeapError::InvalidHandle`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FibonacciHandle {
    pub(crate) heap: HeapId,
    pub(crate) node: NodeKey,
}

impl Handle for FibonacciHandle {}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(5);
/// heap.insert(3);
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(heap.extract_min(), Ok(1));
/// assert_eq!(heap.extract_min(), Ok(3));
/// assert!(heap.is_empty());
/// ```
pub struct FibonacciHeap<K: Ord> {
    pub(crate) id: HeapId,
    pub(crate) store: NodeStore<K>,
    pub(crate) min: Option<NodeKey>,
    pub(crate) len: usize,
    pub(crate) root_count: usize,
}

impl<K: Ord> Default for FibonacciHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FibonacciHeap<K> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_store(NodeStore::default())
    }

    /// Creates a new empty heap whose node arena can hold `capacity` elements
    /// without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_store(NodeStore::with_capacity(capacity))
    }

    fn from_store(store: NodeStore<K>) -> Self {
        Self {
            id: HeapId::next(),
            store,
            min: None,
            len: 0,
            root_count: 0,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of trees in the root ring
    pub fn root_count(&self) -> usize {
        self.root_count
    }

    /// Returns the identity stamped on every handle this heap issues
    pub fn id(&self) -> HeapId {
        self.id
    }

    /// Inserts a key, returning a handle for later `decrease_key`/`delete_node`
    ///
    /// The new node becomes a singleton tree to the right of the minimum.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn insert(&mut self, key: K) -> FibonacciHandle {
        let node = self.store.allocate(key);

        match self.min {
            Some(min) => {
                self.store.insert_after(min, node);
                if self.store[node].key < self.store[min].key {
                    self.min = Some(node);
                }
            }
            None => self.min = Some(node),
        }

        self.len += 1;
        self.root_count += 1;
        self.handle(node)
    }

    /// Returns the minimum key without removing it
    ///
    /// # Errors
    /// `HeapError::EmptyHeap` if the heap has no elements.
    pub fn peek_min(&self) -> Result<&K, HeapError> {
        let min = self.min.ok_or(HeapError::EmptyHeap)?;
        Ok(self.store[min].key.finite())
    }

    /// Removes and returns the minimum key
    ///
    /// # Errors
    /// `HeapError::EmptyHeap` if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn extract_min(&mut self) -> Result<K, HeapError> {
        self.take_min().map(KeyCell::into_finite)
    }

    /// Decreases the key of the element identified by the handle
    ///
    /// A `new_key` greater than the current key is ignored. If the new key is
    /// smaller than the parent's, the node is cut into the root ring and the
    /// cut cascades through marked ancestors.
    ///
    /// # Errors
    /// - `HeapError::ForeignNode` if the handle was issued by another heap
    /// - `HeapError::InvalidHandle` if the element was already removed
    ///
    /// # Time Complexity
    /// O(1) amortized
    pub fn decrease_key(&mut self, handle: &FibonacciHandle, new_key: K) -> Result<(), HeapError> {
        let node = self.resolve(handle)?;
        let new_key = KeyCell::Finite(new_key);

        if new_key > self.store[node].key {
            return Ok(());
        }

        self.store[node].key = new_key;
        self.restore_order(node);
        Ok(())
    }

    /// Removes the element identified by the handle and returns its key
    ///
    /// The node's key is replaced by a sentinel below every real key, which
    /// makes it the minimum, and the minimum is then extracted.
    ///
    /// # Errors
    /// Same as [`FibonacciHeap::decrease_key`].
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn delete_node(&mut self, handle: &FibonacciHandle) -> Result<K, HeapError> {
        let node = self.resolve(handle)?;
        let key = mem::replace(&mut self.store[node].key, KeyCell::NegInfinity);

        self.restore_order(node);
        debug_assert_eq!(self.min, Some(node));
        self.take_min()?;

        Ok(key.into_finite())
    }

    /// Releases every node and leaves the heap empty but usable
    pub fn clear(&mut self) {
        self.release_all();
        self.store.clear();
    }

    /// Destroys the heap, returning the number of nodes released
    ///
    /// Every tree is walked with an explicit worklist, so deep trees do not
    /// grow the call stack, and each node is released exactly once.
    pub fn destroy(mut self) -> usize {
        self.release_all()
    }

    pub(crate) fn handle(&self, node: NodeKey) -> FibonacciHandle {
        FibonacciHandle { heap: self.id, node }
    }

    /// Checks a handle against this heap before anything is mutated.
    pub(crate) fn resolve(&self, handle: &FibonacciHandle) -> Result<NodeKey, HeapError> {
        if handle.heap != self.id {
            return Err(HeapError::ForeignNode);
        }
        if !self.store.contains(handle.node) {
            return Err(HeapError::InvalidHandle);
        }
        Ok(handle.node)
    }

    /// Unlinks the minimum, promotes its children, consolidates, and returns
    /// the removed node's key.
    fn take_min(&mut self) -> Result<KeyCell<K>, HeapError> {
        let min = self.min.ok_or(HeapError::EmptyHeap)?;

        if let Some(child) = self.store[min].child.take() {
            let children: Vec<NodeKey> = self.store.ring(child).collect();
            self.root_count += children.len();
            for c in children {
                let node = &mut self.store[c];
                node.parent = None;
                node.marked = false;
                self.store.insert_after(min, c);
            }
            self.store[min].degree = 0;
        }

        let next = self.store.unlink(min);
        self.len -= 1;
        self.root_count -= 1;

        match next {
            Some(next) => {
                self.min = Some(next);
                self.consolidate();
            }
            None => self.min = None,
        }

        let node = self.store.release(min).ok_or(HeapError::InvalidHandle)?;
        Ok(node.key)
    }

    fn release_all(&mut self) -> usize {
        let mut released = 0;
        let mut worklist: Vec<NodeKey> = self.min.take().into_iter().collect();

        while let Some(start) = worklist.pop() {
            let members: Vec<NodeKey> = self.store.ring(start).collect();
            for member in members {
                if let Some(node) = self.store.release(member) {
                    worklist.extend(node.child);
                    released += 1;
                }
            }
        }

        debug!("released {} nodes of heap {:?}", released, self.id);
        debug_assert_eq!(released, self.len);
        self.len = 0;
        self.root_count = 0;
        released
    }
}

impl<K: Ord> Heap<K> for FibonacciHeap<K> {
    fn new() -> Self {
        FibonacciHeap::new()
    }

    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }

    fn push(&mut self, key: K) {
        self.insert(key);
    }

    fn peek(&self) -> Result<&K, HeapError> {
        self.peek_min()
    }

    fn pop(&mut self) -> Result<K, HeapError> {
        self.extract_min()
    }
}

impl<K: Ord> DecreaseKeyHeap<K> for FibonacciHeap<K> {
    type Handle = FibonacciHandle;

    fn push_with_handle(&mut self, key: K) -> FibonacciHandle {
        self.insert(key)
    }

    fn decrease_key(&mut self, handle: &FibonacciHandle, new_key: K) -> Result<(), HeapError> {
        FibonacciHeap::decrease_key(self, handle, new_key)
    }

    fn delete(&mut self, handle: &FibonacciHandle) -> Result<K, HeapError> {
        self.delete_node(handle)
    }
}
