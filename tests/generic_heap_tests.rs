//! Generic tests for the heap trait interface
//!
//! These tests are written against [`Heap`] and [`DecreaseKeyHeap`] only, so
//! they exercise the trait surface rather than the inherent API.

use rust_fibonacci_heap::{DecreaseKeyHeap, FibonacciHeap, Heap, HeapError};

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), Err(HeapError::EmptyHeap));
    assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
}

/// Test basic insert and pop operations
fn test_basic_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    heap.push(5);
    heap.push(1);
    heap.push(10);
    heap.push(3);

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Ok(&1));

    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Ok(3));
    assert_eq!(heap.pop(), Ok(5));
    assert_eq!(heap.pop(), Ok(10));
    assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
    assert!(heap.is_empty());
}

/// Test the five-key round trip
fn test_round_trip<H: Heap<i32>>() {
    let mut heap = H::new();
    for k in 1..=5 {
        heap.push(k);
    }

    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop().ok()).collect();
    assert_eq!(drained, vec![1, 2, 3, 4, 5]);
    assert!(heap.is_empty());
}

/// Test decrease_key operations extensively
fn test_decrease_key_operations<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();

    let _h1 = heap.push_with_handle(100);
    let h2 = heap.push_with_handle(200);
    let _h3 = heap.push_with_handle(300);
    let h4 = heap.push_with_handle(400);

    assert_eq!(heap.peek(), Ok(&100));

    // Decrease key of element not at min
    heap.decrease_key(&h2, 50).unwrap();
    assert_eq!(heap.peek(), Ok(&50));

    // Decrease key to become new min
    heap.decrease_key(&h4, 25).unwrap();
    assert_eq!(heap.peek(), Ok(&25));

    // Decrease key of current min even more
    heap.decrease_key(&h4, 1).unwrap();
    assert_eq!(heap.peek(), Ok(&1));

    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Ok(50));
    assert_eq!(heap.pop(), Ok(100));
    assert_eq!(heap.pop(), Ok(300));
}

/// Test that increasing a key is a silent no-op
fn test_increase_is_ignored<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let h = heap.push_with_handle(10);
    heap.push(20);

    assert_eq!(heap.decrease_key(&h, 30), Ok(()));
    assert_eq!(heap.peek(), Ok(&10));
    assert_eq!(heap.len(), 2);

    // Equal key is accepted and changes nothing either
    assert_eq!(heap.decrease_key(&h, 10), Ok(()));
    assert_eq!(heap.pop(), Ok(10));
    assert_eq!(heap.pop(), Ok(20));
}

/// Test delete of arbitrary elements
fn test_delete_operations<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let handles: Vec<_> = (0..20).map(|k| heap.push_with_handle(k * 10)).collect();

    // Force some structure first
    assert_eq!(heap.pop(), Ok(0));

    assert_eq!(heap.delete(&handles[7]), Ok(70));
    assert_eq!(heap.delete(&handles[1]), Ok(10));
    assert_eq!(heap.delete(&handles[19]), Ok(190));
    assert_eq!(heap.len(), 16);

    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop().ok()).collect();
    let expected: Vec<i32> = (2..19).filter(|&k| k != 7).map(|k| k * 10).collect();
    assert_eq!(drained, expected);
}

/// Test handles after their element is gone
fn test_stale_handles<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let h1 = heap.push_with_handle(1);
    let h2 = heap.push_with_handle(2);

    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.decrease_key(&h1, 0), Err(HeapError::InvalidHandle));
    assert_eq!(heap.delete(&h1), Err(HeapError::InvalidHandle));

    assert_eq!(heap.delete(&h2), Ok(2));
    assert_eq!(heap.delete(&h2), Err(HeapError::InvalidHandle));
    assert!(heap.is_empty());
}

/// Test duplicate keys
fn test_duplicates<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let handles: Vec<_> = [5, 5, 5, 1, 1, 9].iter().map(|&k| heap.push_with_handle(k)).collect();

    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.delete(&handles[4]), Ok(1));
    assert_eq!(heap.peek(), Ok(&5));
    heap.decrease_key(&handles[5], 5).unwrap();

    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop().ok()).collect();
    assert_eq!(drained, vec![5, 5, 5, 5]);
}

#[test]
fn test_fibonacci_empty() {
    test_empty_heap::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_basic() {
    test_basic_operations::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_round_trip() {
    test_round_trip::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_decrease_key() {
    test_decrease_key_operations::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_increase_ignored() {
    test_increase_is_ignored::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_delete() {
    test_delete_operations::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_stale_handles() {
    test_stale_handles::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_duplicates() {
    test_duplicates::<FibonacciHeap<i32>>();
}
