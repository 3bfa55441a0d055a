//! Operation Benchmarks
//!
//! Wall-clock benchmarks of the three workloads a Fibonacci heap is built for:
//! bulk insertion followed by a full drain, decrease-key heavy traffic after
//! the forest has been consolidated, and deletion of arbitrary elements.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//!
//! # Only one workload
//! cargo bench --bench heap_ops -- decrease_key
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_fibonacci_heap::FibonacciHeap;

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    fn keys(&mut self, n: usize) -> Vec<i64> {
        (0..n).map(|_| (self.next() % 1_000_000) as i64).collect()
    }
}

fn bench_insert_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_drain");

    for &n in &SIZES {
        let keys = Lcg::new(42).keys(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = FibonacciHeap::with_capacity(keys.len());
                for &k in keys {
                    heap.insert(k);
                }
                while let Ok(k) = heap.extract_min() {
                    black_box(k);
                }
            })
        });
    }
    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");

    for &n in &SIZES {
        let keys = Lcg::new(7).keys(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = FibonacciHeap::with_capacity(keys.len() + 1);
                let handles: Vec<_> = keys.iter().map(|&k| heap.insert(k)).collect();
                heap.insert(i64::MIN);
                let _ = heap.extract_min();

                // Every key drops below its old value, most of them below
                // their parent
                for (h, &k) in handles.iter().zip(keys) {
                    let _ = heap.decrease_key(h, k - 1_000_000);
                }
                black_box(heap.peek_min().ok().copied());
            })
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    group.sample_size(20);

    for &n in &SIZES {
        let keys = Lcg::new(1234).keys(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = FibonacciHeap::with_capacity(keys.len());
                let handles: Vec<_> = keys.iter().map(|&k| heap.insert(k)).collect();
                let _ = heap.extract_min();

                for h in handles.iter().step_by(2) {
                    black_box(heap.delete_node(h).ok());
                }
                black_box(heap.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert_drain, bench_decrease_key, bench_delete);
criterion_main!(benches);
