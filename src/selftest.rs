//! Scenario suite exercising the public heap operations end to end
//!
//! Each scenario builds a small heap, drives it through one operation family
//! and checks both the reported keys and the resulting forest shape. The
//! `fibheap-selftest` binary runs [`run_all`] and reports the outcome; the
//! integration tests run the same suite.

use crate::fibonacci::{FibonacciHandle, FibonacciHeap};
use crate::traits::HeapError;
use crate::validate::InvariantError;
use log::{error, info};
use thiserror::Error;

/// Why a scenario failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioFailure {
    #[error("{what}: expected {expected}, found {found}")]
    Mismatch {
        what: &'static str,
        expected: String,
        found: String,
    },
    #[error("heap operation failed: {0}")]
    Heap(#[from] HeapError),
    #[error("heap invariant broken: {0}")]
    Invariant(#[from] InvariantError),
}

/// One named check of the suite
pub struct Scenario {
    pub name: &'static str,
    pub run: fn() -> Result<(), ScenarioFailure>,
}

/// Result of running one scenario
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub result: Result<(), ScenarioFailure>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

fn expect_eq<T>(what: &'static str, expected: T, found: T) -> Result<(), ScenarioFailure>
where
    T: PartialEq + std::fmt::Debug,
{
    if expected == found {
        Ok(())
    } else {
        Err(ScenarioFailure::Mismatch {
            what,
            expected: format!("{:?}", expected),
            found: format!("{:?}", found),
        })
    }
}

/// Heap holding 1..=5, inserted in ascending order.
fn one_to_five() -> (FibonacciHeap<i32>, Vec<FibonacciHandle>) {
    let mut heap = FibonacciHeap::new();
    let handles = (1..=5).map(|k| heap.insert(k)).collect();
    (heap, handles)
}

fn key_of(heap: &FibonacciHeap<i32>, handle: &FibonacciHandle) -> Result<i32, ScenarioFailure> {
    Ok(*heap.node(handle)?.key())
}

fn create_empty() -> Result<(), ScenarioFailure> {
    let heap: FibonacciHeap<i32> = FibonacciHeap::new();
    expect_eq("minimum", None, heap.min_handle())?;
    expect_eq("size", 0, heap.len())?;
    expect_eq("roots", 0, heap.root_count())?;
    expect_eq("peek", Err(HeapError::EmptyHeap), heap.peek_min())?;
    expect_eq("released", 0, heap.destroy())
}

fn insert_single_key() -> Result<(), ScenarioFailure> {
    let mut heap = FibonacciHeap::new();
    let h = heap.insert(1);

    expect_eq("minimum", Ok(&1), heap.peek_min())?;
    expect_eq("size", 1, heap.len())?;
    let node = heap.node(&h)?;
    expect_eq("child", None, node.child())?;
    expect_eq("parent", None, node.parent())?;
    expect_eq("siblings", (h, h), (node.left(), node.right()))?;
    expect_eq("degree and mark", (0, false), (node.degree(), node.is_marked()))?;
    heap.validate()?;
    Ok(())
}

fn insert_more_keys() -> Result<(), ScenarioFailure> {
    let (heap, _) = one_to_five();
    let min = heap.min_handle().ok_or(HeapError::EmptyHeap)?;
    let view = heap.node(&min)?;

    expect_eq("minimum", 1, *view.key())?;
    expect_eq("size", 5, heap.len())?;
    expect_eq("right of minimum", 5, key_of(&heap, &view.right())?)?;
    expect_eq("left of minimum", 2, key_of(&heap, &view.left())?)?;
    heap.validate()?;
    Ok(())
}

fn extract_min_once() -> Result<(), ScenarioFailure> {
    let (mut heap, _) = one_to_five();

    expect_eq("extracted", 1, heap.extract_min()?)?;
    expect_eq("minimum", Ok(&2), heap.peek_min())?;
    expect_eq("size and roots", (4, 1), (heap.len(), heap.root_count()))?;
    heap.validate()?;
    Ok(())
}

fn extract_min_twice() -> Result<(), ScenarioFailure> {
    let (mut heap, _) = one_to_five();

    heap.extract_min()?;
    expect_eq("extracted", 2, heap.extract_min()?)?;
    expect_eq("minimum", Ok(&3), heap.peek_min())?;
    expect_eq("size and roots", (3, 2), (heap.len(), heap.root_count()))?;
    heap.validate()?;
    Ok(())
}

fn extract_min_drains_in_order() -> Result<(), ScenarioFailure> {
    let (mut heap, _) = one_to_five();
    let drained = (0..5)
        .map(|_| heap.extract_min())
        .collect::<Result<Vec<_>, _>>()?;

    expect_eq("drained", vec![1, 2, 3, 4, 5], drained)?;
    expect_eq("empty", true, heap.is_empty())?;
    expect_eq("extract on empty", Err(HeapError::EmptyHeap), heap.extract_min())
}

fn decrease_key_single_node() -> Result<(), ScenarioFailure> {
    let mut heap = FibonacciHeap::new();
    let h = heap.insert(10);
    heap.decrease_key(&h, 5)?;

    expect_eq("minimum", Ok(&5), heap.peek_min())?;
    heap.decrease_key(&h, 50)?;
    expect_eq("minimum after increase", Ok(&5), heap.peek_min())
}

fn decrease_key_cuts_child() -> Result<(), ScenarioFailure> {
    let (mut heap, _) = one_to_five();
    heap.extract_min()?;

    let root = heap.min_handle().ok_or(HeapError::EmptyHeap)?;
    let child = heap.node(&root)?.child().ok_or(HeapError::InvalidHandle)?;
    heap.decrease_key(&child, 0)?;

    let min = heap.min_handle().ok_or(HeapError::EmptyHeap)?;
    let view = heap.node(&min)?;
    expect_eq("minimum", 0, *view.key())?;
    expect_eq("right of minimum", 2, key_of(&heap, &view.right())?)?;
    let old_root = heap.node(&view.right())?;
    let remaining = old_root.child().ok_or(HeapError::InvalidHandle)?;
    expect_eq("remaining child", 4, key_of(&heap, &remaining)?)?;
    heap.validate()?;
    Ok(())
}

fn decrease_key_promotes_grandchild() -> Result<(), ScenarioFailure> {
    let (mut heap, handles) = one_to_five();
    heap.extract_min()?;
    heap.extract_min()?;

    // 5 is the only node below the root ring, one level under 4
    let five = &handles[4];
    expect_eq("parent of 5", Some(handles[3]), heap.node(five)?.parent())?;
    heap.decrease_key(five, 0)?;

    let view = heap.node(five)?;
    expect_eq("minimum", Ok(&0), heap.peek_min())?;
    expect_eq("promoted", true, view.is_root())?;
    expect_eq("size and roots", (3, 3), (heap.len(), heap.root_count()))?;
    expect_eq("left of promoted", handles[2], view.left())?;
    expect_eq("right of promoted", handles[3], view.right())?;
    heap.validate()?;
    Ok(())
}

fn delete_single_node() -> Result<(), ScenarioFailure> {
    let mut heap = FibonacciHeap::new();
    let h = heap.insert(10);

    expect_eq("deleted", 10, heap.delete_node(&h)?)?;
    expect_eq("minimum", None, heap.min_handle())?;
    expect_eq("size and roots", (0, 0), (heap.len(), heap.root_count()))?;
    heap.validate()?;
    Ok(())
}

fn delete_root_node() -> Result<(), ScenarioFailure> {
    let (mut heap, _) = one_to_five();
    let min = heap.min_handle().ok_or(HeapError::EmptyHeap)?;
    let victim = heap.node(&min)?.right();

    expect_eq("deleted", 5, heap.delete_node(&victim)?)?;
    expect_eq("minimum", Ok(&1), heap.peek_min())?;
    expect_eq("size and roots", (4, 1), (heap.len(), heap.root_count()))?;
    let child = heap.node(&min)?.child().ok_or(HeapError::InvalidHandle)?;
    expect_eq("child of minimum", 2, key_of(&heap, &child)?)?;
    expect_eq("deleted handle", false, heap.contains(&victim))?;
    heap.validate()?;
    Ok(())
}

fn reject_foreign_node() -> Result<(), ScenarioFailure> {
    let (mut heap, _) = one_to_five();
    let mut other = FibonacciHeap::new();
    let stranger = other.insert(0);

    expect_eq("decrease", Err(HeapError::ForeignNode), heap.decrease_key(&stranger, -1))?;
    expect_eq("delete", Err(HeapError::ForeignNode), heap.delete_node(&stranger))?;
    expect_eq("untouched size", 5, heap.len())?;
    heap.validate()?;
    other.validate()?;
    Ok(())
}

/// Every scenario of the suite, in execution order
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario { name: "create empty heap", run: create_empty },
        Scenario { name: "insert single key", run: insert_single_key },
        Scenario { name: "insert more keys", run: insert_more_keys },
        Scenario { name: "extract min once", run: extract_min_once },
        Scenario { name: "extract min twice", run: extract_min_twice },
        Scenario { name: "extract min drains in order", run: extract_min_drains_in_order },
        Scenario { name: "decrease key of single node", run: decrease_key_single_node },
        Scenario { name: "decrease key cuts child", run: decrease_key_cuts_child },
        Scenario { name: "decrease key promotes grandchild", run: decrease_key_promotes_grandchild },
        Scenario { name: "delete single node", run: delete_single_node },
        Scenario { name: "delete root node", run: delete_root_node },
        Scenario { name: "reject foreign node", run: reject_foreign_node },
    ]
}

/// Runs every scenario, logging each outcome
pub fn run_all() -> Vec<ScenarioOutcome> {
    scenarios()
        .into_iter()
        .map(|scenario| {
            let result = (scenario.run)();
            match &result {
                Ok(()) => info!("{}: ok", scenario.name),
                Err(failure) => error!("{}: {}", scenario.name, failure),
            }
            ScenarioOutcome {
                name: scenario.name,
                result,
            }
        })
        .collect()
}
