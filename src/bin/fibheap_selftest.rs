//! Runs the heap scenario suite and reports pass/fail.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin fibheap-selftest
//! ```

use rust_fibonacci_heap::selftest;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let outcomes = selftest::run_all();
    let failed: Vec<_> = outcomes.iter().filter(|o| !o.passed()).collect();

    if failed.is_empty() {
        println!("all {} scenarios passed", outcomes.len());
        ExitCode::SUCCESS
    } else {
        for outcome in &failed {
            if let Err(failure) = &outcome.result {
                println!("FAILED {}: {}", outcome.name, failure);
            }
        }
        println!("{} of {} scenarios failed", failed.len(), outcomes.len());
        ExitCode::FAILURE
    }
}
