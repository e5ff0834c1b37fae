//! The per-worker increment loop
//!
//! Each phase runs three of these concurrently against one shared
//! counter. The loop checks the stop flag before every iteration, so a
//! stop request costs at most one extra increment per worker.

use std::hint::black_box;

use tracing::debug;

use super::control::RunControl;
use crate::counter::SharedCounter;

/// Scheduling hint for a worker.
///
/// The three workers of a phase are conceptually scheduled with different
/// urgencies. Std threads expose no portable priority control, so the
/// hint names the worker thread and labels its result; it carries no
/// correctness weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Normal, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

/// Result from one worker's loop
#[derive(Debug)]
pub struct WorkerResult {
    pub priority: Priority,
    /// Iterations actually performed; short of the target when stopped.
    pub iterations_done: u64,
    /// Last value observed by the read step. Retained and logged so the
    /// reads cannot be eliminated as dead code.
    pub last_read: u64,
}

/// Perform up to `iterations` read-then-increment operations against the
/// counter, stopping early (without error) once the flag clears.
pub fn run_workload(
    counter: &dyn SharedCounter,
    iterations: u64,
    priority: Priority,
    control: &RunControl,
) -> WorkerResult {
    let mut scratch = 0u64;
    let mut done = 0u64;

    for _ in 0..iterations {
        if !control.should_run() {
            break;
        }
        scratch = black_box(counter.increment());
        done += 1;
    }

    debug!(
        priority = priority.label(),
        scratch, done, "workload finished"
    );

    WorkerResult {
        priority,
        iterations_done: done,
        last_read: scratch,
    }
}
